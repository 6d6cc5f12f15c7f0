// src/gui/editor.rs - code input plus the line highlight controls
use egui::{DragValue, TextEdit, Ui};

use super::state::UiState;
use crate::core::actions::Command;

const MAX_LINE_INPUT: usize = 9999;

pub struct EditorPanel<'a> {
    state: &'a mut UiState,
    commands: &'a mut Vec<Command>,
}

impl<'a> EditorPanel<'a> {
    pub fn new(state: &'a mut UiState, commands: &'a mut Vec<Command>) -> Self {
        Self { state, commands }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("Code Editor");

        let editor_height = (ui.available_height() * 0.55).max(160.0);
        egui::ScrollArea::vertical()
            .id_salt("code_editor")
            .max_height(editor_height)
            .show(ui, |ui| {
                let response = ui.add(
                    TextEdit::multiline(&mut self.state.source)
                        .code_editor()
                        .hint_text("Paste your code here...")
                        .desired_width(f32::INFINITY)
                        .desired_rows(18),
                );
                if response.changed() {
                    self.commands.push(Command::SetSource(self.state.source.clone()));
                }
            });

        ui.add_space(4.0);
        self.highlight_controls(ui);
    }

    fn highlight_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("From line:");
            ui.add(DragValue::new(&mut self.state.line_start).range(1..=MAX_LINE_INPUT));
            ui.label("To:");
            ui.add(DragValue::new(&mut self.state.line_end).range(1..=MAX_LINE_INPUT));

            if ui.button("Highlight Lines").clicked() {
                self.commands.push(Command::HighlightLines {
                    from: self.state.line_start,
                    to: self.state.line_end,
                });
            }

            if ui.button("Clear Highlights").clicked() {
                self.commands.push(Command::ClearHighlights);
            }
        });
    }
}
