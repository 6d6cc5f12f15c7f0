// preview panel - the scaled snapshot with save and copy actions
use egui::{Align, Layout, Ui, Vec2};

use super::state::UiState;
use crate::core::actions::Command;

// room kept below the image for the buttons
const BUTTON_ROW_HEIGHT: f32 = 36.0;

pub struct PreviewPanel<'a> {
    state: &'a UiState,
    commands: &'a mut Vec<Command>,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(state: &'a UiState, commands: &'a mut Vec<Command>) -> Self {
        Self { state, commands }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("Preview");

        let min_size = Vec2::new(400.0, 300.0);
        let max_size = (ui.available_size() - Vec2::new(0.0, BUTTON_ROW_HEIGHT)).max(min_size);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(min_size.min(max_size));
            ui.with_layout(Layout::top_down(Align::Center), |ui| match &self.state.preview {
                Some(texture) => {
                    ui.add(
                        egui::Image::new(texture)
                            .max_size(max_size)
                            .maintain_aspect_ratio(true),
                    );
                }
                None => {
                    ui.add_space(max_size.y.min(300.0) / 2.0 - 8.0);
                    ui.weak("Preview will appear here");
                }
            });
        });

        ui.horizontal(|ui| {
            if ui.button("💾 Save Screenshot").clicked() {
                self.commands.push(Command::Save);
            }
            if ui.button("📋 Copy to Clipboard").clicked() {
                self.commands.push(Command::CopyImage);
            }
        });
    }
}
