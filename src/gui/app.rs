// app module specifying gui interface with core command dispatch
use std::panic::{self, AssertUnwindSafe};

use super::{
    dialogs, editor::EditorPanel, options::OptionsPanel, preview::PreviewPanel, state::UiState,
    themes,
};
use crate::core::actions::{Command, Effect};
use crate::core::error::Result;
use crate::core::export;
use crate::core::session::Session;
use crate::core::themes::Theme;
use egui::{Context, ViewportCommand};

pub struct CodeSnapApp {
    session: Session,
    state: UiState,
    applied_theme: Option<&'static str>,
}

impl CodeSnapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let session = Session::new()?;
        log::info!("CodeSnap initialized successfully");

        Ok(Self {
            session,
            state: UiState::default(),
            applied_theme: None,
        })
    }

    fn menu_bar(&mut self, ctx: &Context, commands: &mut Vec<Command>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("📷 Generate (Ctrl+Enter)").clicked() {
                        commands.push(Command::Generate);
                        ui.close();
                    }

                    if ui.button("💾 Save Screenshot (Ctrl+S)").clicked() {
                        commands.push(Command::Save);
                        ui.close();
                    }

                    if ui.button("📋 Copy to Clipboard").clicked() {
                        commands.push(Command::CopyImage);
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("❌ Quit (Ctrl+Q)").clicked() {
                        ctx.send_viewport_cmd(ViewportCommand::Close);
                        ui.close();
                    }
                });

                ui.menu_button("Theme", |ui| {
                    for name in Theme::names() {
                        if ui.button(name).clicked() {
                            commands.push(Command::SelectTheme(name.to_string()));
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    fn status_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let config = self.session.config();
                ui.label(format!("{}×{}", config.width(), config.height()));
                ui.separator();
                ui.label(self.session.theme_name());
                ui.separator();
                let highlights = self.session.highlights();
                if highlights.is_empty() {
                    ui.label("No highlights");
                } else {
                    ui.label(format!("Highlighted: {}", highlights.len()));
                }

                if let Some(status) = &self.state.status {
                    ui.separator();
                    ui.label(status);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Lines: {}", self.session.line_count()));
                });
            });
        });
    }

    fn handle_shortcuts(&mut self, ctx: &Context, commands: &mut Vec<Command>) {
        let quit = ctx.input_mut(|i| {
            let ctrl = |key| egui::KeyboardShortcut::new(egui::Modifiers::CTRL, key);
            let shortcuts = [
                (ctrl(egui::Key::S), Command::Save),
                (ctrl(egui::Key::Enter), Command::Generate),
            ];

            for (shortcut, command) in shortcuts {
                if i.consume_shortcut(&shortcut) {
                    commands.push(command);
                }
            }

            i.consume_shortcut(&ctrl(egui::Key::Q))
        });

        // outside input_mut, the context is locked in there
        if quit {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    // a panic inside one command is logged by the panic hook, the window keeps running
    fn run_command(&mut self, ctx: &Context, command: Command) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.handle_command(ctx, command)));
        if outcome.is_err() {
            log::warn!("Command aborted by a panic, continuing");
        }
    }

    // Centralized command handler - the session decides, the window carries out the effect
    fn handle_command(&mut self, ctx: &Context, command: Command) {
        let title = match &command {
            Command::SelectTheme(_) => "Theme Error",
            Command::SetFont(_) => "Font Error",
            _ => "Error",
        };

        match self.session.dispatch(command) {
            Ok(Effect::None) => {}
            Ok(Effect::Rerender) => {
                self.update_preview(ctx);
            }
            Ok(Effect::Export) => self.save_screenshot(ctx),
            Ok(Effect::CopyToClipboard) => self.copy_screenshot(ctx),
            Err(e) => dialogs::show_error(title, &e.to_string()),
        }
    }

    // renders and refreshes the preview; None when there is nothing to show
    fn update_preview(&mut self, ctx: &Context) -> Option<image::RgbaImage> {
        match self.session.render() {
            Ok(Some(image)) => {
                self.state.set_preview(ctx, &image);
                Some(image)
            }
            Ok(None) => None,
            Err(e) => {
                dialogs::show_error("Rendering Error", &e.to_string());
                None
            }
        }
    }

    fn save_screenshot(&mut self, ctx: &Context) {
        let Some(image) = self.update_preview(ctx) else {
            return;
        };
        let Some(path) = dialogs::pick_save_path() else {
            return;
        };

        match export::save_image(&image, &path) {
            Ok(written) => self.state.status = Some(format!("Saved {}", written.display())),
            Err(e) => dialogs::show_error("Save Error", &e.to_string()),
        }
    }

    fn copy_screenshot(&mut self, ctx: &Context) {
        let Some(image) = self.update_preview(ctx) else {
            return;
        };

        match export::copy_to_clipboard(&image) {
            Ok(()) => self.state.status = Some("Copied to clipboard".to_string()),
            Err(e) => dialogs::show_error("Clipboard Error", &e.to_string()),
        }
    }

    fn sync_theme(&mut self, ctx: &Context) {
        let name = self.session.theme_name();
        if self.applied_theme == Some(name) {
            return;
        }
        if let Ok(theme) = Theme::by_name(name) {
            themes::apply_theme(ctx, theme);
        }
        self.applied_theme = Some(name);
    }
}

impl eframe::App for CodeSnapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);

        let mut commands = Vec::new();
        self.handle_shortcuts(ctx, &mut commands);
        self.menu_bar(ctx, &mut commands);
        self.status_bar(ctx);

        egui::SidePanel::right("preview_panel")
            .resizable(true)
            .default_width(460.0)
            .min_width(420.0)
            .show(ctx, |ui| {
                PreviewPanel::new(&self.state, &mut commands).show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                EditorPanel::new(&mut self.state, &mut commands).show(ui);
                ui.separator();
                OptionsPanel::new(&self.session, &mut commands).show(ui);
            });
        });

        for command in commands {
            self.run_command(ctx, command);
        }
    }
}
