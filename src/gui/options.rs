// options panel - theme, font, colors, padding, size and window chrome
use egui::{ComboBox, DragValue, Slider, Ui};

use super::dialogs;
use crate::core::actions::Command;
use crate::core::color::Color;
use crate::core::config::{ColorRole, HEIGHT_RANGE, PADDING_RANGE, WIDTH_RANGE};
use crate::core::font::{FontFamily, FontSpec, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::core::session::Session;
use crate::core::themes::Theme;

const COLOR_PICKERS: [(ColorRole, &str); 3] = [
    (ColorRole::Background, "Background Color"),
    (ColorRole::Text, "Text Color"),
    (ColorRole::Highlight, "Highlight Color"),
];

pub struct OptionsPanel<'a> {
    session: &'a Session,
    commands: &'a mut Vec<Command>,
}

impl<'a> OptionsPanel<'a> {
    pub fn new(session: &'a Session, commands: &'a mut Vec<Command>) -> Self {
        Self { session, commands }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("Customization");

        egui::Grid::new("options_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                self.theme_row(ui);
                self.font_rows(ui);
                self.color_row(ui);
                self.padding_row(ui);
                self.size_row(ui);
            });

        let mut window_controls = self.session.config().window_controls;
        if ui.checkbox(&mut window_controls, "Show Window Controls").changed() {
            self.commands.push(Command::SetWindowControls(window_controls));
        }

        ui.add_space(6.0);
        if ui.button("📷 Generate Screenshot").clicked() {
            self.commands.push(Command::Generate);
        }
    }

    fn theme_row(&mut self, ui: &mut Ui) {
        ui.label("Theme:");
        let current = self.session.theme_name();
        let mut selected = current;
        ComboBox::from_id_salt("theme_combo")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for name in Theme::names() {
                    ui.selectable_value(&mut selected, name, name);
                }
            });
        if selected != current {
            self.commands.push(Command::SelectTheme(selected.to_string()));
        }
        ui.end_row();
    }

    fn font_rows(&mut self, ui: &mut Ui) {
        let session = self.session;
        let spec = &session.config().font;

        ui.label("Font:");
        ui.horizontal(|ui| {
            let mut family = spec.family.clone();
            ComboBox::from_id_salt("font_combo")
                .selected_text(family.to_string())
                .show_ui(ui, |ui| {
                    for builtin in [FontFamily::Monospace, FontFamily::Proportional] {
                        let label = builtin.to_string();
                        ui.selectable_value(&mut family, builtin, label);
                    }
                    if let FontFamily::File(_) = &spec.family {
                        let custom = spec.family.clone();
                        ui.selectable_value(&mut family, custom.clone(), custom.to_string());
                    }
                });
            if family != spec.family {
                self.commands.push(Command::SetFont(FontSpec::new(family, spec.size)));
            }

            if ui.button("Load font file…").clicked() {
                if let Some(path) = dialogs::pick_font_file() {
                    self.commands
                        .push(Command::SetFont(FontSpec::new(FontFamily::File(path), spec.size)));
                }
            }
        });
        ui.end_row();

        ui.label("Font size:");
        let mut size = spec.size;
        let response = ui.add(Slider::new(&mut size, MIN_FONT_SIZE..=MAX_FONT_SIZE).suffix(" pt"));
        if response.changed() {
            self.commands.push(Command::SetFont(FontSpec::new(spec.family.clone(), size)));
        }
        ui.end_row();
    }

    fn color_row(&mut self, ui: &mut Ui) {
        ui.label("Colors:");
        ui.horizontal(|ui| {
            for (role, label) in COLOR_PICKERS {
                let mut rgb = self.session.config().color(role).to_rgb_array();
                if ui.color_edit_button_srgb(&mut rgb).on_hover_text(label).changed() {
                    self.commands.push(Command::SetColor(role, Color::from_rgb_array(rgb)));
                }
                ui.label(label);
            }
        });
        ui.end_row();
    }

    fn padding_row(&mut self, ui: &mut Ui) {
        ui.label("Padding:");
        let mut padding = self.session.config().padding();
        if ui.add(Slider::new(&mut padding, PADDING_RANGE).suffix("px")).changed() {
            self.commands.push(Command::SetPadding(padding));
        }
        ui.end_row();
    }

    fn size_row(&mut self, ui: &mut Ui) {
        let session = self.session;
        let config = session.config();
        let mut width = config.width();
        let mut height = config.height();

        ui.label("Size:");
        ui.horizontal(|ui| {
            ui.label("Width:");
            if ui.add(DragValue::new(&mut width).range(WIDTH_RANGE)).changed() {
                self.commands.push(Command::SetWidth(width));
            }
            ui.label("Height:");
            if ui.add(DragValue::new(&mut height).range(HEIGHT_RANGE)).changed() {
                self.commands.push(Command::SetHeight(height));
            }
        });
        ui.end_row();
    }
}
