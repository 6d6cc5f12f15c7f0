use egui::{Color32, Context, Stroke, Visuals};

use crate::core::color::Color;
use crate::core::themes::Theme;

/// Styles the window after the snapshot theme so the editor looks like the output
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut visuals = if is_light(theme.background) {
        Visuals::light()
    } else {
        Visuals::dark()
    };

    // editor area uses the snapshot colors
    visuals.extreme_bg_color = theme.background.into();

    // Selection follows the highlight bar
    visuals.selection.bg_fill = theme.highlight.into();
    visuals.selection.stroke = Stroke::new(1.0, Color32::from(theme.text));

    // Accent color from the window controls
    let accent = Color32::from_rgb(0x27, 0xC9, 0x3F);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, accent);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, accent);

    ctx.set_visuals(visuals);

    // Set font sizes
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(14.0));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(13.0));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(13.0));

    ctx.set_style(style);
}

// perceived brightness, rec. 601 weights
fn is_light(color: Color) -> bool {
    let luma = 0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32;
    luma > 127.5
}
