// every UI event the window can produce, and what the window must do afterwards
use super::color::Color;
use super::config::ColorRole;
use super::font::FontSpec;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetSource(String),
    SelectTheme(String),
    SetFont(FontSpec),
    SetColor(ColorRole, Color),
    SetPadding(u32),
    SetWidth(u32),
    SetHeight(u32),
    SetWindowControls(bool),

    // 1-based, either order
    HighlightLines { from: usize, to: usize },
    ClearHighlights,

    Generate,
    Save,
    CopyImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Rerender,
    Export,
    CopyToClipboard,
}
