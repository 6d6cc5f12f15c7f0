// config module - render settings with their defaults and allowed ranges
use std::ops::RangeInclusive;

use super::color::Color;
use super::font::FontSpec;
use super::themes::{Theme, DEFAULT_THEME, THEMES};

pub const PADDING_RANGE: RangeInclusive<u32> = 10..=100;
pub const WIDTH_RANGE: RangeInclusive<u32> = 400..=2000;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 300..=2000;

pub const DEFAULT_PADDING: u32 = 40;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Background,
    Text,
    Highlight,
}

/// Everything the rasterizer needs besides the text and highlighted lines.
/// Setters clamp into range so a config is always renderable.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub font: FontSpec,
    padding: u32,
    width: u32,
    height: u32,
    pub window_controls: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let theme = Theme::by_name(DEFAULT_THEME).unwrap_or(&THEMES[0]);
        Self {
            background: theme.background,
            text: theme.text,
            highlight: theme.highlight,
            font: FontSpec::default(),
            padding: DEFAULT_PADDING,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            window_controls: true,
        }
    }
}

impl RenderConfig {
    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_padding(&mut self, padding: u32) {
        self.padding = clamp(padding, &PADDING_RANGE);
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = clamp(width, &WIDTH_RANGE);
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = clamp(height, &HEIGHT_RANGE);
    }

    // overwrites all three colors, manual picks included
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.background = theme.background;
        self.text = theme.text;
        self.highlight = theme.highlight;
    }

    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Text => self.text,
            ColorRole::Highlight => self.highlight,
        }
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        match role {
            ColorRole::Background => self.background = color,
            ColorRole::Text => self.text = color,
            ColorRole::Highlight => self.highlight = color,
        }
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
