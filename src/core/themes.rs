// themes module - the built-in color table for snapshots
use super::color::Color;
use super::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
}

/// Order here is the order of the theme dropdown
pub static THEMES: [Theme; 6] = [
    Theme {
        name: "Dark",
        background: Color::rgb(0x1D, 0x1F, 0x21),
        text: Color::rgb(0xFF, 0xFF, 0xFF),
        highlight: Color::rgb(0x3E, 0x44, 0x51),
    },
    Theme {
        name: "Light",
        background: Color::rgb(0xFF, 0xFF, 0xFF),
        text: Color::rgb(0x1D, 0x1F, 0x21),
        highlight: Color::rgb(0xE8, 0xE8, 0xE8),
    },
    Theme {
        name: "Monokai",
        background: Color::rgb(0x27, 0x28, 0x22),
        text: Color::rgb(0xF8, 0xF8, 0xF2),
        highlight: Color::rgb(0x49, 0x48, 0x3E),
    },
    Theme {
        name: "Solarized Light",
        background: Color::rgb(0xFD, 0xF6, 0xE3),
        text: Color::rgb(0x58, 0x6E, 0x75),
        highlight: Color::rgb(0xEE, 0xE8, 0xD5),
    },
    Theme {
        name: "Solarized Dark",
        background: Color::rgb(0x00, 0x2B, 0x36),
        text: Color::rgb(0x83, 0x94, 0x96),
        highlight: Color::rgb(0x07, 0x36, 0x42),
    },
    Theme {
        name: "Dracula",
        background: Color::rgb(0x28, 0x2A, 0x36),
        text: Color::rgb(0xF8, 0xF8, 0xF2),
        highlight: Color::rgb(0x44, 0x47, 0x5A),
    },
];

pub const DEFAULT_THEME: &str = "Dark";

impl Theme {
    pub fn by_name(name: &str) -> Result<&'static Theme, Error> {
        THEMES
            .iter()
            .find(|theme| theme.name == name)
            .ok_or_else(|| Error::UnknownTheme(name.to_string()))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        THEMES.iter().map(|theme| theme.name)
    }
}
