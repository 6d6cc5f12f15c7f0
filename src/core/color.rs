// color module - the one color type every part of the renderer agrees on
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_rgb_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_rgb_array([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba([color.r, color.g, color.b, color.a])
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_uppercase_hex() {
        assert_eq!(Color::rgb(0x3E, 0x44, 0x51).to_string(), "#3E4451");
        assert_eq!(Color::rgb(0xfd, 0xf6, 0xe3).to_string(), "#FDF6E3");
    }

    #[test]
    fn test_display_keeps_translucent_alpha() {
        let color = Color { a: 0x80, ..Color::rgb(0, 0, 0) };
        assert_eq!(color.to_string(), "#00000080");
    }

    #[test]
    fn test_rgb_array_conversion() {
        let color = Color::from_rgb_array([1, 2, 3]);
        assert_eq!(color, Color::rgb(1, 2, 3));
        assert_eq!(color.to_rgb_array(), [1, 2, 3]);
    }

    #[test]
    fn test_egui_and_image_conversions() {
        let color = Color::rgb(0x27, 0xC9, 0x3F);
        assert_eq!(egui::Color32::from(color), egui::Color32::from_rgb(0x27, 0xC9, 0x3F));
        assert_eq!(image::Rgba::from(color), image::Rgba([0x27, 0xC9, 0x3F, 255]));
    }
}
