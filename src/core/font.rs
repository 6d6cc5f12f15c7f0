// font module - font descriptors and the loaded faces the canvas draws with
use std::fmt;
use std::fs;
use std::path::PathBuf;

use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};

use super::error::{Error, Result};

pub const MIN_FONT_SIZE: f32 = 6.0;
pub const MAX_FONT_SIZE: f32 = 72.0;
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

const TAB_WIDTH: usize = 4;

// names of the faces egui ships in its default font set
const MONOSPACE_FONT: &str = "Hack";
const PROPORTIONAL_FONT: &str = "Ubuntu-Light";

#[derive(Debug, Clone, PartialEq)]
pub enum FontFamily {
    Monospace,
    Proportional,
    File(PathBuf),
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Monospace => write!(f, "Hack (monospace)"),
            FontFamily::Proportional => write!(f, "Ubuntu (proportional)"),
            FontFamily::File(path) => match path.file_name() {
                Some(name) => write!(f, "{}", name.to_string_lossy()),
                None => write!(f, "{}", path.display()),
            },
        }
    }
}

/// Font family plus a size in points
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::Monospace,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontSpec {
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size: size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
        }
    }

    // points at 96 dpi
    pub fn pixel_size(&self) -> f32 {
        self.size * 96.0 / 72.0
    }
}

/// A parsed font at a fixed pixel scale
#[derive(Clone)]
pub struct FontFace {
    font: FontArc,
    scale: PxScale,
    spec: FontSpec,
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("spec", &self.spec)
            .field("scale", &self.scale)
            .finish()
    }
}

impl FontFace {
    pub fn load(spec: &FontSpec) -> Result<Self> {
        let bytes = match &spec.family {
            FontFamily::Monospace => builtin_font_bytes(MONOSPACE_FONT)?,
            FontFamily::Proportional => builtin_font_bytes(PROPORTIONAL_FONT)?,
            FontFamily::File(path) => fs::read(path)
                .map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))?,
        };

        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| Error::Font(format!("{}: {}", spec.family, e)))?;

        Ok(Self {
            font,
            scale: PxScale::from(spec.pixel_size()),
            spec: spec.clone(),
        })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }

    // negative, below the baseline
    pub fn descent(&self) -> f32 {
        self.font.as_scaled(self.scale).descent()
    }

    /// Ascent plus descent in whole pixels, never zero
    pub fn line_height(&self) -> u32 {
        (self.ascent() - self.descent()).round().max(1.0) as u32
    }

    /// Positions the glyphs of one line starting at `x` on the given baseline.
    /// Tabs advance to the next multiple of four spaces, other control
    /// characters take no room.
    pub fn layout_line(&self, text: &str, x: f32, baseline: f32) -> Vec<Glyph> {
        let scaled = self.font.as_scaled(self.scale);
        let space = scaled.h_advance(self.font.glyph_id(' '));
        let tab_stop = space * TAB_WIDTH as f32;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret = x;
        let mut previous = None;

        for c in text.chars() {
            if c == '\t' {
                let column = ((caret - x) / tab_stop).floor() + 1.0;
                caret = x + column * tab_stop;
                previous = None;
                continue;
            }
            if c.is_control() {
                continue;
            }

            let id = self.font.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        glyphs
    }
}

fn builtin_font_bytes(name: &str) -> Result<Vec<u8>> {
    let definitions = egui::FontDefinitions::default();
    definitions
        .font_data
        .get(name)
        .map(|data| data.font.to_vec())
        .ok_or_else(|| Error::Font(format!("built-in font '{}' is not available", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_faces_load() {
        let mono = FontFace::load(&FontSpec::default()).unwrap();
        assert!(mono.line_height() > 0);

        let proportional =
            FontFace::load(&FontSpec::new(FontFamily::Proportional, DEFAULT_FONT_SIZE)).unwrap();
        assert!(proportional.line_height() > 0);
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(FontSpec::new(FontFamily::Monospace, 1.0).size, MIN_FONT_SIZE);
        assert_eq!(FontSpec::new(FontFamily::Monospace, 500.0).size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_monospace_advance_and_tabs() {
        let face = FontFace::load(&FontSpec::default()).unwrap();
        let glyphs = face.layout_line("abcd", 10.0, 20.0);
        assert_eq!(glyphs.len(), 4);
        assert_eq!(glyphs[0].position.x, 10.0);
        assert_eq!(glyphs[0].position.y, 20.0);
        let advance = glyphs[1].position.x - glyphs[0].position.x;
        assert!(advance > 0.0);
        assert!((glyphs[3].position.x - glyphs[2].position.x - advance).abs() < 0.01);

        let tabbed = face.layout_line("\tx", 0.0, 0.0);
        let spaced = face.layout_line("    x", 0.0, 0.0);
        assert_eq!(tabbed.len(), 1);
        assert!((tabbed[0].position.x - spaced[4].position.x).abs() < 0.01);
    }

    #[test]
    fn test_larger_size_has_taller_lines() {
        let small = FontFace::load(&FontSpec::new(FontFamily::Monospace, 10.0)).unwrap();
        let large = FontFace::load(&FontSpec::new(FontFamily::Monospace, 24.0)).unwrap();
        assert!(large.line_height() > small.line_height());
    }

    #[test]
    fn test_missing_font_file() {
        let spec = FontSpec::new(FontFamily::File("/nonexistent/font.ttf".into()), 12.0);
        assert!(matches!(FontFace::load(&spec), Err(Error::Font(_))));
    }
}
