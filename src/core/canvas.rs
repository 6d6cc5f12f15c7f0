// canvas module - the drawing surface the rasterizer paints on
use ab_glyph::Font;
use image::{Rgba, RgbaImage};

use super::color::Color;
use super::error::{Error, Result};
use super::font::FontFace;

// sub-samples per axis when covering ellipse edges
const ELLIPSE_SAMPLES: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Minimal set of drawing primitives a snapshot needs.
///
/// Everything outside the surface is clipped. Implementations return an
/// error only when the backend itself fails.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn fill(&mut self, color: Color) -> Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Fills the ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draws one line of text left-aligned at `x` with its baseline at `baseline`
    fn draw_text(&mut self, x: i32, baseline: i32, text: &str, face: &FontFace, color: Color)
        -> Result<()>;

    fn line_height(&self, face: &FontFace) -> u32 {
        face.line_height()
    }
}

/// In-memory RGBA canvas
pub struct PixmapCanvas {
    image: RgbaImage,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Render(format!("invalid canvas size {}x{}", width, height)));
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend_at(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return;
        }
        blend(self.image.get_pixel_mut(x as u32, y as u32), color, coverage);
    }

    // visible pixel span of a rect, empty when fully outside
    fn clip(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.image.width() as i32);
        let y1 = rect.bottom().min(self.image.height() as i32);
        (x0, y0, x1, y1)
    }
}

impl Canvas for PixmapCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        let pixel: Rgba<u8> = color.into();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_at(x, y, color, 1.0);
            }
        }
        Ok(())
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<()> {
        if rect.width == 0 || rect.height == 0 {
            return Ok(());
        }

        let rx = rect.width as f32 / 2.0;
        let ry = rect.height as f32 / 2.0;
        let cx = rect.x as f32 + rx;
        let cy = rect.y as f32 + ry;
        let step = 1.0 / ELLIPSE_SAMPLES as f32;
        let total = (ELLIPSE_SAMPLES * ELLIPSE_SAMPLES) as f32;

        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                let mut inside = 0;
                for sy in 0..ELLIPSE_SAMPLES {
                    for sx in 0..ELLIPSE_SAMPLES {
                        let px = x as f32 + (sx as f32 + 0.5) * step;
                        let py = y as f32 + (sy as f32 + 0.5) * step;
                        let dx = (px - cx) / rx;
                        let dy = (py - cy) / ry;
                        if dx * dx + dy * dy <= 1.0 {
                            inside += 1;
                        }
                    }
                }
                if inside > 0 {
                    self.blend_at(x, y, color, inside as f32 / total);
                }
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i32,
        baseline: i32,
        text: &str,
        face: &FontFace,
        color: Color,
    ) -> Result<()> {
        for glyph in face.layout_line(text, x as f32, baseline as f32) {
            let Some(outlined) = face.font().outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let left = bounds.min.x as i32;
            let top = bounds.min.y as i32;
            outlined.draw(|gx, gy, coverage| {
                self.blend_at(left + gx as i32, top + gy as i32, color, coverage);
            });
        }
        Ok(())
    }
}

// source-over with the color's own alpha scaled by coverage
fn blend(pixel: &mut Rgba<u8>, color: Color, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0) * color.a as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }
    let source = [color.r, color.g, color.b];
    for (channel, src) in pixel.0.iter_mut().zip(source) {
        *channel = (*channel as f32 * (1.0 - alpha) + src as f32 * alpha).round() as u8;
    }
    let dest_alpha = pixel.0[3] as f32 / 255.0;
    pixel.0[3] = ((alpha + dest_alpha * (1.0 - alpha)) * 255.0).round() as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::font::FontSpec;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLACK: Color = Color::rgb(0, 0, 0);

    #[test]
    fn test_zero_sized_canvas_is_rejected() {
        assert!(matches!(PixmapCanvas::new(0, 10), Err(Error::Render(_))));
    }

    #[test]
    fn test_fill_and_rect() {
        let mut canvas = PixmapCanvas::new(10, 10).unwrap();
        canvas.fill(BLACK).unwrap();
        canvas.fill_rect(Rect::new(2, 2, 3, 3), RED).unwrap();

        let image = canvas.into_image();
        assert_eq!(image.get_pixel(3, 3), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(5, 5), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_drawing_outside_is_clipped() {
        let mut canvas = PixmapCanvas::new(10, 10).unwrap();
        canvas.fill(BLACK).unwrap();
        canvas.fill_rect(Rect::new(-5, -5, 100, 7), RED).unwrap();
        canvas.fill_ellipse(Rect::new(50, 50, 8, 8), RED).unwrap();
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(0, 2), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_ellipse_center_is_solid_and_corner_empty() {
        let mut canvas = PixmapCanvas::new(20, 20).unwrap();
        canvas.fill(BLACK).unwrap();
        canvas.fill_ellipse(Rect::new(0, 0, 16, 16), RED).unwrap();
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(8, 8), &Rgba([255, 0, 0, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_text_marks_pixels_above_baseline() {
        let face = FontFace::load(&FontSpec::default()).unwrap();
        let mut canvas = PixmapCanvas::new(100, 40).unwrap();
        canvas.fill(BLACK).unwrap();
        canvas
            .draw_text(5, 30, "Hello", &face, Color::rgb(255, 255, 255))
            .unwrap();

        let image = canvas.into_image();
        let lit = image.pixels().filter(|p| p.0[0] > 0).count();
        assert!(lit > 0);
        // nothing far to the left of the start position
        assert!((0..40).all(|y| image.get_pixel(0, y).0[0] == 0));
    }

    #[test]
    fn test_blend_half_coverage() {
        let mut pixel = Rgba([0, 0, 0, 255]);
        blend(&mut pixel, Color::rgb(200, 100, 50), 0.5);
        assert_eq!(pixel, Rgba([100, 50, 25, 255]));
    }
}
