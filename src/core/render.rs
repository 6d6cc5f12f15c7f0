// render module - turns source text and a config snapshot into a bitmap
use image::RgbaImage;

use super::canvas::{Canvas, PixmapCanvas, Rect};
use super::color::Color;
use super::config::RenderConfig;
use super::error::Result;
use super::font::FontFace;
use super::highlight::HighlightSet;

pub const CHROME_RADIUS: u32 = 8;
/// Extra room above the text when window controls are drawn
pub const CHROME_ALLOWANCE: u32 = 20;
pub const CHROME_COLORS: [Color; 3] = [
    Color::rgb(0xFF, 0x5F, 0x56), // close
    Color::rgb(0xFF, 0xBD, 0x2E), // minimize
    Color::rgb(0x27, 0xC9, 0x3F), // maximize
];
// baseline sits this far down each row, kept as-is for pixel compatibility
const BASELINE_FACTOR: f64 = 0.8;

/// Geometry of one snapshot, computed before anything is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub line_height: u32,
    pub text_top: u32,
    pub chrome: Vec<Rect>,
    pub highlights: Vec<Rect>,
    pub baselines: Vec<i32>,
}

impl Layout {
    /// Highlight bars span `canvas_width` minus the padding.
    pub fn compute(
        line_count: usize,
        config: &RenderConfig,
        highlights: &HighlightSet,
        line_height: u32,
        canvas_width: u32,
    ) -> Self {
        let padding = config.padding();

        let chrome = if config.window_controls {
            (0..CHROME_COLORS.len() as u32)
                .map(|i| {
                    Rect::new(
                        (padding + i * CHROME_RADIUS * 2) as i32,
                        (padding / 2) as i32,
                        CHROME_RADIUS,
                        CHROME_RADIUS,
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        let text_top = padding + if config.window_controls { CHROME_ALLOWANCE } else { 0 };

        let highlights = highlights
            .visible(line_count)
            .map(|line| {
                Rect::new(
                    (padding / 2) as i32,
                    (text_top + (line as u32 - 1) * line_height) as i32,
                    canvas_width.saturating_sub(padding),
                    line_height,
                )
            })
            .collect();

        let baselines = (0..line_count)
            .map(|row| {
                let offset = (row as f64 + BASELINE_FACTOR) * line_height as f64;
                (text_top as f64 + offset) as i32
            })
            .collect();

        Self {
            line_height,
            text_top,
            chrome,
            highlights,
            baselines,
        }
    }

    /// Rows that can leave a mark on a canvas `height` pixels tall. A glyph
    /// never reaches more than one line height above its baseline.
    pub fn rows_within(&self, height: u32) -> usize {
        self.baselines
            .iter()
            .take_while(|&&baseline| baseline - (self.line_height as i32) < height as i32)
            .count()
    }
}

/// Splits on `\n` only, dropping the `\r` of CRLF endings
pub fn source_lines(source: &str) -> Vec<&str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

pub fn has_content(source: &str) -> bool {
    !source.trim().is_empty()
}

/// Draws a snapshot onto any canvas. Highlight bars follow the canvas width
/// and rows below the canvas are skipped.
pub fn paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    source: &str,
    config: &RenderConfig,
    highlights: &HighlightSet,
    face: &FontFace,
) -> Result<Layout> {
    canvas.fill(config.background)?;

    let lines = source_lines(source);
    let layout = Layout::compute(
        lines.len(),
        config,
        highlights,
        canvas.line_height(face),
        canvas.width(),
    );

    for (rect, color) in layout.chrome.iter().zip(CHROME_COLORS) {
        canvas.fill_ellipse(*rect, color)?;
    }

    for rect in &layout.highlights {
        canvas.fill_rect(*rect, config.highlight)?;
    }

    let left = config.padding() as i32;
    let rows = layout.rows_within(canvas.height());
    for (line, baseline) in lines.iter().zip(&layout.baselines).take(rows) {
        canvas.draw_text(left, *baseline, line, face, config.text)?;
    }

    Ok(layout)
}

/// Renders a snapshot at the configured size.
///
/// Returns `Ok(None)` when there is nothing but whitespace to render. On
/// error the partially drawn canvas is dropped.
pub fn render(
    source: &str,
    config: &RenderConfig,
    highlights: &HighlightSet,
    face: &FontFace,
) -> Result<Option<RgbaImage>> {
    if !has_content(source) {
        return Ok(None);
    }

    let mut canvas = PixmapCanvas::new(config.width(), config.height())?;
    let layout = paint(&mut canvas, source, config, highlights, face)?;
    log::debug!(
        "rendered {}x{} snapshot, {} lines from y={}, {} highlighted",
        config.width(),
        config.height(),
        layout.baselines.len(),
        layout.text_top,
        layout.highlights.len()
    );

    Ok(Some(canvas.into_image()))
}
