mod app;
pub mod dialogs;
mod editor;
mod options;
mod preview;
mod state;
mod themes;

use crate::core::canvas::{Canvas, PixmapCanvas, Rect};
use crate::core::error::Result;
use crate::core::render::CHROME_COLORS;
use crate::core::themes::THEMES;

pub use app::CodeSnapApp;

const ICON_SIZE: u32 = 64;

/// Entry point for the window
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CodeSnap")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "CodeSnap",
        options,
        Box::new(|cc| Ok(Box::new(CodeSnapApp::new(cc)?))),
    )
}

fn load_icon() -> egui::IconData {
    match paint_icon() {
        Ok(rgba) => egui::IconData {
            rgba,
            width: ICON_SIZE,
            height: ICON_SIZE,
        },
        Err(e) => {
            log::warn!("Could not draw window icon: {}", e);
            egui::IconData::default()
        }
    }
}

// the three window buttons on a dark tile, drawn with the snapshot canvas
fn paint_icon() -> Result<Vec<u8>> {
    let mut canvas = PixmapCanvas::new(ICON_SIZE, ICON_SIZE)?;
    canvas.fill(THEMES[0].background)?;
    for (i, color) in CHROME_COLORS.into_iter().enumerate() {
        canvas.fill_ellipse(Rect::new(4 + i as i32 * 20, 24, 16, 16), color)?;
    }
    Ok(canvas.into_image().into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_has_expected_size() {
        let rgba = paint_icon().unwrap();
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }
}
