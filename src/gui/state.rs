// state - widget-side values that the session does not own
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use image::RgbaImage;

pub struct UiState {
    // edit buffer of the code editor, copied into the session on change
    pub source: String,
    pub line_start: usize,
    pub line_end: usize,
    pub preview: Option<TextureHandle>,
    pub status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            source: String::new(),
            line_start: 1,
            line_end: 1,
            preview: None,
            status: None,
        }
    }
}

impl UiState {
    pub fn set_preview(&mut self, ctx: &Context, image: &RgbaImage) {
        let size = [image.width() as usize, image.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, image.as_raw());

        match self.preview.as_mut() {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                let texture = ctx.load_texture("preview", color_image, TextureOptions::LINEAR);
                self.preview = Some(texture);
            }
        }
    }
}

