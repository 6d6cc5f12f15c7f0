// export module - writing snapshots to disk or the clipboard
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use super::error::Result;

pub const DEFAULT_FILE_NAME: &str = "codesnap.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    /// (dialog filter name, extensions) pairs offered by the save dialog
    pub const FILTERS: [(&'static str, &'static [&'static str]); 2] = [
        ("PNG Images", &["png"]),
        ("JPEG Images", &["jpg", "jpeg"]),
    ];

    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".png") {
            Some(ExportFormat::Png)
        } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Some(ExportFormat::Jpeg)
        } else {
            None
        }
    }
}

/// `~/codesnap.png`, or just the file name when there is no home directory
pub fn default_export_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}

// appends .png to the whole name, so "shot.txt" becomes "shot.txt.png"
pub fn normalize_export_path(path: &Path) -> PathBuf {
    if ExportFormat::from_path(path).is_some() {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Writes the snapshot in the format its extension names and returns the
/// path actually written.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<PathBuf> {
    let path = normalize_export_path(path);

    match ExportFormat::from_path(&path) {
        Some(ExportFormat::Jpeg) => {
            // jpeg has no alpha channel
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.save_with_format(&path, ImageFormat::Jpeg)?;
        }
        _ => image.save_with_format(&path, ImageFormat::Png)?,
    }

    log::info!("Saved screenshot to {}", path.display());
    Ok(path)
}

pub fn copy_to_clipboard(image: &RgbaImage) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_image(arboard::ImageData {
        width: image.width() as usize,
        height: image.height() as usize,
        bytes: Cow::Borrowed(image.as_raw()),
    })?;
    log::info!("Copied {}x{} screenshot to clipboard", image.width(), image.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample() -> RgbaImage {
        RgbaImage::from_pixel(40, 30, Rgba([0x1D, 0x1F, 0x21, 255]))
    }

    #[test]
    fn test_missing_extension_gets_png() {
        assert_eq!(normalize_export_path(Path::new("/tmp/shot")), PathBuf::from("/tmp/shot.png"));
        assert_eq!(
            normalize_export_path(Path::new("/tmp/shot.txt")),
            PathBuf::from("/tmp/shot.txt.png")
        );
        assert_eq!(normalize_export_path(Path::new("a.JPEG")), PathBuf::from("a.JPEG"));
        assert_eq!(normalize_export_path(Path::new("a.png")), PathBuf::from("a.png"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("x.PNG")), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_path(Path::new("x.jpg")), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_path(Path::new("x.gif")), None);
    }

    #[test]
    fn test_save_without_extension_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_image(&sample(), &dir.path().join("snapshot")).unwrap();

        assert!(written.to_string_lossy().ends_with(".png"));
        let bytes = std::fs::read(&written).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        assert_eq!(image::load_from_memory(&bytes).unwrap().to_rgba8(), sample());
    }

    #[test]
    fn test_save_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_image(&sample(), &dir.path().join("snapshot.jpg")).unwrap();

        let bytes = std::fs::read(&written).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_image(&sample(), &dir.path().join("nope").join("x.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_path_name() {
        assert!(default_export_path().ends_with(DEFAULT_FILE_NAME));
    }
}
