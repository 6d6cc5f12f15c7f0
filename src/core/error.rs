//! Error types for rendering and exporting snapshots

use thiserror::Error;

/// Result type alias for snapshot operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A font could not be read or parsed
    #[error("Failed to load font: {0}")]
    Font(String),

    /// Theme name is not in the built-in table
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Drawing the snapshot failed
    #[error("Failed to create snapshot: {0}")]
    Render(String),

    /// Encoding or writing the image failed
    #[error("Failed to save image: {0}")]
    Export(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The system clipboard refused the image
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}
