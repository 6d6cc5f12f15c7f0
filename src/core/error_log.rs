// error log module - appends uncaught errors to a local text file
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

pub const ERROR_LOG_FILE: &str = "codesnap_error.log";

pub struct ErrorLog {
    path: PathBuf,
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(ERROR_LOG_FILE)
    }
}

impl ErrorLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry framed by a timestamp header and a rule
    pub fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        write!(
            file,
            "=== {} ===\n{}\n====================\n\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            message
        )
    }
}
