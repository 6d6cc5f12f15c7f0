// dialogs module - blocking native dialogs for errors, saving and font files
use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::core::export::{default_export_path, ExportFormat, DEFAULT_FILE_NAME};

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Logs the failure and shows it in a modal error box
pub fn show_error(title: &str, message: &str) {
    log::error!("{}: {}", title, message);
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Always suggests `~/codesnap.png`. None when the user cancels.
pub fn pick_save_path() -> Option<PathBuf> {
    let suggested = default_export_path();

    let mut dialog = FileDialog::new()
        .set_title("Save Screenshot")
        .set_file_name(DEFAULT_FILE_NAME);

    if let Some(parent) = suggested.parent() {
        dialog = dialog.set_directory(parent);
    }
    for (name, extensions) in ExportFormat::FILTERS {
        dialog = dialog.add_filter(name, extensions);
    }

    dialog.save_file()
}

pub fn pick_font_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Choose Font")
        .add_filter("Fonts", &FONT_EXTENSIONS)
        .pick_file()
}
