mod core;
mod gui;

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, PanicHookInfo};

use crate::core::error_log::ErrorLog;
use gui::dialogs;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    install_panic_hook();

    if let Err(e) = gui::run() {
        dialogs::show_error("Initialization Error", &format!("Failed to initialize: {}", e));
    }
}

// anything uncaught lands in the error log and a final dialog
fn install_panic_hook() {
    panic::set_hook(Box::new(|info: &PanicHookInfo<'_>| {
        let report = format!("{}\n{}", info, Backtrace::force_capture());
        log::error!("ERROR: {}", report);

        let error_log = ErrorLog::default();
        if let Err(e) = error_log.append(&report) {
            log::warn!("Could not write {}: {}", error_log.path().display(), e);
        }

        let message = panic_message(info.payload());
        dialogs::show_error("Error", &format!("An error occurred:\n{}", message));
    }));
}

// panic!() carries a &str or a String, panic_any anything else
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
