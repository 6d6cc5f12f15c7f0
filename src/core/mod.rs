// core - everything that does not need a window
pub mod actions;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod error_log;
pub mod export;
pub mod font;
pub mod highlight;
pub mod render;
pub mod session;
pub mod themes;
