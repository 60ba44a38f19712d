// src/config/mod.rs
pub mod logger_settings;

pub use logger_settings::{LoggerSettings, SinkKind};
