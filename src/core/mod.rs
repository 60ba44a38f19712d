pub mod log;

pub use log::{LogLevel, LogRecord};
