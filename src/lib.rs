// src/lib.rs
pub mod application;
pub mod config;
pub mod core;
pub mod error;
pub mod infrastructure;
pub mod setup;

pub use crate::application::ports::output::log_port::Logger;
pub use crate::application::ports::output::log_provider_port::DatabaseLogProvider;
pub use crate::config::{LoggerSettings, SinkKind};
pub use crate::core::log::{LogLevel, LogRecord};
pub use crate::error::{LogError, LogResult};
pub use crate::infrastructure::adapters::logs::{DatabaseLogger, FileLogger};
pub use crate::infrastructure::repositories::{MySqlLogRepository, SqliteLogRepository};
