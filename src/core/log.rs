/*
Log Core

The severity levels every sink understands and the record a single logging call
produces. A LogRecord is stamped by the sink at the moment of the call, in UTC;
callers never supply the timestamp.

Levels are totally ordered by criticality. Nothing filters on that order: every
call is persisted whatever its level.
*/
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// All levels, least critical first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// The level's name as written to log lines and the `Level` column
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LogError::invalid_argument(
                "level",
                format!("unknown log level '{}'", s),
            )),
        }
    }
}

/// Reject messages that are empty or only whitespace
pub fn validate_message(message: &str) -> LogResult<()> {
    if message.trim().is_empty() {
        return Err(LogError::invalid_argument(
            "message",
            "Log message cannot be null or empty.",
        ));
    }
    Ok(())
}

/// A single validated log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub exception: Option<String>,
}

impl LogRecord {
    /// Validate the message and stamp the record with the current UTC time
    pub fn new(level: LogLevel, message: &str) -> LogResult<Self> {
        validate_message(message)?;
        Ok(Self {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            exception: None,
        })
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }
}
