// src/error.rs
use thiserror::Error;

/// Result type for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur while constructing a sink or writing through one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LogError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        LogError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LogError::InvalidArgument { .. })
    }

    /// True for failures raised while talking to a database
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, LogError::ConnectionError(_) | LogError::QueryError(_))
    }
}

impl From<config::ConfigError> for LogError {
    fn from(error: config::ConfigError) -> Self {
        LogError::ConfigError(error.to_string())
    }
}
