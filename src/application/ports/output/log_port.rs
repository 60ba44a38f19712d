/*
Logger Port

A port that defines how the application logs information. The destination could be a
file, a database, or any other medium; callers depend only on this contract.

Every convenience call funnels through `log`. Each implementation validates the
message with `validate_message` before it touches its medium, so a blank message is
rejected the same way whatever the sink.

`fatal_with_error` carries an error's full rendering (its Display text followed by its
source chain) appended to the message as `\nException: <rendering>`. Without an error
the message is logged unchanged.
*/
use std::error::Error;

use async_trait::async_trait;

pub use crate::core::log::validate_message;
use crate::core::log::LogLevel;
use crate::error::LogResult;

/// Separator placed between a message and the rendering of an attached error
pub const EXCEPTION_SEPARATOR: &str = "\nException: ";

/// Port defining the logging interface
#[async_trait]
pub trait Logger: Send + Sync {
    /// Log a message at the given level
    async fn log(&self, level: LogLevel, message: &str) -> LogResult<()>;

    /// Detailed troubleshooting information
    async fn debug(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Debug, message).await
    }

    /// General application events
    async fn info(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Info, message).await
    }

    /// Potential issues or risks
    async fn warn(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Warn, message).await
    }

    /// Recoverable application errors
    async fn error(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Error, message).await
    }

    /// Critical failures that need immediate attention
    async fn fatal(&self, message: &str) -> LogResult<()> {
        self.log(LogLevel::Fatal, message).await
    }

    /// Critical failure with the error that caused it
    async fn fatal_with_error(
        &self,
        message: &str,
        error: Option<&(dyn Error + Send + Sync)>,
    ) -> LogResult<()> {
        validate_message(message)?;
        let message = with_error_details(message, error);
        self.log(LogLevel::Fatal, &message).await
    }
}

/// Render an error and every error in its source chain
pub fn render_error(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str("\nCaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Append the rendering of `error` to `message`, or return `message` unchanged
pub fn with_error_details(message: &str, error: Option<&(dyn Error + Send + Sync)>) -> String {
    match error {
        Some(error) => format!("{}{}{}", message, EXCEPTION_SEPARATOR, render_error(error)),
        None => message.to_string(),
    }
}
