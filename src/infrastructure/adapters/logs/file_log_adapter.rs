/*
File Log Adapter

Infrastructure adapter that implements the Logger port by appending one line per call
to a local file:

    2024-05-01 13:37:00.042 [Info] message

The file is opened in append mode, written, flushed and closed on every call; no
handle is held between calls. The parent directory is created when the logger is
constructed.

Writing is best effort. A failure to open or write the file is reported as a tracing
event (and on stderr when no subscriber would record that event) and the call still
succeeds, so a broken log file never takes the caller down with it.
*/
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, enabled, error, Level};

use crate::application::ports::output::log_port::Logger;
use crate::core::log::{LogLevel, LogRecord};
use crate::error::{LogError, LogResult};

/// Timestamp layout of every file line, UTC with millisecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Logger writing to a local file
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Create a file logger, creating the file's directory if it is missing
    pub fn new(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(LogError::invalid_argument(
                "path",
                "Log file path cannot be null or empty.",
            ));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LogError::IoError(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        debug!(path = %path.display(), "File logger ready");
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// The file this logger appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    fn report_write_failure(&self, err: &std::io::Error) {
        if failure_events_recorded() {
            error!(path = %self.path.display(), error = %err, "Failed to write to log file");
        } else {
            eprintln!(
                "Failed to write to log file {}. Error: {}",
                self.path.display(),
                err
            );
        }
    }
}

/// Whether the current subscriber records error events from this module
fn failure_events_recorded() -> bool {
    enabled!(Level::ERROR)
}

/// Render one newline-terminated file line
pub fn format_line(timestamp: DateTime<Utc>, level: LogLevel, message: &str) -> String {
    format!(
        "{} [{}] {}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        level.as_str(),
        message
    )
}

#[async_trait]
impl Logger for FileLogger {
    async fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        let record = LogRecord::new(level, message)?;
        let line = format_line(record.timestamp, record.level, &record.message);

        if let Err(err) = self.append_line(&line).await {
            self.report_write_failure(&err);
        }
        Ok(())
    }
}
