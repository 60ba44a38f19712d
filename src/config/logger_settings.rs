use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::application::ports::output::log_port::Logger;
use crate::error::{LogError, LogResult};
use crate::infrastructure::adapters::logs::{DatabaseLogger, FileLogger};
use crate::infrastructure::repositories::{MySqlLogRepository, SqliteLogRepository};

/// Which sink a host wants built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    File,
    Mysql,
    Sqlite,
}

/// Optional settings a host can use to pick and construct a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    pub sink: SinkKind,
    /// Target file for `SinkKind::File`
    #[serde(default)]
    pub path: Option<String>,
    /// Database URL for `SinkKind::Mysql` and `SinkKind::Sqlite`
    #[serde(default)]
    pub connection_string: Option<String>,
}

impl LoggerSettings {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            sink: SinkKind::File,
            path: Some(path.into()),
            connection_string: None,
        }
    }

    pub fn database(sink: SinkKind, connection_string: impl Into<String>) -> Self {
        Self {
            sink,
            path: None,
            connection_string: Some(connection_string.into()),
        }
    }

    /// Read `LOGGER_SINK`, `LOGGER_PATH` and `LOGGER_CONNECTION_STRING`
    pub fn from_env() -> LogResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("LOGGER"))
            .build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> LogResult<Self> {
        Ok(config.try_deserialize()?)
    }

    /// Construct the configured sink. Database sinks are not connected or migrated here.
    pub fn build(&self) -> LogResult<Box<dyn Logger>> {
        match self.sink {
            SinkKind::File => {
                let path = self.path.as_deref().ok_or_else(|| {
                    LogError::invalid_argument("path", "A file sink requires a path.")
                })?;
                Ok(Box::new(FileLogger::new(path)?))
            }
            SinkKind::Mysql => {
                let repository = MySqlLogRepository::new(self.require_connection_string()?)?;
                Ok(Box::new(DatabaseLogger::new(repository)))
            }
            SinkKind::Sqlite => {
                let repository = SqliteLogRepository::new(self.require_connection_string()?)?;
                Ok(Box::new(DatabaseLogger::new(repository)))
            }
        }
    }

    fn require_connection_string(&self) -> LogResult<&str> {
        self.connection_string.as_deref().ok_or_else(|| {
            LogError::invalid_argument(
                "connection_string",
                "A database sink requires a connection string.",
            )
        })
    }
}
