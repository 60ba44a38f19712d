/*
Database Log Adapter

Infrastructure adapter that implements the Logger port on top of any
DatabaseLogProvider. Each call is validated, stamped with the current UTC time and
handed to the provider as one insert.

The `Exception` column is always written as NULL from here: `fatal_with_error`
folds the error rendering into the message text instead. Provider failures are
returned to the caller exactly as the provider raised them.
*/
use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::output::log_port::Logger;
use crate::application::ports::output::log_provider_port::DatabaseLogProvider;
use crate::core::log::{LogLevel, LogRecord};
use crate::error::LogResult;

/// Logger persisting entries through a database provider
#[derive(Debug, Clone)]
pub struct DatabaseLogger<P> {
    provider: P,
}

impl<P: DatabaseLogProvider> DatabaseLogger<P> {
    pub fn new(provider: P) -> Self {
        debug!(provider = provider.provider_name(), "Database logger ready");
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: DatabaseLogProvider> Logger for DatabaseLogger<P> {
    async fn log(&self, level: LogLevel, message: &str) -> LogResult<()> {
        let record = LogRecord::new(level, message)?;
        self.provider
            .insert_log(
                record.timestamp,
                record.level.as_str(),
                &record.message,
                record.exception.as_deref(),
            )
            .await
    }
}
