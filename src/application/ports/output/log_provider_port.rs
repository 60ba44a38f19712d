/*
Log Provider Port

The narrow persistence contract a database-backed logger delegates to. One call
inserts one row into the `Logs` table and releases its connection before returning.
Values are always bound as parameters. Failures are returned to the caller, never
retried or swallowed here.
*/
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::LogResult;

/// Table every provider writes to
pub const LOG_TABLE: &str = "Logs";

/// Columns of `Logs`, in insert order
pub const LOG_COLUMNS: [&str; 4] = ["Timestamp", "Level", "Message", "Exception"];

#[async_trait]
pub trait DatabaseLogProvider: Send + Sync {
    /// Insert a single log row; `exception` binds as SQL NULL when absent
    async fn insert_log(
        &self,
        timestamp: DateTime<Utc>,
        level: &str,
        message: &str,
        exception: Option<&str>,
    ) -> LogResult<()>;

    /// Get the name of this provider implementation
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl DatabaseLogProvider for Box<dyn DatabaseLogProvider> {
    async fn insert_log(
        &self,
        timestamp: DateTime<Utc>,
        level: &str,
        message: &str,
        exception: Option<&str>,
    ) -> LogResult<()> {
        (**self).insert_log(timestamp, level, message, exception).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<P: DatabaseLogProvider + ?Sized> DatabaseLogProvider for Arc<P> {
    async fn insert_log(
        &self,
        timestamp: DateTime<Utc>,
        level: &str,
        message: &str,
        exception: Option<&str>,
    ) -> LogResult<()> {
        (**self).insert_log(timestamp, level, message, exception).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
