/*
SQLite Log Repository

DatabaseLogProvider backed by a SQLite database file. Same contract as the MySQL
repository: one connection per insert, one bound statement, connection closed before
returning.
*/
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

use crate::application::ports::output::log_provider_port::DatabaseLogProvider;
use crate::error::{LogError, LogResult};

const INSERT_LOG: &str = r#"INSERT INTO "Logs" ("Timestamp", "Level", "Message", "Exception")
    VALUES (?1, ?2, ?3, ?4)"#;

const CREATE_LOGS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS "Logs" (
    "Timestamp" TEXT NOT NULL,
    "Level" TEXT NOT NULL,
    "Message" TEXT NOT NULL,
    "Exception" TEXT NULL
)"#;

#[derive(Debug, Clone)]
pub struct SqliteLogRepository {
    options: SqliteConnectOptions,
}

impl SqliteLogRepository {
    pub fn new(connection_string: &str) -> LogResult<Self> {
        if connection_string.trim().is_empty() {
            return Err(LogError::invalid_argument(
                "connection_string",
                "Connection string cannot be null or empty.",
            ));
        }

        let options = SqliteConnectOptions::from_str(connection_string).map_err(|e| {
            LogError::invalid_argument(
                "connection_string",
                format!("Invalid SQLite connection string: {}", e),
            )
        })?;

        Ok(Self { options })
    }

    async fn connect(&self) -> LogResult<SqliteConnection> {
        self.options
            .connect()
            .await
            .map_err(|e| LogError::ConnectionError(e.to_string()))
    }

    /// Create the `Logs` table if it does not exist
    pub async fn migrate(&self) -> LogResult<()> {
        let mut conn = self.connect().await?;
        let outcome = sqlx::query(CREATE_LOGS_TABLE).execute(&mut conn).await;
        let closed = conn.close().await;

        outcome.map_err(|e| LogError::QueryError(e.to_string()))?;
        closed.map_err(|e| LogError::ConnectionError(e.to_string()))?;
        debug!("SQLite Logs table ready");
        Ok(())
    }
}

#[async_trait]
impl DatabaseLogProvider for SqliteLogRepository {
    async fn insert_log(
        &self,
        timestamp: DateTime<Utc>,
        level: &str,
        message: &str,
        exception: Option<&str>,
    ) -> LogResult<()> {
        let mut conn = self.connect().await?;
        let outcome = sqlx::query(INSERT_LOG)
            .bind(timestamp)
            .bind(level)
            .bind(message)
            .bind(exception)
            .execute(&mut conn)
            .await;
        let closed = conn.close().await;

        outcome.map_err(|e| LogError::QueryError(e.to_string()))?;
        closed.map_err(|e| LogError::ConnectionError(e.to_string()))?;
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "sqlite"
    }
}
