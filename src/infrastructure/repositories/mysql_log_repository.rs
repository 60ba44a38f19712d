/*
MySQL Log Repository

This adapter implements the DatabaseLogProvider port for MySQL. The connection string
is parsed once, at construction, without touching the network. Every insert opens its
own connection, runs a single parameterized statement and closes the connection again;
pooling is left to whoever wires the logger.
*/
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

use crate::application::ports::output::log_provider_port::DatabaseLogProvider;
use crate::error::{LogError, LogResult};

const INSERT_LOG: &str = "INSERT INTO `Logs` (`Timestamp`, `Level`, `Message`, `Exception`) \
     VALUES (?, ?, ?, ?)";

const CREATE_LOGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS `Logs` (
    `Timestamp` DATETIME(3) NOT NULL,
    `Level` VARCHAR(16) NOT NULL,
    `Message` TEXT NOT NULL,
    `Exception` TEXT NULL
)";

#[derive(Debug, Clone)]
pub struct MySqlLogRepository {
    options: MySqlConnectOptions,
}

impl MySqlLogRepository {
    pub fn new(connection_string: &str) -> LogResult<Self> {
        if connection_string.trim().is_empty() {
            return Err(LogError::invalid_argument(
                "connection_string",
                "Connection string cannot be null or empty.",
            ));
        }

        let options = MySqlConnectOptions::from_str(connection_string).map_err(|e| {
            LogError::invalid_argument(
                "connection_string",
                format!("Invalid MySQL connection string: {}", e),
            )
        })?;

        Ok(Self { options })
    }

    async fn connect(&self) -> LogResult<MySqlConnection> {
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
        debug!("MySQL Logs table ready");
        Ok(())
    }
}

#[async_trait]
impl DatabaseLogProvider for MySqlLogRepository {
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
        "mysql"
    }
}
