pub mod mysql_log_repository;
pub mod sqlite_log_repository;

pub use mysql_log_repository::MySqlLogRepository;
pub use sqlite_log_repository::SqliteLogRepository;
