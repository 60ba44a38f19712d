/*
Log Adapters Module

This module contains infrastructure adapters that implement the Logger port
for different logging destinations.
*/

pub mod database_log_adapter;
pub mod file_log_adapter;

// Re-export the main adapters for easier importing
pub use database_log_adapter::DatabaseLogger;
pub use file_log_adapter::FileLogger;
