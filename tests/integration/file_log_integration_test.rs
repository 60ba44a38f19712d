/*
File Log Adapter Integration Tests

These tests drive the FileLogger against real files in temporary directories and
check line layout, ordering, directory creation and the best-effort failure policy.
*/
use std::fs;

use chrono::Utc;
use tempfile::tempdir;

use in4me_logger::{FileLogger, LogLevel, Logger};

use crate::common::{split_line, CapturedOutput, TestFailure};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("log file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Every level writes exactly one line ending in `[Level] message`
#[tokio::test]
async fn test_each_level_writes_one_formatted_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("levels.log");
    let logger = FileLogger::new(&path).unwrap();

    for level in LogLevel::ALL {
        let before = Utc::now().naive_utc();
        logger.log(level, "cache warmed").await.unwrap();
        let after = Utc::now().naive_utc();

        let lines = read_lines(&path);
        let (stamp, rest) = split_line(lines.last().unwrap());
        assert_eq!(rest, format!("[{}] cache warmed", level));

        // the file only keeps milliseconds
        let before_ms = before - chrono::Duration::milliseconds(1);
        assert!(stamp >= before_ms && stamp <= after, "timestamp {} outside call window", stamp);
    }

    assert_eq!(read_lines(&path).len(), LogLevel::ALL.len());
}

/// N sequential calls append N lines in call order
#[tokio::test]
async fn test_sequential_calls_append_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ordered.log");
    let logger = FileLogger::new(&path).unwrap();

    for i in 0..20 {
        logger.info(&format!("request {}", i)).await.unwrap();
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 20);
    for (i, line) in lines.iter().enumerate() {
        let (_, rest) = split_line(line);
        assert_eq!(rest, format!("[Info] request {}", i));
    }
}

/// Existing content is kept; new lines are appended after it
#[tokio::test]
async fn test_appends_to_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.log");
    fs::write(&path, "earlier line\n").unwrap();

    let logger = FileLogger::new(&path).unwrap();
    logger.warn("later line").await.unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines[0], "earlier line");
    assert!(lines[1].ends_with("[Warn] later line"));
}

/// Blank messages are rejected and nothing is written
#[tokio::test]
async fn test_blank_message_rejected_without_io() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.log");
    let logger = FileLogger::new(&path).unwrap();

    for message in ["", " ", "\t\n  "] {
        for level in LogLevel::ALL {
            let err = logger.log(level, message).await.unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }
    let err = logger
        .fatal_with_error("   ", Some(&TestFailure::new("X: bad")))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    assert!(!path.exists(), "no file should have been created");
}

#[tokio::test]
async fn test_fatal_with_error_appends_exception() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fatal.log");
    let logger = FileLogger::new(&path).unwrap();

    logger.fatal_with_error("boom", Some(&TestFailure::new("X: bad"))).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let (_, rest) = split_line(&contents);
    assert_eq!(rest, "[Fatal] boom\nException: X: bad\n");
}

#[tokio::test]
async fn test_fatal_with_error_renders_source_chain() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.log");
    let logger = FileLogger::new(&path).unwrap();

    let err = TestFailure::new("sync failed").caused_by(TestFailure::new("timed out"));
    logger.fatal_with_error("boom", Some(&err)).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with("[Fatal] boom\nException: sync failed\nCaused by: timed out\n"));
}

#[tokio::test]
async fn test_fatal_without_error_is_plain_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.log");
    let logger = FileLogger::new(&path).unwrap();

    logger.fatal_with_error("boom", None).await.unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    let (_, rest) = split_line(&lines[0]);
    assert_eq!(rest, "[Fatal] boom");
    assert!(!fs::read_to_string(&path).unwrap().contains("Exception"));
}

/// Missing parent directories exist as soon as the logger is constructed
#[test]
fn test_constructor_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("var").join("log").join("app");
    let path = nested.join("service.log");
    assert!(!nested.exists());

    let logger = FileLogger::new(&path).unwrap();

    assert!(nested.is_dir());
    assert!(!path.exists(), "the file itself is created on first write");
    assert_eq!(logger.path(), path.as_path());
}

/// A directory that cannot be created is a constructor error
#[test]
fn test_constructor_fails_when_directory_cannot_be_created() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "plain file").unwrap();

    let err = FileLogger::new(blocker.join("app.log")).unwrap_err();
    assert!(matches!(err, in4me_logger::LogError::IoError(_)));
}

#[test]
fn test_constructor_rejects_blank_path() {
    assert!(FileLogger::new("").unwrap_err().is_invalid_argument());
    assert!(FileLogger::new(" \t ").unwrap_err().is_invalid_argument());
}

/// Losing the medium after construction never surfaces an error to the caller
#[tokio::test]
async fn test_write_failure_is_reported_not_raised() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("removable");
    let path = log_dir.join("app.log");
    let logger = FileLogger::new(&path).unwrap();
    logger.info("before removal").await.unwrap();

    fs::remove_dir_all(&log_dir).unwrap();

    let output = CapturedOutput::default();
    let _guard = tracing::subscriber::set_default(output.subscriber());

    logger.error("after removal").await.expect("file failures must not propagate");
    logger.fatal("still running").await.expect("file failures must not propagate");

    let diagnostics = output.contents();
    assert!(diagnostics.contains("Failed to write to log file"), "diagnostics: {}", diagnostics);
    assert!(diagnostics.contains("app.log"));
    assert!(!path.exists());
}

/// Message validation still applies after the file has become unwritable
#[tokio::test]
async fn test_validation_still_raised_when_unwritable() {
    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("gone");
    let logger = FileLogger::new(log_dir.join("app.log")).unwrap();
    fs::remove_dir_all(&log_dir).unwrap();

    assert!(logger.debug("").await.unwrap_err().is_invalid_argument());
}

/// A logger may be shared behind an Arc across tasks
#[tokio::test]
async fn test_shared_logger_across_tasks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shared.log");
    let logger = std::sync::Arc::new(FileLogger::new(&path).unwrap());

    let mut handles = Vec::new();
    for task in 0..4 {
        let logger = logger.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..5 {
                logger.info(&format!("task {} entry {}", task, i)).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(read_lines(&path).len(), 20);
}
