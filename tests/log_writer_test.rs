//! Integration tests for the JSON-lines log writer
//!
//! The written file must hold one standalone JSON object per line with an
//! injected `datetime` field, and must only ever be appended to.

use skubridge::config::ConnectorConfig;
use skubridge::logging::{LogEvent, LogLevel, LogSink, LogWriter};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn event(level: LogLevel) -> LogEvent {
    let mut context = BTreeMap::new();
    context.insert("foo".to_string(), "bar".to_string());
    context.insert("baz".to_string(), "bat".to_string());

    LogEvent {
        message: "Hello World".to_string(),
        client_id: 21,
        log_to_es: true,
        level,
        origin: "Connector X".to_string(),
        context,
    }
}

#[test]
fn test_writer_appends_one_json_line_per_event() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    let writer = LogWriter::with_path(&path);

    writer.write(&event(LogLevel::Info)).unwrap();
    writer.write(&event(LogLevel::Warning)).unwrap();
    writer.write(&event(LogLevel::Error)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let parts: Vec<&str> = contents.split('\n').collect();

    // Three lines plus the trailing newline's empty tail.
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[3], "");

    let first: serde_json::Value = serde_json::from_str(parts[0]).unwrap();
    assert_eq!(first["level"], "info");
    assert_eq!(first["client_id"], 21);
    assert_eq!(first["message"], "Hello World");
    assert_eq!(first["origin"], "Connector X");
    assert_eq!(first["context"]["foo"], "bar");
    assert!(first.get("datetime").is_some());

    let second: serde_json::Value = serde_json::from_str(parts[1]).unwrap();
    assert_eq!(second["level"], "warning");
    let third: serde_json::Value = serde_json::from_str(parts[2]).unwrap();
    assert_eq!(third["level"], "error");
}

#[test]
fn test_writer_never_rewrites_existing_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    let writer = LogWriter::with_path(&path);

    writer.write(&event(LogLevel::Info)).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    writer.write(&event(LogLevel::Error)).unwrap();
    let after_second = fs::read_to_string(&path).unwrap();

    assert!(after_second.starts_with(&after_first));
    assert_eq!(after_second.lines().count(), 2);
}

#[test]
fn test_writer_creates_missing_log_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("nested").join("system.log");
    let writer = LogWriter::with_path(&path);

    writer.write(&event(LogLevel::Info)).unwrap();

    assert!(path.exists());
}

#[test]
fn test_writer_targets_configured_path() {
    let dir = TempDir::new().unwrap();
    let config = ConnectorConfig {
        log_channel: "share".to_string(),
        log_fs_dir: dir.path().to_string_lossy().to_string(),
        log_fs_file_name: "system.log".to_string(),
    };

    let writer = LogWriter::new(&config);
    assert_eq!(writer.path(), dir.path().join("system.log"));

    writer.write(&event(LogLevel::Info)).unwrap();
    assert!(dir.path().join("system.log").exists());
}

#[test]
fn test_datetime_is_rfc3339() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.log");
    let writer = LogWriter::with_path(&path);

    writer.write(&event(LogLevel::Info)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let line: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    let datetime = line["datetime"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(datetime).is_ok());
}
