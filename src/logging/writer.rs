//! Log event sink and file writer
//!
//! [`LogWriter`] serializes one JSON object per event, newline-terminated,
//! appending to the configured file. A `datetime` field is injected at write
//! time so every line is a self-contained, timestamped record. The file is
//! only ever appended to, never rewritten.

use super::event::LogEvent;
use crate::config::ConnectorConfig;
use crate::domain::Result;
use chrono::Utc;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Destination for structured log events
///
/// The sync engine writes through this trait; tests substitute an in-memory
/// recorder to assert on emitted events.
pub trait LogSink: Send + Sync {
    /// Durably record one event
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be serialized or written.
    fn write(&self, event: &LogEvent) -> Result<()>;
}

/// Append-only JSON-lines log file writer
///
/// # Example
///
/// ```no_run
/// use skubridge::logging::{LogEvent, LogSink, LogWriter};
/// # fn example(event: &LogEvent) -> skubridge::domain::Result<()> {
/// let writer = LogWriter::with_path("/var/log/skubridge/system.log");
/// writer.write(event)?;
/// # Ok(())
/// # }
/// ```
pub struct LogWriter {
    path: PathBuf,
}

impl LogWriter {
    /// Create a writer targeting the configured log file
    pub fn new(config: &ConnectorConfig) -> Self {
        Self {
            path: config.log_file_path(),
        }
    }

    /// Create a writer targeting an explicit path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file this writer appends to
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LogSink for LogWriter {
    fn write(&self, event: &LogEvent) -> Result<()> {
        let mut line = serde_json::to_value(event)?;
        line["datetime"] = Value::String(Utc::now().to_rfc3339());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
