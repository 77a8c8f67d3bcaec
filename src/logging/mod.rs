//! Logging and observability
//!
//! Two distinct concerns live here:
//! - [`event`] / [`writer`] - the structured log-event contract: one JSON
//!   object per line, newline-terminated, appended to a file with an
//!   injected `datetime` field. This is what the downstream log pipeline
//!   consumes.
//! - [`structured`] - tracing bootstrap for console diagnostics.

pub mod event;
pub mod structured;
pub mod writer;

// Re-export commonly used items
pub use event::{LogEvent, LogLevel, LOG_ORIGIN};
pub use structured::init_tracing;
pub use writer::{LogSink, LogWriter};
