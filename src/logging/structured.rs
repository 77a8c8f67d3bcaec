//! Tracing bootstrap
//!
//! Console diagnostics for binaries and tests. This is separate from the
//! [`LogWriter`](super::writer::LogWriter) contract: tracing output is for
//! developers, the JSON-lines file is for the downstream log pipeline.

use crate::domain::{ConnectorError, Result};
use tracing_subscriber::EnvFilter;

/// Initialize a console tracing subscriber
///
/// `RUST_LOG` takes precedence over the passed default level. Calling this
/// twice returns an error from the underlying subscriber registry.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use skubridge::logging::init_tracing;
///
/// init_tracing("info").expect("failed to initialize tracing");
/// ```
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("skubridge={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ConnectorError::Configuration(format!("failed to initialize tracing: {e}")))
}
