//! Configuration loader
//!
//! Loads [`ConnectorConfig`] from the process environment, after a
//! best-effort `.env` load for local development. There is no configuration
//! file; the connector runs where its caller runs and inherits that
//! environment.

use super::schema::ConnectorConfig;
use crate::domain::{ConnectorError, Result};

/// Load and validate configuration from the environment
///
/// A `.env` file in the working directory is applied first if present;
/// already-set variables win over `.env` entries.
///
/// # Errors
///
/// Returns an error if a required variable is missing or a value fails
/// validation.
///
/// # Examples
///
/// ```no_run
/// use skubridge::config::load_env;
///
/// let config = load_env().expect("failed to load configuration");
/// println!("logging to {}", config.log_file_path().display());
/// ```
pub fn load_env() -> Result<ConnectorConfig> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| {
            ConnectorError::Configuration(format!("failed to read environment: {e}"))
        })?;

    let cfg: ConnectorConfig = settings.try_deserialize().map_err(|e| {
        ConnectorError::Configuration(format!("invalid connector configuration: {e}"))
    })?;

    cfg.validate().map_err(ConnectorError::Configuration)?;

    Ok(cfg)
}
