//! Configuration schema types
//!
//! Process-wide settings for the collaborators around the sync engine. The
//! engine itself takes injected dependencies and reads none of this.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connector configuration, loaded from the process environment
///
/// Field names map to environment variables by upper-casing: `log_fs_dir`
/// comes from `LOG_FS_DIR`, and so on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Logical log channel name
    #[serde(default = "default_log_channel")]
    pub log_channel: String,

    /// Directory the log file lives in
    pub log_fs_dir: String,

    /// Log file name within `log_fs_dir`
    #[serde(default = "default_log_fs_file_name")]
    pub log_fs_file_name: String,
}

impl ConnectorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.log_channel.trim().is_empty() {
            return Err("log_channel must not be empty".to_string());
        }
        if self.log_fs_dir.trim().is_empty() {
            return Err("log_fs_dir must not be empty".to_string());
        }
        if self.log_fs_file_name.trim().is_empty() {
            return Err("log_fs_file_name must not be empty".to_string());
        }
        Ok(())
    }

    /// Full path of the log file
    pub fn log_file_path(&self) -> PathBuf {
        PathBuf::from(&self.log_fs_dir).join(&self.log_fs_file_name)
    }
}

fn default_log_channel() -> String {
    "share".to_string()
}

fn default_log_fs_file_name() -> String {
    "system.log".to_string()
}
