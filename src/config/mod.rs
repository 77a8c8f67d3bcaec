//! Configuration management
//!
//! Environment-driven configuration for the collaborators around the sync
//! engine (currently: where the log writer appends). Loaded once at process
//! start; the engine itself is configuration-free.

pub mod loader;
pub mod schema;

pub use loader::load_env;
pub use schema::ConnectorConfig;
