//! Batch synchronization
//!
//! - [`engine`] - the transform / submit / record orchestrator
//! - [`results`] - the outcome recorder applied to every batch

pub mod engine;
pub mod results;

pub use engine::{SyncEngine, INVALID_TRANSFORM};
