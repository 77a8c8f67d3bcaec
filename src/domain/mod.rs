//! Domain models and types for the connector.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Channel models** ([`Channel`], [`MetaEntry`])
//! - **Product models** ([`ChannelProduct`], [`ChannelVariant`], [`ChannelImage`])
//! - **Sync outcomes** ([`SyncOutcome`])
//! - **Error types** ([`ConnectorError`], [`TransformError`], [`CatalogError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Fallible operations outside the sync engine return
//! [`Result<T, ConnectorError>`](Result). The engine itself converts
//! failures into per-record [`SyncOutcome`] values instead of propagating
//! them; callers learn of batch-internal failures by inspecting outcomes
//! after the call.

pub mod channel;
pub mod errors;
pub mod outcome;
pub mod product;
pub mod result;

// Re-export commonly used types for convenience
pub use channel::{Channel, MetaEntry};
pub use errors::{CatalogError, ConnectorError, TransformError};
pub use outcome::SyncOutcome;
pub use product::{ChannelImage, ChannelProduct, ChannelVariant};
pub use result::Result;
