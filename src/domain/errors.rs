//! Domain error types
//!
//! This module defines the error hierarchy for the connector. All errors are
//! domain-specific and don't expose third-party types: the catalog adapter
//! maps transport failures into [`CatalogError`] before they reach the core.

use thiserror::Error;

/// Main connector error type
///
/// This is the primary error type used throughout the crate. It wraps the
/// specific error types and provides context for error handling. Note that
/// the sync engine itself never surfaces these to callers; they are used by
/// configuration, logging, and client construction.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Product transform errors
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Catalog API errors
    #[error("Catalog API error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors produced by the transform stage
///
/// The transform is pure and deterministic; every rejection names the
/// offending channel product so operators can find it in the source system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The catalog API rejects products without a name
    #[error("channel product {id} has no title")]
    MissingTitle { id: u64 },

    /// The catalog API requires at least one option per product
    #[error("channel product {id} has no variants")]
    NoVariants { id: u64 },

    /// Deletes need the remote code assigned by a prior successful sync
    #[error("channel product {id} has no channel product code")]
    MissingProductCode { id: u64 },
}

/// Errors produced by the catalog API client
///
/// The `Display` rendering of these values is what the sync engine records
/// as the failure reason on every product in the batch, so the provider's
/// message is preserved rather than interpreted.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure reaching the catalog API
    #[error("{0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status from the catalog API
    #[error("catalog API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded into the expected shape
    #[error("invalid catalog API response: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ConnectorError {
    fn from(err: std::io::Error) -> Self {
        ConnectorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::Serialization(err.to_string())
    }
}
