//! Catalog API abstraction trait
//!
//! This module defines the trait the sync engine consumes. The engine never
//! talks to a concrete HTTP client; tests substitute scripted
//! implementations to drive failure paths deterministically.

use super::models::{RemoteProduct, WireProduct};
use crate::domain::CatalogError;
use async_trait::async_trait;

/// Remote catalog API capability consumed by the sync engine
///
/// Implementations perform the actual network I/O. Both operations fail with
/// a [`CatalogError`] on transport failures and non-success responses; the
/// engine records the error's message verbatim against every product in the
/// batch.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Create or update products in the remote catalog
    ///
    /// Returns one descriptor per submitted product, positionally aligned
    /// with the input sequence.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx response.
    async fn create_or_update(
        &self,
        products: &[WireProduct],
    ) -> Result<Vec<RemoteProduct>, CatalogError>;

    /// Delete products from the remote catalog by remote product code
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx response.
    async fn delete(&self, codes: &[String]) -> Result<(), CatalogError>;
}
