//! Sync engine - orchestrator for batch synchronization
//!
//! Both operations follow the same three-stage pipeline: transform the
//! batch into the wire shape, submit it to the catalog API, record an
//! outcome on every product. A failure at any stage short-circuits the
//! remaining stages, applies a uniform `Failed` outcome to the whole batch,
//! and emits exactly one log event; it never propagates to the caller.

use crate::adapters::catalog::traits::CatalogApi;
use crate::core::sync::results;
use crate::core::transform;
use crate::domain::{Channel, ChannelProduct};
use crate::logging::{LogEvent, LogSink};
use std::sync::Arc;

/// Failure reason recorded when the batch cannot be mapped to wire format
pub const INVALID_TRANSFORM: &str = "Invalid Transform";

/// Batch synchronization engine
///
/// Stateless per invocation: each call builds its own payload and outcome
/// set, so concurrent calls on distinct batches are independent. The
/// collaborators are injected, which keeps the engine free of global state
/// and unit-testable with scripted implementations.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use skubridge::adapters::catalog::CatalogClient;
/// use skubridge::core::sync::SyncEngine;
/// use skubridge::domain::{Channel, ChannelProduct};
/// use skubridge::logging::LogWriter;
///
/// # async fn example() -> skubridge::domain::Result<()> {
/// let channel = Channel::new(1, 21, "demo catalog")
///     .with_meta("api_url", "http://localhost:8080");
/// let engine = SyncEngine::new(
///     Arc::new(CatalogClient::for_channel(&channel)?),
///     Arc::new(LogWriter::with_path("system.log")),
/// );
///
/// let mut batch = vec![ChannelProduct::new(1, "Widget").with_variant("W-1")];
/// engine.sync_upsert(&mut batch, &channel).await;
///
/// // Outcomes are on the records, not in a return value.
/// assert!(batch[0].outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub struct SyncEngine {
    api: Arc<dyn CatalogApi>,
    log: Arc<dyn LogSink>,
}

impl SyncEngine {
    /// Create an engine with injected collaborators
    pub fn new(api: Arc<dyn CatalogApi>, log: Arc<dyn LogSink>) -> Self {
        Self { api, log }
    }

    /// Create or update a batch of channel products in the remote catalog
    ///
    /// An empty batch is a no-op. On success every product receives
    /// `Success(remote code)` from the positionally aligned response
    /// descriptor; on any failure every product receives the same `Failed`
    /// reason and one log event is emitted. Batch-internal failures are
    /// never raised to the caller.
    pub async fn sync_upsert(&self, batch: &mut [ChannelProduct], channel: &Channel) {
        if batch.is_empty() {
            return;
        }

        // transform
        let products = match transform::wire_products(batch) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(channel_id = channel.id, error = %e, "upsert transform failed");
                self.fail_batch(batch, INVALID_TRANSFORM, channel);
                return;
            }
        };

        // submit
        let descriptors = match self.api.create_or_update(&products).await {
            Ok(descriptors) => descriptors,
            Err(e) => {
                self.fail_batch(batch, &e.to_string(), channel);
                return;
            }
        };

        // A short or long response would silently mis-assign outcomes if
        // applied positionally; treat it as a remote failure instead.
        if descriptors.len() != batch.len() {
            let message = format!(
                "catalog API returned {} descriptors for {} products",
                descriptors.len(),
                batch.len()
            );
            self.fail_batch(batch, &message, channel);
            return;
        }

        results::set_success(batch, &descriptors);
        tracing::debug!(
            channel_id = channel.id,
            count = batch.len(),
            "batch upsert succeeded"
        );
    }

    /// Delete a batch of channel products from the remote catalog
    ///
    /// Same pipeline shape as [`sync_upsert`](Self::sync_upsert): an empty
    /// batch is a no-op, any failure marks the whole batch `Failed` with one
    /// log event, and success marks every product `DeleteSucceeded`.
    pub async fn sync_delete(&self, batch: &mut [ChannelProduct], channel: &Channel) {
        if batch.is_empty() {
            return;
        }

        // transform
        let codes = match transform::delete_codes(batch) {
            Ok(codes) => codes,
            Err(e) => {
                tracing::warn!(channel_id = channel.id, error = %e, "delete transform failed");
                self.fail_batch(batch, INVALID_TRANSFORM, channel);
                return;
            }
        };

        // submit
        if let Err(e) = self.api.delete(&codes).await {
            self.fail_batch(batch, &e.to_string(), channel);
            return;
        }

        results::set_delete_success(batch);
        tracing::debug!(
            channel_id = channel.id,
            count = batch.len(),
            "batch delete succeeded"
        );
    }

    /// Apply the uniform failure outcome and emit the single failure event
    ///
    /// A sink write failure must not alter outcome semantics, so it is
    /// logged and swallowed.
    fn fail_batch(&self, batch: &mut [ChannelProduct], message: &str, channel: &Channel) {
        results::set_failed(batch, message);

        let event = LogEvent::product_sync_failed(batch, message, channel);
        if let Err(e) = self.log.write(&event) {
            tracing::warn!(channel_id = channel.id, error = %e, "failed to write log event");
        }
    }
}
