//! Structured log events
//!
//! The sync engine reports batch failures as [`LogEvent`] records handed to
//! an injected [`LogSink`](super::writer::LogSink). Events are immutable
//! once built.

use crate::domain::{Channel, ChannelProduct};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Origin label stamped on every event this connector produces
pub const LOG_ORIGIN: &str = "skubridge";

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Informational
    Info,
    /// Something unexpected but recoverable
    Warning,
    /// A failure an operator should look at
    Error,
}

/// One structured log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Human-readable message
    pub message: String,

    /// Client the event belongs to
    pub client_id: u32,

    /// Whether the downstream pipeline should ship this to the search index
    pub log_to_es: bool,

    /// Severity
    pub level: LogLevel,

    /// Producing system
    pub origin: String,

    /// Free-form key/value context
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    /// Build the single failure event for a batch whose sync attempt failed
    ///
    /// The context names the channel and the internal ids of every product
    /// in the batch so operators can reconcile without database access.
    pub fn product_sync_failed(
        batch: &[ChannelProduct],
        message: &str,
        channel: &Channel,
    ) -> Self {
        let product_ids = batch
            .iter()
            .map(|product| product.id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut context = BTreeMap::new();
        context.insert("channel_id".to_string(), channel.id.to_string());
        context.insert("channel_product_ids".to_string(), product_ids);

        Self {
            message: message.to_string(),
            client_id: channel.client_id,
            log_to_es: true,
            level: LogLevel::Error,
            origin: LOG_ORIGIN.to_string(),
            context,
        }
    }
}
