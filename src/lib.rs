// Skubridge - Channel Product Catalog Connector
// Copyright (c) 2026 Skubridge Contributors
// Licensed under the MIT License

//! # Skubridge - Channel Product Catalog Connector
//!
//! Skubridge synchronizes batches of channel products with an external
//! product catalog API: it transforms internal records into the API's wire
//! shape, submits them (create/update or delete), and records a per-record
//! outcome so the calling system can reconcile state.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`core`] - Business logic (sync engine, transform, metadata accessor)
//! - [`adapters`] - External integrations (catalog API client)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured log events and the JSON-lines file writer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use skubridge::adapters::catalog::CatalogClient;
//! use skubridge::core::sync::SyncEngine;
//! use skubridge::domain::{Channel, ChannelProduct, SyncOutcome};
//! use skubridge::logging::LogWriter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let channel = Channel::new(1, 21, "demo catalog")
//!         .with_meta("api_url", "http://localhost:8080");
//!
//!     let config = skubridge::config::load_env()?;
//!     let engine = SyncEngine::new(
//!         Arc::new(CatalogClient::for_channel(&channel)?),
//!         Arc::new(LogWriter::new(&config)),
//!     );
//!
//!     let mut batch = vec![
//!         ChannelProduct::new(1, "Widget").with_variant("WID-S"),
//!         ChannelProduct::new(2, "Gadget").with_variant("GAD-S"),
//!     ];
//!     engine.sync_upsert(&mut batch, &channel).await;
//!
//!     for product in &batch {
//!         match &product.outcome {
//!             Some(SyncOutcome::Success(code)) => {
//!                 println!("product {} synced as {code}", product.id)
//!             }
//!             Some(SyncOutcome::Failed(reason)) => {
//!                 println!("product {} failed: {reason}", product.id)
//!             }
//!             _ => {}
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Semantics
//!
//! The sync calls never return an error for batch-internal failures. A
//! failed transform or remote call marks every product in the batch with a
//! uniform [`SyncOutcome::Failed`](domain::SyncOutcome) reason (preserving
//! the provider's message verbatim) and emits exactly one structured log
//! event; the remaining pipeline stages are skipped. Callers inspect the
//! per-record outcomes after the call.
//!
//! ## Logging
//!
//! Diagnostics use the `tracing` crate; the formal log-event contract
//! (one JSON object per line, appended with an injected `datetime` field)
//! lives in [`logging`].

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
