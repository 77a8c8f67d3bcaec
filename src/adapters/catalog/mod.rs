//! Catalog API adapter
//!
//! External integration with the remote product catalog:
//! - [`traits`] - the [`CatalogApi`] seam consumed by the sync engine
//! - [`client`] - reqwest-backed implementation
//! - [`models`] - wire request/response shapes

pub mod client;
pub mod models;
pub mod traits;

pub use client::CatalogClient;
pub use models::{RemoteImage, RemoteOption, RemoteProduct, WireImage, WireOption, WireProduct};
pub use traits::CatalogApi;
