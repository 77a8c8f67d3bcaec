//! External integrations
//!
//! Adapters wrap everything outside the process boundary. The catalog
//! adapter is the only one: it owns the HTTP client and the wire shapes the
//! remote API expects.

pub mod catalog;
