//! Core business logic
//!
//! This module contains the connector's actual control flow:
//!
//! # Modules
//!
//! - [`sync`] - the batch synchronization engine and outcome recorder
//! - [`transform`] - pure conversion from channel products to wire shapes
//! - [`meta`] - allow-list-guarded channel metadata accessor

pub mod meta;
pub mod sync;
pub mod transform;
