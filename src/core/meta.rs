//! Channel metadata accessor
//!
//! Channels carry an ordered list of metadata entries, but only a fixed
//! allow-list of keys is ever exposed to the rest of the system. Lookups for
//! anything else resolve to absent, never an error.

use crate::domain::Channel;
use std::collections::HashMap;

/// Metadata key holding the catalog API base URL
pub const META_API_URL_KEY: &str = "api_url";

/// Channel metadata keys the accessor will resolve
pub const ALLOWED_CHANNEL_META: &[&str] = &[META_API_URL_KEY];

/// Allow-list-guarded view over a channel's metadata
///
/// Construction scans the metadata list once; duplicate keys resolve with
/// last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct Meta {
    map: HashMap<String, String>,
}

impl Meta {
    /// Build the accessor from a channel's metadata list
    pub fn new(channel: &Channel) -> Self {
        let mut map = HashMap::with_capacity(channel.meta.len());
        for entry in &channel.meta {
            map.insert(entry.key.clone(), entry.value.clone());
        }
        Self { map }
    }

    /// Resolve an allow-listed metadata key
    ///
    /// Returns `None` both when the key is outside the allow-list and when
    /// the channel simply does not carry it.
    pub fn get(&self, key: &str) -> Option<&str> {
        if !ALLOWED_CHANNEL_META.contains(&key) {
            return None;
        }
        self.map.get(key).map(String::as_str)
    }

    /// Convenience accessor for the catalog API base URL
    pub fn api_url(&self) -> Option<&str> {
        self.get(META_API_URL_KEY)
    }
}
