//! Channel model
//!
//! A channel identifies one destination catalog integration: which client it
//! belongs to and the metadata needed to reach the remote API. Channel
//! metadata is an ordered list of string pairs; only allow-listed keys are
//! ever exposed to the rest of the system (see [`crate::core::meta`]).

/// One channel metadata entry
///
/// Metadata is kept as an ordered list rather than a map so that duplicate
/// keys survive construction; the accessor resolves duplicates with
/// last-write-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    /// Metadata key (e.g. `api_url`)
    pub key: String,

    /// Metadata value
    pub value: String,
}

impl MetaEntry {
    /// Create a new metadata entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A destination catalog integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Channel identifier
    pub id: u64,

    /// Owning client identifier, carried into every log event
    pub client_id: u32,

    /// Human-readable channel description
    pub description: String,

    /// Channel-level metadata, ordered as configured
    pub meta: Vec<MetaEntry>,
}

impl Channel {
    /// Create a new channel with no metadata
    pub fn new(id: u64, client_id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            client_id,
            description: description.into(),
            meta: Vec::new(),
        }
    }

    /// Append a metadata entry, builder style
    ///
    /// # Example
    ///
    /// ```
    /// use skubridge::domain::Channel;
    ///
    /// let channel = Channel::new(1, 21, "demo catalog")
    ///     .with_meta("api_url", "http://localhost:8080");
    /// assert_eq!(channel.meta.len(), 1);
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.push(MetaEntry::new(key, value));
        self
    }
}
