//! Channel product model
//!
//! A channel product is one product as known to the connecting system,
//! destined for a channel. Batches are ordered slices owned by the caller;
//! the sync engine mutates the `outcome` slot (and remote codes) in place
//! and never persists the batch itself.

use super::outcome::SyncOutcome;

/// One sellable variant of a channel product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelVariant {
    /// Stock keeping unit, unique within the product
    pub sku: String,

    /// Remote option code assigned by the catalog API, if synced before
    pub channel_variant_code: Option<String>,
}

impl ChannelVariant {
    /// Create a variant that has not been synced yet
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            channel_variant_code: None,
        }
    }
}

/// One product image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelImage {
    /// Source URL of the image
    pub url: String,

    /// Remote image code assigned by the catalog API, if synced before
    pub channel_image_code: Option<String>,
}

impl ChannelImage {
    /// Create an image that has not been synced yet
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            channel_image_code: None,
        }
    }
}

/// An internal product record destined for a channel
///
/// `channel_product_code` is the remote identifier; it is absent until the
/// first successful upsert writes it back, and it is required by the delete
/// flow. `outcome` is the mutable last-sync-outcome slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelProduct {
    /// Stable internal identifier
    pub id: u64,

    /// Product title; the catalog API rejects unnamed products
    pub title: String,

    /// Remote product code, present after a successful upsert
    pub channel_product_code: Option<String>,

    /// Variants, at least one is required by the wire format
    pub variants: Vec<ChannelVariant>,

    /// Images, optional
    pub images: Vec<ChannelImage>,

    /// Outcome of the most recent sync attempt
    pub outcome: Option<SyncOutcome>,
}

impl ChannelProduct {
    /// Create a new channel product with no variants or images
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            channel_product_code: None,
            variants: Vec::new(),
            images: Vec::new(),
            outcome: None,
        }
    }

    /// Append a variant, builder style
    pub fn with_variant(mut self, sku: impl Into<String>) -> Self {
        self.variants.push(ChannelVariant::new(sku));
        self
    }

    /// Append an image, builder style
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(ChannelImage::new(url));
        self
    }

    /// Set the remote product code, builder style
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.channel_product_code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let product = ChannelProduct::new(1, "Widget")
            .with_variant("WID-S")
            .with_variant("WID-L")
            .with_image("https://cdn.example/widget.png")
            .with_code("A1");

        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.images.len(), 1);
        assert_eq!(product.channel_product_code.as_deref(), Some("A1"));
        assert!(product.outcome.is_none());
    }
}
