//! Batch transform stage
//!
//! Pure conversion from channel products to the catalog API's wire shapes.
//! No I/O happens here and the output is fully determined by the input;
//! the engine's all-or-nothing outcome semantics depend on that.

use crate::adapters::catalog::models::{WireImage, WireOption, WireProduct};
use crate::domain::{ChannelProduct, TransformError};

/// Build the upsert payload for a batch
///
/// Output order matches batch order; the catalog API's response descriptors
/// are applied back positionally.
///
/// # Errors
///
/// Returns an error if any product has an empty title or no variants, both
/// of which the catalog API would reject.
pub fn wire_products(batch: &[ChannelProduct]) -> Result<Vec<WireProduct>, TransformError> {
    batch.iter().map(wire_product).collect()
}

/// Build the delete identifier set for a batch
///
/// # Errors
///
/// Returns an error if any product has never been assigned a remote product
/// code; there is nothing to delete remotely for such a record.
pub fn delete_codes(batch: &[ChannelProduct]) -> Result<Vec<String>, TransformError> {
    batch
        .iter()
        .map(|product| {
            product
                .channel_product_code
                .clone()
                .ok_or(TransformError::MissingProductCode { id: product.id })
        })
        .collect()
}

fn wire_product(product: &ChannelProduct) -> Result<WireProduct, TransformError> {
    if product.title.trim().is_empty() {
        return Err(TransformError::MissingTitle { id: product.id });
    }
    if product.variants.is_empty() {
        return Err(TransformError::NoVariants { id: product.id });
    }

    Ok(WireProduct {
        name: product.title.clone(),
        id: product.channel_product_code.clone().unwrap_or_default(),
        options: product
            .variants
            .iter()
            .map(|variant| WireOption {
                sku: variant.sku.clone(),
                id: variant.channel_variant_code.clone().unwrap_or_default(),
            })
            .collect(),
        images: product
            .images
            .iter()
            .map(|image| WireImage {
                url: image.url.clone(),
                id: image.channel_image_code.clone().unwrap_or_default(),
            })
            .collect(),
    })
}
