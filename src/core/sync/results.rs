//! Outcome recorder
//!
//! Total functions that apply a sync outcome to every record in a batch.
//! None of these can fail, and each covers the batch exactly once; a record
//! left without an outcome after a sync call is a defect.

use crate::adapters::catalog::models::RemoteProduct;
use crate::domain::{ChannelProduct, SyncOutcome};

/// Mark every product in the batch as failed with the given reason
pub fn set_failed(batch: &mut [ChannelProduct], reason: &str) {
    for product in batch.iter_mut() {
        product.outcome = Some(SyncOutcome::Failed(reason.to_string()));
    }
}

/// Apply per-record success outcomes from positionally aligned descriptors
///
/// Descriptor `i` describes product `i`. Besides the outcome, the remote
/// codes are written back onto the record: the product code directly,
/// variant codes matched by sku, image codes matched by url.
///
/// Callers must have verified that `descriptors` and `batch` have the same
/// length; extra descriptors are ignored here.
pub fn set_success(batch: &mut [ChannelProduct], descriptors: &[RemoteProduct]) {
    for (product, remote) in batch.iter_mut().zip(descriptors) {
        product.channel_product_code = Some(remote.id.clone());

        for variant in &mut product.variants {
            if let Some(option) = remote.options.iter().find(|o| o.sku == variant.sku) {
                variant.channel_variant_code = Some(option.id.clone());
            }
        }
        for image in &mut product.images {
            if let Some(remote_image) = remote.images.iter().find(|i| i.url == image.url) {
                image.channel_image_code = Some(remote_image.id.clone());
            }
        }

        product.outcome = Some(SyncOutcome::Success(remote.id.clone()));
    }
}

/// Mark every product in the batch as deleted remotely
///
/// The remote codes are cleared; a later upsert of the same record is a
/// create, not an update.
pub fn set_delete_success(batch: &mut [ChannelProduct]) {
    for product in batch.iter_mut() {
        product.channel_product_code = None;
        for variant in &mut product.variants {
            variant.channel_variant_code = None;
        }
        for image in &mut product.images {
            image.channel_image_code = None;
        }
        product.outcome = Some(SyncOutcome::DeleteSucceeded);
    }
}
