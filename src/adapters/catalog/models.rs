//! Wire models for the catalog API
//!
//! These types mirror the catalog API's request and response shapes and are
//! produced only by the transform stage ([`crate::core::transform`]) and the
//! client. Request ids are omitted from the serialized body when empty so
//! the server assigns fresh codes on create.

use serde::{Deserialize, Serialize};

/// One product option in the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireOption {
    /// Stock keeping unit
    pub sku: String,

    /// Remote option code; empty on create
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// One product image in the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireImage {
    /// Image URL
    pub url: String,

    /// Remote image code; empty on create
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// The catalog API's request shape for one product
///
/// The API requires a name and at least one option; the transform enforces
/// both before a request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireProduct {
    /// Product name
    pub name: String,

    /// Remote product code; empty on create, set on update
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Product options
    pub options: Vec<WireOption>,

    /// Product images
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<WireImage>,
}

/// One option descriptor returned by the catalog API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOption {
    /// Stock keeping unit, echoed from the request
    pub sku: String,

    /// Server-assigned option code
    pub id: String,
}

/// One image descriptor returned by the catalog API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteImage {
    /// Image URL, echoed from the request
    pub url: String,

    /// Server-assigned image code
    pub id: String,
}

/// One product descriptor returned by the catalog API
///
/// Responses are positionally aligned with the submitted products: the
/// descriptor at index `i` describes the product submitted at index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProduct {
    /// Product name, echoed from the request
    pub name: String,

    /// Server-assigned product code
    pub id: String,

    /// Option descriptors
    #[serde(default)]
    pub options: Vec<RemoteOption>,

    /// Image descriptors
    #[serde(default)]
    pub images: Vec<RemoteImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_product_omits_empty_ids() {
        let product = WireProduct {
            name: "Widget".to_string(),
            id: String::new(),
            options: vec![WireOption {
                sku: "WID-S".to_string(),
                id: String::new(),
            }],
            images: Vec::new(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("images").is_none());
        assert!(json["options"][0].get("id").is_none());
    }

    #[test]
    fn test_wire_product_keeps_assigned_ids() {
        let product = WireProduct {
            name: "Widget".to_string(),
            id: "A1".to_string(),
            options: vec![WireOption {
                sku: "WID-S".to_string(),
                id: "O1".to_string(),
            }],
            images: vec![WireImage {
                url: "https://cdn.example/w.png".to_string(),
                id: "I1".to_string(),
            }],
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "A1");
        assert_eq!(json["options"][0]["id"], "O1");
        assert_eq!(json["images"][0]["id"], "I1");
    }

    #[test]
    fn test_remote_product_tolerates_missing_collections() {
        let remote: RemoteProduct =
            serde_json::from_str(r#"{"name":"Widget","id":"A1"}"#).unwrap();
        assert_eq!(remote.id, "A1");
        assert!(remote.options.is_empty());
        assert!(remote.images.is_empty());
    }
}
