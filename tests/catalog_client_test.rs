//! Integration tests for the catalog API client
//!
//! These run against a mockito HTTP server and assert the client's error
//! mapping contract: provider messages must survive verbatim because they
//! become per-product failure reasons.

use mockito::Matcher;
use serde_json::json;
use skubridge::adapters::catalog::{CatalogApi, CatalogClient};
use skubridge::core::sync::SyncEngine;
use skubridge::domain::{CatalogError, Channel, ChannelProduct, Result, SyncOutcome};
use skubridge::logging::{LogEvent, LogSink};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

impl LogSink for RecordingSink {
    fn write(&self, event: &LogEvent) -> Result<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

fn wire_batch() -> Vec<ChannelProduct> {
    vec![
        ChannelProduct::new(1, "Widget").with_variant("WID-S"),
        ChannelProduct::new(2, "Gadget").with_variant("GAD-S"),
    ]
}

#[tokio::test]
async fn test_create_or_update_decodes_descriptors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/products")
        .match_header("content-type", "application/json")
        .with_status(202)
        .with_body(
            json!([
                {"name": "Widget", "id": "A1", "options": [{"sku": "WID-S", "id": "O1"}]},
                {"name": "Gadget", "id": "A2", "options": [{"sku": "GAD-S", "id": "O2"}]}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(&server.url()).unwrap();
    let products = skubridge::core::transform::wire_products(&wire_batch()).unwrap();
    let descriptors = client.create_or_update(&products).await.unwrap();

    mock.assert_async().await;
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].id, "A1");
    assert_eq!(descriptors[1].options[0].id, "O2");
}

#[tokio::test]
async fn test_create_or_update_maps_bad_request_with_body_verbatim() {
    let mut server = mockito::Server::new_async().await;
    // The catalog service JSON-encodes its error message.
    let _mock = server
        .mock("POST", "/products")
        .with_status(400)
        .with_body("\"product Name is required\"")
        .create_async()
        .await;

    let client = CatalogClient::new(&server.url()).unwrap();
    let products = skubridge::core::transform::wire_products(&wire_batch()).unwrap();
    let err = client.create_or_update(&products).await.unwrap_err();

    match err {
        CatalogError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "product Name is required");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_or_update_rejects_undecodable_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/products")
        .with_status(202)
        .with_body("not json")
        .create_async()
        .await;

    let client = CatalogClient::new(&server.url()).unwrap();
    let products = skubridge::core::transform::wire_products(&wire_batch()).unwrap();
    let err = client.create_or_update(&products).await.unwrap_err();

    assert!(matches!(err, CatalogError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_delete_sends_code_array() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/products")
        .match_body(Matcher::Json(json!(["A1", "A2"])))
        .with_status(202)
        .with_body("[]")
        .create_async()
        .await;

    let client = CatalogClient::new(&server.url()).unwrap();
    let codes = vec!["A1".to_string(), "A2".to_string()];
    client.delete(&codes).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_fetches_products_by_code() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/products")
        .match_body(Matcher::Json(json!(["A1"])))
        .with_status(202)
        .with_body(json!([{"name": "Widget", "id": "A1", "options": []}]).to_string())
        .create_async()
        .await;

    let client = CatalogClient::new(&server.url()).unwrap();
    let products = client.get(&["A1".to_string()]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Widget");
}

#[tokio::test]
async fn test_get_page_passes_cursor_and_limit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/products/page")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("channel_product_code".into(), "A1".into()),
        ]))
        .with_status(202)
        .with_body("[]")
        .create_async()
        .await;

    let client = CatalogClient::new(&server.url()).unwrap();
    let products = client.get_page(Some("A1"), 2).await.unwrap();

    mock.assert_async().await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_maps_to_connection_failed() {
    // Port 9 (discard) is not listening in the test environment.
    let client = CatalogClient::new("http://127.0.0.1:9").unwrap();
    let err = client.delete(&["A1".to_string()]).await.unwrap_err();

    assert!(matches!(err, CatalogError::ConnectionFailed(_)));
}

#[tokio::test]
async fn test_engine_end_to_end_against_http_server() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/products")
        .with_status(202)
        .with_body(
            json!([
                {"name": "Widget", "id": "A1", "options": [{"sku": "WID-S", "id": "O1"}]},
                {"name": "Gadget", "id": "A2", "options": [{"sku": "GAD-S", "id": "O2"}]}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    // Build the client the production way: from channel metadata.
    let channel = Channel::new(57, 21, "demo catalog").with_meta("api_url", server.url());
    let sink = Arc::new(RecordingSink::default());
    let engine = SyncEngine::new(
        Arc::new(CatalogClient::for_channel(&channel).unwrap()),
        sink.clone(),
    );

    let mut batch = wire_batch();
    engine.sync_upsert(&mut batch, &channel).await;

    assert_eq!(batch[0].outcome, Some(SyncOutcome::Success("A1".to_string())));
    assert_eq!(batch[1].outcome, Some(SyncOutcome::Success("A2".to_string())));
    assert!(sink.events.lock().unwrap().is_empty());
}
