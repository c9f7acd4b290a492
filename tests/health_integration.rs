use axum::http::StatusCode;
use quick_geocode::GeocodeClient;
use serde_json::json;
use std::collections::HashMap;

mod common;
use common::{unreachable_url, MockServer, Reply};

async fn health_with(reply: Reply) -> bool {
    let mut replies = HashMap::new();
    replies.insert("/health".to_string(), reply);
    let server = MockServer::start_exact(replies).await;
    server.client().health_check().await
}

#[tokio::test]
async fn test_health_check_healthy() {
    assert!(health_with(Reply::json(json!({ "success": true, "data": { "status": "ok" } }))).await);
}

#[tokio::test]
async fn test_health_check_defaults_success_to_true() {
    assert!(health_with(Reply::json(json!({ "data": { "status": "ok" } }))).await);
}

#[tokio::test]
async fn test_health_check_accepts_non_mapping_data() {
    assert!(health_with(Reply::json(json!({ "success": true, "data": "ok" }))).await);
    assert!(!health_with(Reply::json(json!({ "success": true, "data": null }))).await);
}

#[tokio::test]
async fn test_health_check_requires_success_and_data() {
    assert!(!health_with(Reply::json(json!({ "success": false, "data": { "status": "degraded" } }))).await);
    assert!(!health_with(Reply::json(json!({ "success": true }))).await);
}

#[tokio::test]
async fn test_health_check_faults_are_false() {
    assert!(!health_with(Reply::status(StatusCode::SERVICE_UNAVAILABLE, json!({ "success": false }))).await);
    assert!(!health_with(Reply::raw("not json")).await);

    let client = GeocodeClient::new(&unreachable_url().await).unwrap();
    assert!(!client.health_check().await);
}

#[tokio::test]
async fn test_envelope_of_fault() {
    let client = GeocodeClient::new(&unreachable_url().await).unwrap();
    let envelope = client.envelope("/health", &[]).await;
    assert!(!envelope.success);
    assert!(envelope.is_fault());
    assert!(envelope.data.is_none());
    assert!(envelope.error.is_some());
    assert_eq!(envelope.message.as_deref(), Some("Network error occurred"));
}

#[tokio::test]
async fn test_get_api_info() {
    let server = MockServer::start(vec![(
        "/",
        Reply::json(json!({
            "service": "quick-geocode-api",
            "version": "0.2.0",
            "description": "High-performance geocoding API",
            "endpoints": { "GET /health": "Health check" },
            "limits": { "rateLimit": "100 requests per 15 minutes" }
        })),
    )])
    .await;

    let info = server
        .client()
        .get_api_info()
        .await
        .unwrap()
        .expect("info should be present");
    assert_eq!(info.service.as_deref(), Some("quick-geocode-api"));
    assert_eq!(info.version.as_deref(), Some("0.2.0"));
    assert_eq!(
        info.endpoints.unwrap().get("GET /health").map(String::as_str),
        Some("Health check")
    );
    assert!(info.extra.contains_key("limits"));
}

#[tokio::test]
async fn test_get_api_info_failure_flag() {
    let server = MockServer::start(vec![("/", Reply::json(json!({ "success": false })))]).await;
    assert!(server.client().get_api_info().await.unwrap().is_none());
}
