//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_store_and_room() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["store"]["backend"], "memory");
    assert_eq!(response.body["room"]["participants"], 1);
    assert_eq!(response.body["room"]["messages"], 1);
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_room_metrics() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    let text = response.body.as_str().unwrap_or_default();
    assert!(text.contains("chat_room_participants_active"));
}
