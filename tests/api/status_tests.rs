//! Presence API Tests

use axum::http::StatusCode;
use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{names, start_instant, texts, TestApp};

async fn heartbeat(app: &TestApp, user: &str) -> StatusCode {
    app.post_json_as("/status", json!({}), user).await.status
}

#[tokio::test]
async fn test_heartbeat_refreshes_last_status() {
    let app = TestApp::with_participants(&["Ana"]).await;
    app.clock.advance(Duration::seconds(5));

    assert_eq!(heartbeat(&app, "Ana").await, StatusCode::OK);

    let response = app.get("/participants").await;
    assert_eq!(
        response.body[0]["lastStatus"],
        (start_instant() + Duration::seconds(5)).timestamp_millis()
    );
}

#[tokio::test]
async fn test_heartbeat_unknown_participant_not_found() {
    let app = TestApp::new();

    assert_eq!(heartbeat(&app, "Ghost").await, StatusCode::NOT_FOUND);
    assert_eq!(heartbeat(&app, "").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sweep_evicts_idle_participants() {
    let app = TestApp::with_participants(&["Ana", "Bia"]).await;

    app.clock.advance(Duration::seconds(8));
    heartbeat(&app, "Bia").await;
    app.clock.advance(Duration::seconds(8));

    let report = app.room.sweep(Duration::seconds(10)).await;
    assert_eq!(report.removed, vec!["Ana".to_string()]);

    assert_eq!(names(&app.get("/participants").await.body), vec!["Bia"]);
    let log = texts(&app.get("/messages").await.body);
    assert_eq!(log.last().map(String::as_str), Some("left the room..."));

    // The evicted name can be registered again
    assert_eq!(app.register("Ana").await.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_heartbeat_after_eviction_not_found() {
    let app = TestApp::with_participants(&["Ana"]).await;
    app.clock.advance(Duration::seconds(11));
    app.room.sweep(Duration::seconds(10)).await;

    assert_eq!(heartbeat(&app, "Ana").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_heartbeat_with_undecodable_user_header_not_found() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.post_json_with_header("/status", json!({}), &[0xff, 0xfe]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
