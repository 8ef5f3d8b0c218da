//! Participant API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{names, start_instant, texts, TestApp};

#[tokio::test]
async fn test_register_returns_created_participant() {
    let app = TestApp::new();

    let response = app.register("  Ana ").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Ana");
    assert_eq!(response.body["lastStatus"], start_instant().timestamp_millis());
}

#[tokio::test]
async fn test_register_announces_arrival() {
    let app = TestApp::new();
    app.register("Ana").await;

    let response = app.get("/messages").await;

    assert_eq!(response.status, StatusCode::OK);
    let message = &response.body[0];
    assert_eq!(message["from"], "Ana");
    assert_eq!(message["to"], "Todos");
    assert_eq!(message["text"], "entered the room...");
    assert_eq!(message["type"], "status");
    assert_eq!(message["time"].as_str().map(str::len), Some(8));
}

#[tokio::test]
async fn test_register_duplicate_name_conflicts() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.register("Ana").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(names(&app.get("/participants").await.body), vec!["Ana"]);
    // No second arrival notice
    assert_eq!(texts(&app.get("/messages").await.body).len(), 1);
}

#[tokio::test]
async fn test_register_rejects_invalid_names() {
    let app = TestApp::new();

    for name in ["", "   ", "Todos"] {
        let response = app.register(name).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "name {:?}", name);
    }

    let response = app.post_json("/participants", json!({})).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(app.room.stats().await.participants, 0);
    assert_eq!(app.room.stats().await.messages, 0);
}

#[tokio::test]
async fn test_list_participants_in_registration_order() {
    let app = TestApp::with_participants(&["Caio", "Ana", "Bia"]).await;

    let response = app.get("/participants").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body), vec!["Caio", "Ana", "Bia"]);
}

#[tokio::test]
async fn test_list_participants_empty_room() {
    let app = TestApp::new();

    let response = app.get("/participants").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}
