//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{texts, TestApp};

#[tokio::test]
async fn test_post_public_message() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.say("Ana", "Todos", "hello", "message").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["id"].is_string());

    let listed = app.get_as("/messages", "Ana").await;
    let last = listed.body.as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["id"], response.body["id"]);
    assert_eq!(last["from"], "Ana");
    assert_eq!(last["to"], "Todos");
    assert_eq!(last["type"], "message");
}

#[tokio::test]
async fn test_private_messages_visible_to_parties_only() {
    let app = TestApp::with_participants(&["Ana", "Bia", "Caio"]).await;
    app.say("Ana", "Bia", "secret", "private_message").await;
    app.say("Caio", "Todos", "hi all", "message").await;

    let as_bia = texts(&app.get_as("/messages", "Bia").await.body);
    let as_ana = texts(&app.get_as("/messages", "Ana").await.body);
    let as_caio = texts(&app.get_as("/messages", "Caio").await.body);
    let anonymous = texts(&app.get("/messages").await.body);

    assert!(as_bia.contains(&"secret".to_string()));
    assert!(as_ana.contains(&"secret".to_string()));
    assert!(!as_caio.contains(&"secret".to_string()));
    assert!(!anonymous.contains(&"secret".to_string()));
    assert!(anonymous.contains(&"hi all".to_string()));
}

#[tokio::test]
async fn test_limit_returns_most_recent_visible_messages() {
    let app = TestApp::with_participants(&["Ana", "Bia"]).await;
    app.say("Ana", "Todos", "one", "message").await;
    app.say("Ana", "Bia", "two", "private_message").await;
    app.say("Bia", "Todos", "three", "message").await;

    let response = app.get_as("/messages?limit=2", "Bia").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(texts(&response.body), vec!["two", "three"]);

    // Hidden messages do not count against the limit
    let response = app.get("/messages?limit=2").await;
    assert_eq!(texts(&response.body), vec!["one", "three"]);
}

#[tokio::test]
async fn test_unusable_limit_returns_everything() {
    let app = TestApp::with_participants(&["Ana"]).await;
    app.say("Ana", "Todos", "one", "message").await;

    for uri in ["/messages?limit=0", "/messages?limit=-1", "/messages?limit=abc"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::OK, "{}", uri);
        assert_eq!(texts(&response.body), vec!["entered the room...", "one"]);
    }
}

#[tokio::test]
async fn test_invalid_message_reports_every_field() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app
        .post_json_as("/messages", json!({ "to": "", "text": "  ", "type": "shout" }), "Ana")
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["to", "text", "type"]);
    assert_eq!(app.room.stats().await.messages, 1);
}

#[tokio::test]
async fn test_status_type_cannot_be_posted() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.say("Ana", "Todos", "left the room...", "status").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_message_to_self_rejected() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.say("Ana", "Ana", "me", "message").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "to");
}

#[tokio::test]
async fn test_unknown_sender_rejected() {
    let app = TestApp::with_participants(&["Bia"]).await;

    let response = app.say("Ghost", "Bia", "boo", "private_message").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "from");
}

#[tokio::test]
async fn test_unknown_receiver_rejected() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app.say("Ana", "Ghost", "hello?", "private_message").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "to");
}

#[tokio::test]
async fn test_missing_user_header_rejected_on_post() {
    let app = TestApp::with_participants(&["Ana"]).await;

    let response = app
        .post_json("/messages", json!({ "to": "Todos", "text": "hi", "type": "message" }))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["field"], "from");
}
