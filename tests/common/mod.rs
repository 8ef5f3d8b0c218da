//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderValue, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use chat_room::application::services::ChatRoom;
use chat_room::config::Settings;
use chat_room::infrastructure::repositories::{
    InMemoryMessageRepository, InMemoryParticipantRepository,
};
use chat_room::presentation::http::routes;
use chat_room::shared::clock::ManualClock;
use chat_room::startup::AppState;

/// Test application backed by the in-memory store and a manual clock
pub struct TestApp {
    pub router: Router,
    pub room: Arc<ChatRoom>,
    pub clock: Arc<ManualClock>,
}

/// Decoded response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

impl TestApp {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let room = Arc::new(ChatRoom::new(
            Arc::new(InMemoryParticipantRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
            clock.clone(),
        ));
        let state = AppState::new(room.clone(), Settings::default());

        Self {
            router: routes::create_router(state),
            room,
            clock,
        }
    }

    /// Create an app with the given participants already registered
    pub async fn with_participants(names: &[&str]) -> Self {
        let app = Self::new();
        for name in names {
            let response = app.register(name).await;
            assert_eq!(response.status, StatusCode::CREATED, "register {}", name);
        }
        app
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a GET request carrying the `user` header
    pub async fn get_as(&self, uri: &str, user: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("user", user)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body carrying the `user` header
    pub async fn post_json_as(&self, uri: &str, body: Value, user: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .header("user", user)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request whose `user` header carries raw bytes
    pub async fn post_json_with_header(&self, uri: &str, body: Value, user: &[u8]) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .header("user", HeaderValue::from_bytes(user).unwrap())
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn register(&self, name: &str) -> TestResponse {
        self.post_json("/participants", serde_json::json!({ "name": name }))
            .await
    }

    pub async fn say(&self, from: &str, to: &str, text: &str, kind: &str) -> TestResponse {
        self.post_json_as(
            "/messages",
            serde_json::json!({ "to": to, "text": text, "type": kind }),
            from,
        )
        .await
    }
}

/// Texts of a message list response, in order
pub fn texts(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("message list")
        .iter()
        .map(|m| m["text"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Names of a participant list response, in order
pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("participant list")
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
