//! Health Check Handlers
//!
//! Provides health check endpoints for liveness and readiness probes.
//!
//! # Endpoints
//! - `GET /health` - Basic health check
//! - `GET /health/live` - Liveness probe (is the server running?)
//! - `GET /health/ready` - Readiness probe (is the store reachable?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::startup::AppState;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub store: StoreHealth,
    pub room: RoomHealth,
}

/// Persistence collaborator health
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub backend: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Room counters
#[derive(Debug, Serialize)]
pub struct RoomHealth {
    pub participants: usize,
    pub messages: usize,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Simple liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness probe - checks if the server is running
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Readiness probe - returns 503 if the store is unreachable
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let store = check_store(&state).await;
    let stats = state.room.stats().await;

    let response = ReadinessResponse {
        status: store.status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        started_at: SERVER_START_TIME.to_rfc3339(),
        store,
        room: RoomHealth {
            participants: stats.participants,
            messages: stats.messages,
        },
    };

    let status_code = status_code_for(response.status);
    (status_code, Json(response))
}

/// Check store connectivity and latency
async fn check_store(state: &AppState) -> StoreHealth {
    let backend = state.settings.store.backend.to_string();
    let start = Instant::now();

    match state.room.ping_store().await {
        Ok(()) => {
            let latency = start.elapsed().as_millis() as u64;
            StoreHealth {
                backend,
                status: if latency < 100 {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Degraded
                },
                latency_ms: Some(latency),
                message: None,
            }
        }
        Err(e) => StoreHealth {
            backend,
            status: HealthStatus::Unhealthy,
            latency_ms: None,
            message: Some(format!("Store check failed: {}", e)),
        },
    }
}

fn status_code_for(status: HealthStatus) -> StatusCode {
    match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}
