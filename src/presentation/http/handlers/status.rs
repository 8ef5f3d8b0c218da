//! Presence Handlers

use axum::{extract::State, http::StatusCode};

use crate::presentation::http::extractors::Identity;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Heartbeat: keep the caller in the room
pub async fn heartbeat(
    State(state): State<AppState>,
    Identity(user): Identity,
) -> Result<StatusCode, AppError> {
    state.room.heartbeat(&user).await?;

    Ok(StatusCode::OK)
}
