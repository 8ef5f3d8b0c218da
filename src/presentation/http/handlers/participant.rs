//! Participant Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::RegisterParticipantRequest;
use crate::application::dto::response::ParticipantResponse;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new participant
pub async fn register_participant(
    State(state): State<AppState>,
    Json(body): Json<RegisterParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>), AppError> {
    let participant = state.room.register(&body.name).await?;

    Ok((StatusCode::CREATED, Json(ParticipantResponse::from(participant))))
}

/// List participants in registration order
pub async fn list_participants(State(state): State<AppState>) -> Json<Vec<ParticipantResponse>> {
    let participants = state.room.participants().await;

    Json(participants.into_iter().map(ParticipantResponse::from).collect())
}
