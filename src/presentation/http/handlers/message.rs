//! Message Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{MessageQueryParams, SendMessageRequest};
use crate::application::dto::response::{MessageCreatedResponse, MessageResponse};
use crate::application::services::RoomError;
use crate::presentation::http::extractors::Identity;
use crate::shared::error::{AppError, FieldError};
use crate::startup::AppState;

/// Get the messages visible to the caller
pub async fn get_messages(
    State(state): State<AppState>,
    Identity(user): Identity,
    Query(query): Query<MessageQueryParams>,
) -> Json<Vec<MessageResponse>> {
    let messages = state.room.messages_visible_to(&user, query.limit()).await;

    Json(messages.into_iter().map(MessageResponse::from).collect())
}

/// Post a message as the caller
pub async fn send_message(
    State(state): State<AppState>,
    Identity(user): Identity,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageCreatedResponse>), AppError> {
    let id = state
        .room
        .post_message(&user, &body.to, &body.text, &body.kind)
        .await
        .map_err(|e| match e {
            // Unknown sender or receiver is an unprocessable message, not a missing resource
            RoomError::UnknownParticipant(name) => {
                let field = if name == user { "from" } else { "to" };
                AppError::Validation(vec![FieldError {
                    field: field.to_string(),
                    message: format!("participant '{}' is not in the room", name),
                }])
            }
            e => AppError::from(e),
        })?;

    Ok((StatusCode::CREATED, Json(MessageCreatedResponse::from(id))))
}
