//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod message;
pub mod participant;
pub mod status;

use crate::application::services::RoomError;
use crate::shared::error::{AppError, FieldError};

impl From<RoomError> for AppError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::InvalidName(msg) => AppError::Unprocessable(msg),
            RoomError::DuplicateName(name) => {
                AppError::Conflict(format!("Name '{}' is already in use", name))
            }
            RoomError::UnknownParticipant(name) => {
                AppError::NotFound(format!("Participant '{}' not found", name))
            }
            RoomError::Validation(violations) => {
                AppError::Validation(violations.into_iter().map(FieldError::from).collect())
            }
            RoomError::StoreUnavailable(e) => AppError::Store(e),
        }
    }
}
