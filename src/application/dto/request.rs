//! Request DTOs
//!
//! Data structures for API request bodies and query strings.
//! Missing fields deserialize as empty strings so that the room can report
//! every violation at once.

use serde::Deserialize;

/// Participant registration request
#[derive(Debug, Deserialize)]
pub struct RegisterParticipantRequest {
    #[serde(default)]
    pub name: String,
}

/// Post message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub to: String,

    #[serde(default)]
    pub text: String,

    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Message list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct MessageQueryParams {
    pub limit: Option<String>,
}

impl MessageQueryParams {
    /// Positive numeric limit, if any. Zero, negative or non-numeric means no limit.
    pub fn limit(&self) -> Option<usize> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit > 0)
            .map(|limit| limit as usize)
    }
}
