//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Message, MessageId, Participant};

/// Participant response
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub name: String,
    /// Last-seen time in Unix milliseconds
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name,
            last_status: participant.last_seen.timestamp_millis(),
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            from: message.from,
            to: message.to,
            text: message.text,
            kind: message.kind.as_str().to_string(),
            time: message.time,
        }
    }
}

/// Returned after a message is appended
#[derive(Debug, Serialize)]
pub struct MessageCreatedResponse {
    pub id: String,
}

impl From<MessageId> for MessageCreatedResponse {
    fn from(id: MessageId) -> Self {
        Self { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageKind;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_participant_response_shape() {
        let participant = Participant::new("Ana", DateTime::<Utc>::UNIX_EPOCH);
        let json = serde_json::to_value(ParticipantResponse::from(participant)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ana", "lastStatus": 0}));
    }

    #[test]
    fn test_message_response_shape() {
        let message = Message::new("Ana", "Bia", "oi", MessageKind::Private, "08:30:00");
        let id = message.id.to_string();
        let json = serde_json::to_value(MessageResponse::from(message)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": id,
                "from": "Ana",
                "to": "Bia",
                "text": "oi",
                "type": "private_message",
                "time": "08:30:00",
            })
        );
    }
}
