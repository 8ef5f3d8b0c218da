//! Message entity and repository trait.
//!
//! Maps to the `messages` collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::StoreError;

/// Reserved pseudo-recipient meaning "all current participants".
///
/// Never a valid participant name.
pub const BROADCAST_TARGET: &str = "Todos";

/// Identifier assigned to every appended message (time-ordered UUID v7).
pub type MessageId = Uuid;

/// Message kinds as they appear on the wire.
///
/// - `message`: public, visible to everyone
/// - `private_message`: visible to sender and receiver only
/// - `status`: system-generated join/leave notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "message")]
    Public,
    #[serde(rename = "private_message")]
    Private,
    #[serde(rename = "status")]
    Status,
}

impl MessageKind {
    /// Parse the wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "message" => Some(Self::Public),
            "private_message" => Some(Self::Private),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "message",
            Self::Private => "private_message",
            Self::Status => "status",
        }
    }

    /// Whether this kind is generated by the room rather than posted by participants.
    pub fn is_system(&self) -> bool {
        matches!(self, Self::Status)
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable message record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Time-ordered identifier
    pub id: MessageId,

    /// Sender name (participants may leave after sending)
    pub from: String,

    /// Receiver name or [`BROADCAST_TARGET`]
    pub to: String,

    pub text: String,

    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Local time of day the message was appended (`HH:MM:SS`)
    pub time: String,
}

impl Message {
    /// Build a new message with a fresh identifier.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            from: from.into(),
            to: to.into(),
            text: text.into(),
            kind,
            time: time.into(),
        }
    }

    /// System notice about `name`, addressed to everyone.
    pub fn status(name: impl Into<String>, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(name, BROADCAST_TARGET, text, MessageKind::Status, time)
    }

    /// Whether the message is addressed to the whole room.
    pub fn is_broadcast(&self) -> bool {
        self.to == BROADCAST_TARGET
    }
}

/// Repository trait for the append-only `messages` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message record.
    async fn insert(&self, message: &Message) -> Result<(), StoreError>;

    /// Load every message in insertion order.
    async fn find_all(&self) -> Result<Vec<Message>, StoreError>;
}
