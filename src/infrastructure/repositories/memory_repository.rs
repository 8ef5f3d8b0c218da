//! In-Memory Repository Implementations
//!
//! Process-local storage for both collections. Used when no database is
//! configured and as the default backend in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{Message, MessageRepository, Participant, ParticipantRepository};
use crate::shared::error::StoreError;

/// In-memory participant store.
#[derive(Debug, Default)]
pub struct InMemoryParticipantRepository {
    participants: RwLock<Vec<Participant>>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn insert(&self, participant: &Participant) -> Result<(), StoreError> {
        self.participants.write().push(participant.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Participant>, StoreError> {
        Ok(self.participants.read().clone())
    }

    async fn update_last_seen(&self, name: &str, last_seen: DateTime<Utc>) -> Result<(), StoreError> {
        if let Some(participant) = self.participants.write().iter_mut().find(|p| p.name == name) {
            participant.last_seen = last_seen;
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.participants.write().retain(|p| p.name != name);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-memory message store.
#[derive(Debug, Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: &Message) -> Result<(), StoreError> {
        self.messages.write().push(message.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.messages.read().clone())
    }
}
