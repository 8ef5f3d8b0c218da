//! Participant entity and repository trait.
//!
//! Maps to the `participants` collection.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::StoreError;

/// A named identity currently present in the room.
///
/// Serialized as `{"name": ..., "lastStatus": <unix millis>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique, trimmed, non-empty display name
    pub name: String,

    /// Last time the participant registered or sent a heartbeat
    #[serde(rename = "lastStatus", with = "chrono::serde::ts_milliseconds")]
    pub last_seen: DateTime<Utc>,
}

impl Participant {
    /// Create a participant seen at `now`.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_seen: now,
        }
    }

    /// Refresh the last-seen timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }

    /// Whether more than `threshold` has elapsed since the participant was last seen.
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        now - self.last_seen > threshold
    }
}

/// Repository trait for the `participants` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Insert a new participant record.
    async fn insert(&self, participant: &Participant) -> Result<(), StoreError>;

    /// Load every participant in registration order.
    async fn find_all(&self) -> Result<Vec<Participant>, StoreError>;

    /// Update the last-seen timestamp of an existing participant.
    async fn update_last_seen(&self, name: &str, last_seen: DateTime<Utc>) -> Result<(), StoreError>;

    /// Delete a participant by name.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
