//! Chat Room Service
//!
//! Owns the participant directory and the message log behind a single lock
//! and writes every change through to the persistence collaborator.
//!
//! Every mutation holds the write lock for its whole duration, including the
//! store write, so readers never observe a half-applied operation and a failed
//! store write leaves the in-memory state untouched.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;

use crate::domain::{
    validate_message, validate_name, Message, MessageDraft, MessageId, MessageLog,
    MessageRepository, Participant, ParticipantDirectory, ParticipantRepository, Violation,
};
use crate::infrastructure::metrics;
use crate::shared::clock::{time_of_day, Clock};
use crate::shared::error::StoreError;

/// Text of the notice appended when a participant registers
pub const ARRIVAL_NOTICE: &str = "entered the room...";

/// Text of the notice appended when a participant is evicted
pub const DEPARTURE_NOTICE: &str = "left the room...";

/// Chat room errors
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Name already in use: {0}")]
    DuplicateName(String),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("Validation failed: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Outcome of one presence sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Participants evicted in this sweep
    pub removed: Vec<String>,
    /// Stale participants whose eviction failed; retried on the next sweep
    pub failed: Vec<String>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.failed.is_empty()
    }
}

/// Point-in-time room counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStats {
    pub participants: usize,
    pub messages: usize,
}

#[derive(Debug, Default)]
struct RoomState {
    directory: ParticipantDirectory,
    log: MessageLog,
}

/// The single owner of room state.
pub struct ChatRoom {
    state: RwLock<RoomState>,
    participant_repo: Arc<dyn ParticipantRepository>,
    message_repo: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl ChatRoom {
    /// Create an empty room.
    pub fn new(
        participant_repo: Arc<dyn ParticipantRepository>,
        message_repo: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: RwLock::new(RoomState::default()),
            participant_repo,
            message_repo,
            clock,
        }
    }

    /// Create a room populated from whatever the store already holds.
    pub async fn load(
        participant_repo: Arc<dyn ParticipantRepository>,
        message_repo: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RoomError> {
        let participants = participant_repo.find_all().await?;
        let messages = message_repo.find_all().await?;

        tracing::info!(
            participants = participants.len(),
            messages = messages.len(),
            "Room state loaded from store"
        );

        let state = RoomState {
            directory: ParticipantDirectory::from_participants(participants),
            log: MessageLog::from_messages(messages),
        };
        metrics::set_participants_active(state.directory.len());

        Ok(Self {
            state: RwLock::new(state),
            participant_repo,
            message_repo,
            clock,
        })
    }

    /// Register a new participant and announce the arrival.
    pub async fn register(&self, raw_name: &str) -> Result<Participant, RoomError> {
        let name = validate_name(raw_name).map_err(|v| RoomError::InvalidName(v.message))?;

        let mut state = self.state.write().await;
        if state.directory.exists(&name) {
            return Err(RoomError::DuplicateName(name));
        }

        let now = self.clock.now();
        let participant = Participant::new(name.clone(), now);
        let notice = Message::status(name.as_str(), ARRIVAL_NOTICE, time_of_day(now));

        self.participant_repo.insert(&participant).await?;
        if let Err(e) = self.message_repo.insert(&notice).await {
            // Undo the participant insert so the store matches memory.
            if let Err(undo) = self.participant_repo.delete(&name).await {
                tracing::error!(name = %name, error = %undo, "Failed to roll back participant insert");
            }
            return Err(e.into());
        }

        state.directory.insert(participant.clone());
        self.record_appended(&mut state, notice);
        metrics::set_participants_active(state.directory.len());

        tracing::info!(name = %name, "Participant registered");
        Ok(participant)
    }

    /// Refresh a participant's last-seen time.
    pub async fn heartbeat(&self, name: &str) -> Result<(), RoomError> {
        let mut state = self.state.write().await;
        if !state.directory.exists(name) {
            return Err(RoomError::UnknownParticipant(name.to_string()));
        }

        let now = self.clock.now();
        self.participant_repo.update_last_seen(name, now).await?;
        state.directory.touch(name, now);

        tracing::debug!(name = %name, "Heartbeat");
        Ok(())
    }

    /// Participants in registration order.
    pub async fn participants(&self) -> Vec<Participant> {
        self.state.read().await.directory.list().to_vec()
    }

    /// Whether `name` is currently registered.
    pub async fn exists(&self, name: &str) -> bool {
        self.state.read().await.directory.exists(name)
    }

    /// Append a participant-authored public or private message.
    pub async fn post_message(
        &self,
        from: &str,
        to: &str,
        text: &str,
        kind: &str,
    ) -> Result<MessageId, RoomError> {
        let kind = validate_message(&MessageDraft { from, to, text, kind })
            .map_err(RoomError::Validation)?;

        let mut state = self.state.write().await;
        if !state.directory.exists(from) {
            return Err(RoomError::UnknownParticipant(from.to_string()));
        }

        let message = Message::new(from, to, text, kind, time_of_day(self.clock.now()));
        if !message.is_broadcast() && !state.directory.exists(&message.to) {
            return Err(RoomError::UnknownParticipant(message.to));
        }

        self.append(&mut state, message).await
    }

    /// Append a system status notice about `name`, addressed to everyone.
    ///
    /// No existence checks: the subject may already have left.
    pub async fn append_status(&self, name: &str, text: &str) -> Result<MessageId, RoomError> {
        let mut state = self.state.write().await;
        let message = Message::status(name, text, time_of_day(self.clock.now()));
        self.append(&mut state, message).await
    }

    /// Messages visible to `identity`, optionally only the last `limit` of them.
    pub async fn messages_visible_to(&self, identity: &str, limit: Option<usize>) -> Vec<Message> {
        self.state.read().await.log.visible_to(identity, limit)
    }

    /// Evict every participant idle for longer than `threshold`.
    ///
    /// Each eviction is handled on its own; a failure is logged and the
    /// remaining participants are still processed.
    pub async fn sweep(&self, threshold: Duration) -> SweepReport {
        let candidates = {
            let state = self.state.read().await;
            state.directory.stale(self.clock.now(), threshold)
        };

        let mut report = SweepReport::default();
        for name in candidates {
            match self.evict(&name, threshold).await {
                Ok(true) => report.removed.push(name),
                Ok(false) => {
                    tracing::debug!(name = %name, "Participant refreshed before eviction");
                }
                Err(e) => {
                    tracing::warn!(name = %name, error = %e, "Failed to evict stale participant");
                    report.failed.push(name);
                }
            }
        }

        metrics::record_sweep(report.removed.len(), report.failed.len());
        report
    }

    /// Current participant and message counts.
    pub async fn stats(&self) -> RoomStats {
        let state = self.state.read().await;
        RoomStats {
            participants: state.directory.len(),
            messages: state.log.len(),
        }
    }

    /// Check that the persistence collaborator is reachable.
    pub async fn ping_store(&self) -> Result<(), StoreError> {
        self.participant_repo.ping().await
    }

    /// Remove one stale participant and append the departure notice.
    ///
    /// Returns `Ok(false)` when the participant is gone or no longer stale.
    async fn evict(&self, name: &str, threshold: Duration) -> Result<bool, RoomError> {
        let mut state = self.state.write().await;
        let now = self.clock.now();

        match state.directory.get(name) {
            Some(participant) if participant.is_stale(now, threshold) => {}
            _ => return Ok(false),
        }

        self.participant_repo.delete(name).await?;
        state.directory.remove(name);
        metrics::set_participants_active(state.directory.len());

        let notice = Message::status(name, DEPARTURE_NOTICE, time_of_day(now));
        if let Err(e) = self.append(&mut state, notice).await {
            tracing::error!(name = %name, error = %e, "Participant evicted without departure notice");
        }

        tracing::info!(name = %name, "Participant evicted for inactivity");
        Ok(true)
    }

    async fn append(&self, state: &mut RoomState, message: Message) -> Result<MessageId, RoomError> {
        self.message_repo.insert(&message).await?;
        Ok(self.record_appended(state, message))
    }

    fn record_appended(&self, state: &mut RoomState, message: Message) -> MessageId {
        let id = message.id;
        metrics::record_message(message.kind.as_str());
        tracing::debug!(
            id = %id,
            from = %message.from,
            to = %message.to,
            kind = %message.kind,
            "Message appended"
        );
        state.log.push(message);
        id
    }
}
