//! Participant Directory
//!
//! The set of participants currently in the room, kept in registration order.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::Participant;

/// Active participants keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct ParticipantDirectory {
    participants: Vec<Participant>,
}

impl ParticipantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a directory from stored records, dropping duplicate names.
    pub fn from_participants(participants: Vec<Participant>) -> Self {
        let mut directory = Self::new();
        for participant in participants {
            if !directory.insert(participant.clone()) {
                tracing::warn!(name = %participant.name, "Duplicate participant in store ignored");
            }
        }
        directory
    }

    pub fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Participants in registration order.
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Insert a participant. Returns `false` if the name is already taken.
    pub fn insert(&mut self, participant: Participant) -> bool {
        if self.exists(&participant.name) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Refresh a participant's last-seen time. Returns `false` if unknown.
    pub fn touch(&mut self, name: &str, now: DateTime<Utc>) -> bool {
        match self.participants.iter_mut().find(|p| p.name == name) {
            Some(participant) => {
                participant.touch(now);
                true
            }
            None => false,
        }
    }

    /// Remove a participant by name.
    pub fn remove(&mut self, name: &str) -> Option<Participant> {
        let index = self.participants.iter().position(|p| p.name == name)?;
        Some(self.participants.remove(index))
    }

    /// Names of participants not seen for longer than `threshold`.
    pub fn stale(&self, now: DateTime<Utc>, threshold: Duration) -> Vec<String> {
        self.participants
            .iter()
            .filter(|p| p.is_stale(now, threshold))
            .map(|p| p.name.clone())
            .collect()
    }
}
