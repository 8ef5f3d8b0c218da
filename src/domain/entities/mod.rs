//! # Domain Entities
//!
//! Core records held by the chat room.
//!
//! - **Participant**: a named identity present in the room, with a last-seen time
//! - **Message**: an immutable public, private or status message
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait describing the persistence
//! collaborator. Implementations live in the infrastructure layer.

mod message;
mod participant;

pub use message::{Message, MessageId, MessageKind, MessageRepository, BROADCAST_TARGET};
pub use participant::{Participant, ParticipantRepository};

#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use participant::MockParticipantRepository;
