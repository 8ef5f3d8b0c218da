//! # Domain Services
//!
//! Pure room logic that operates on domain entities without touching storage.
//!
//! ## Services
//!
//! - **ParticipantDirectory**: Registered participants and their last-seen times
//! - **MessageLog**: Append-only message sequence with filtered reads
//! - **Visibility**: Which messages an identity may read
//! - **Validation**: Name and message constraint checks

mod directory;
mod message_log;
mod validation;
mod visibility;

pub use directory::ParticipantDirectory;
pub use message_log::MessageLog;
pub use validation::{validate_message, validate_name, MessageDraft, Violation};
pub use visibility::is_visible;
