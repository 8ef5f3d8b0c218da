//! Application Services
//!
//! Services that coordinate domain operations with the persistence collaborator.
//!
//! ## Available Services
//!
//! - **ChatRoom**: Registration, heartbeats, posting and reading messages
//! - **PresenceSweeper**: Periodic eviction of inactive participants

pub mod chat_room;
pub mod presence_sweeper;

// Re-export chat room types
pub use chat_room::{ChatRoom, RoomError, RoomStats, SweepReport, ARRIVAL_NOTICE, DEPARTURE_NOTICE};

// Re-export sweeper
pub use presence_sweeper::PresenceSweeper;
