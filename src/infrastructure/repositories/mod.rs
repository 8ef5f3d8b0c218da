//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgParticipantRepository** / **PgMessageRepository** - PostgreSQL backed
//! - **InMemoryParticipantRepository** / **InMemoryMessageRepository** - process-local
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgMessageRepository, PgParticipantRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let participant_repo = PgParticipantRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool);
//! }
//! ```

pub mod memory_repository;
pub mod message_repository;
pub mod participant_repository;

pub use memory_repository::{InMemoryMessageRepository, InMemoryParticipantRepository};
pub use message_repository::PgMessageRepository;
pub use participant_repository::PgParticipantRepository;
