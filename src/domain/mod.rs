//! # Domain Layer
//!
//! The domain layer contains the core rules of the chat room.
//! It is independent of any HTTP or storage concerns.
//!
//! ## Structure
//!
//! - **entities**: Participant and Message records plus repository traits
//! - **services**: Directory, message log, visibility filter and validation
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define the persistence contract
//! - Everything here is synchronous and deterministic given a timestamp

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
