//! # Chat Room Library
//!
//! This crate provides a small chat room backend with:
//! - Participant registration and heartbeats
//! - Public, private and status messages with per-identity visibility
//! - A background sweeper that evicts inactive participants
//! - In-memory or PostgreSQL persistence
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, directory, message log, visibility and validation
//! - **Application Layer**: The `ChatRoom` state owner, the presence sweeper and DTOs
//! - **Infrastructure Layer**: Repositories, database pool and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_room/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits and pure room logic
//! +-- application/    Room services and DTOs
//! +-- infrastructure/ Store implementations and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, clock)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core room rules
pub mod domain;

// Application layer - Room services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
