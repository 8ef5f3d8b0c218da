//! Infrastructure Layer
//!
//! Contains implementations for external collaborators:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations (PostgreSQL and in-memory)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
