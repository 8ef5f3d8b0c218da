//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod clock;
pub mod error;
