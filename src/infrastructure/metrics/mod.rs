//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Active participant gauge
//! - Appended messages by kind
//! - Participants evicted by the presence sweeper
//! - Per-participant sweep failures

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Participants currently in the room
pub static PARTICIPANTS_ACTIVE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::with_opts(
        Opts::new("participants_active", "Number of participants in the room")
            .namespace("chat_room"),
    )
    .expect("Failed to create PARTICIPANTS_ACTIVE metric")
});

/// Messages appended, by kind
pub static MESSAGES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("messages_total", "Total number of appended messages").namespace("chat_room"),
        &["kind"], // "message", "private_message", "status"
    )
    .expect("Failed to create MESSAGES_TOTAL metric")
});

/// Participants removed for inactivity
pub static PARTICIPANTS_SWEPT_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new(
            "participants_swept_total",
            "Total number of participants evicted for inactivity",
        )
        .namespace("chat_room"),
    )
    .expect("Failed to create PARTICIPANTS_SWEPT_TOTAL metric")
});

/// Evictions that failed and were left for the next sweep
pub static SWEEP_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("sweep_failures_total", "Total number of failed evictions")
            .namespace("chat_room"),
    )
    .expect("Failed to create SWEEP_FAILURES_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(PARTICIPANTS_ACTIVE.clone()))
        .expect("Failed to register PARTICIPANTS_ACTIVE");
    registry
        .register(Box::new(MESSAGES_TOTAL.clone()))
        .expect("Failed to register MESSAGES_TOTAL");
    registry
        .register(Box::new(PARTICIPANTS_SWEPT_TOTAL.clone()))
        .expect("Failed to register PARTICIPANTS_SWEPT_TOTAL");
    registry
        .register(Box::new(SWEEP_FAILURES_TOTAL.clone()))
        .expect("Failed to register SWEEP_FAILURES_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Helper to update the active participant gauge
pub fn set_participants_active(count: usize) {
    PARTICIPANTS_ACTIVE.set(count as i64);
}

/// Helper to record an appended message
pub fn record_message(kind: &str) {
    MESSAGES_TOTAL.with_label_values(&[kind]).inc();
}

/// Helper to record the outcome of a sweep
pub fn record_sweep(removed: usize, failed: usize) {
    PARTICIPANTS_SWEPT_TOTAL.inc_by(removed as u64);
    SWEEP_FAILURES_TOTAL.inc_by(failed as u64);
}
