//! Presence Sweeper
//!
//! Background task that periodically evicts inactive participants.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::chat_room::{ChatRoom, SweepReport};
use crate::config::PresenceSettings;

/// Periodic inactivity sweep over a [`ChatRoom`].
///
/// The sweeper goes through the room's public API and therefore takes the
/// same lock as request handlers.
pub struct PresenceSweeper {
    room: Arc<ChatRoom>,
    period: Duration,
    threshold: chrono::Duration,
}

impl PresenceSweeper {
    pub fn new(room: Arc<ChatRoom>, settings: &PresenceSettings) -> Self {
        Self {
            room,
            period: settings.sweep_interval(),
            threshold: settings.inactivity_threshold(),
        }
    }

    /// Run a single sweep immediately.
    pub async fn run_once(&self) -> SweepReport {
        let report = self.room.sweep(self.threshold).await;

        if !report.is_empty() {
            tracing::info!(
                removed = report.removed.len(),
                failed = report.failed.len(),
                "Presence sweep finished"
            );
        }

        report
    }

    /// Spawn the sweep loop. The first sweep runs one period after spawning.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await; // Skip first immediate tick

            tracing::info!(
                period_secs = self.period.as_secs(),
                threshold_secs = self.threshold.num_seconds(),
                "Presence sweeper started"
            );

            loop {
                ticker.tick().await;
                self.run_once().await;
            }
        })
    }
}
