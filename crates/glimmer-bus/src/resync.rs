//! The periodic resync sweep.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::hub::WatchHub;

/// Redeliver the hub's known state every `period` until shutdown.
///
/// The first sweep fires one full period after start; subscribers get
/// their initial state from `WatchHub::known`, not from this task. Runs
/// until the shutdown channel flips to `true` or its sender is dropped.
pub async fn run_resync(hub: Arc<WatchHub>, period: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // interval() fires immediately; consume that tick so sweeps are periodic.
    ticker.tick().await;

    info!(period_secs = period.as_secs(), "Resync task started");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let redelivered = hub.resync();
                debug!(redelivered, "Resync sweep complete");
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
    info!("Resync task stopped");
}
