//! Countdown ticker background task

use std::{sync::Arc, time::Duration};

use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task providing the one-second cadence for the countdown
/// engine. It sleeps on the snapshot channel until the countdown starts,
/// then ticks once per second until a snapshot arrives with the countdown
/// stopped again, so no tick fires after a stop request.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting countdown ticker task");

    let mut snapshots = state.subscribe();

    loop {
        // Wait for the countdown to start
        while !snapshots.borrow_and_update().running {
            if snapshots.changed().await.is_err() {
                debug!("Snapshot channel closed, stopping ticker task");
                return;
            }
        }

        debug!("Countdown started, beginning one-second ticks");

        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first interval tick completes immediately; swallow it so the
        // first decrement lands a full second after the start
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to advance countdown: {}", e);
                    }
                }

                changed = snapshots.changed() => {
                    if changed.is_err() {
                        debug!("Snapshot channel closed, stopping ticker task");
                        return;
                    }
                    if !snapshots.borrow_and_update().running {
                        debug!("Countdown stopped, pausing ticks");
                        break;
                    }
                }
            }
        }
    }
}
