//! The event dispatch loop.

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

use glimmer_bus::{ResourceEvent, WatchHub};
use glimmer_core::{Controller, ControllerError};

/// Errors that terminate the dispatch loop.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An event handler hit an unrecoverable invariant violation.
    #[error("event handling failed: {0}")]
    Controller(#[from] ControllerError),
}

/// Consume events one at a time until shutdown.
///
/// Subscribes first, then replays the hub's current snapshot through the
/// add path so the display reflects initial state; events that arrive
/// during the replay are buffered by the subscription and processed
/// afterwards, never lost. Each event runs its full handle-then-render
/// cycle before the next is admitted.
///
/// Returns when the shutdown channel flips (or its sender drops), when
/// the hub is dropped, or with an error on the first fatal handling
/// failure; the caller is expected to stop the process in that case.
pub async fn run(
    controller: &Controller,
    hub: &WatchHub,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), DispatchError> {
    let mut subscription = hub.subscribe();

    for snapshot in hub.known() {
        controller.handle_added(&snapshot)?;
    }
    info!(
        tracked = controller.tracked_count(),
        "Initial snapshot replayed"
    );

    loop {
        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
            event = subscription.recv() => {
                let Some(event) = event else {
                    info!("Watch hub closed, stopping dispatch");
                    return Ok(());
                };
                debug!(kind = event.kind(), "Dispatching event");
                handle_event(controller, event)?;
            }
        }
    }
    info!("Dispatch loop stopped");
    Ok(())
}

fn handle_event(controller: &Controller, event: ResourceEvent) -> Result<(), ControllerError> {
    match event {
        ResourceEvent::Added(snapshot) => controller.handle_added(&snapshot),
        ResourceEvent::Updated { old, new } => controller.handle_updated(&old, &new),
        ResourceEvent::Deleted(snapshot) => controller.handle_removed(&snapshot),
    }
}
