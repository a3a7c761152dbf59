//! The watch hub: authoritative snapshot store plus event fan-out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use tokio::sync::broadcast;
use tracing::{debug, warn};

use glimmer_core::ResourceSnapshot;

use crate::events::ResourceEvent;
use crate::subscription::{WatchStream, WatchSubscription};
use crate::DEFAULT_CHANNEL_CAPACITY;

/// In-memory resource watch hub.
///
/// Holds the current snapshot of every known resource (in first-seen
/// order) and broadcasts change events to all subscriptions. Feeding is
/// diff-based: `apply` publishes `Added` for unknown resources, `Updated`
/// only when the snapshot actually changed, and nothing for identical
/// redeliveries. The exception is `resync`, which deliberately redelivers
/// `Added` for everything as the self-healing sweep.
///
/// Suitable for single-process operation; a deployment watching a real
/// cluster would feed this hub from its informer callbacks.
pub struct WatchHub {
    /// Broadcast sender for change events.
    sender: broadcast::Sender<ResourceEvent>,

    /// Known snapshots in first-seen order, identity = `namespace`+`name`.
    known: RwLock<Vec<ResourceSnapshot>>,

    /// Total events published.
    events_published: AtomicU64,

    /// Channel capacity.
    capacity: usize,
}

impl WatchHub {
    /// Create a hub with default per-subscriber capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a hub with the given per-subscriber capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            known: RwLock::new(Vec::new()),
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to all change events from this point on.
    ///
    /// Subscribers that need the resources known before subscription
    /// replay `known()` first, then consume events.
    #[must_use]
    pub fn subscribe(&self) -> WatchSubscription {
        debug!("New watch subscription created");
        WatchSubscription::new(self.sender.subscribe())
    }

    /// Subscribe as a `tokio_stream::Stream`.
    #[must_use]
    pub fn watch_stream(&self) -> WatchStream {
        WatchStream::new(self.subscribe())
    }

    /// Feed one snapshot into the hub.
    ///
    /// Publishes `Added` for an unknown resource, `Updated` when the
    /// stored snapshot differs, and nothing when it is identical.
    /// Returns `true` when an event was published.
    pub fn apply(&self, snapshot: ResourceSnapshot) -> bool {
        let event = {
            let mut known = self.known.write().unwrap_or_else(PoisonError::into_inner);
            let existing = known
                .iter()
                .position(|s| s.namespace == snapshot.namespace && s.name == snapshot.name);
            match existing {
                Some(index) => {
                    if known[index] == snapshot {
                        return false;
                    }
                    let old = std::mem::replace(&mut known[index], snapshot.clone());
                    ResourceEvent::Updated { old, new: snapshot }
                }
                None => {
                    known.push(snapshot.clone());
                    ResourceEvent::Added(snapshot)
                }
            }
        };
        self.publish(event);
        true
    }

    /// Drop a resource from the hub and publish its `Deleted` event.
    ///
    /// Returns the last known snapshot, or `None` for an unknown
    /// resource (nothing is published in that case).
    pub fn retire(&self, namespace: &str, name: &str) -> Option<ResourceSnapshot> {
        let snapshot = {
            let mut known = self.known.write().unwrap_or_else(PoisonError::into_inner);
            let index = known
                .iter()
                .position(|s| s.namespace == namespace && s.name == name)?;
            known.remove(index)
        };
        self.publish(ResourceEvent::Deleted(snapshot.clone()));
        Some(snapshot)
    }

    /// Redeliver `Added` for every known resource.
    ///
    /// This is the self-healing sweep: consumers that missed an event
    /// converge on the authoritative state, and consumers already in sync
    /// see only no-ops. Returns the number of redelivered events.
    pub fn resync(&self) -> usize {
        let snapshots = self.known();
        for snapshot in &snapshots {
            self.publish(ResourceEvent::Added(snapshot.clone()));
        }
        debug!(redelivered = snapshots.len(), "Resync sweep published");
        snapshots.len()
    }

    /// Current snapshots in first-seen order.
    #[must_use]
    pub fn known(&self) -> Vec<ResourceSnapshot> {
        self.known
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events published since creation.
    #[must_use]
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn publish(&self, event: ResourceEvent) {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        let kind = event.kind();
        let key = format!("{}/{}", event.snapshot().namespace, event.snapshot().name);
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(kind, key = %key, receivers, "Event published");
            }
            Err(_) => {
                // No receivers; the next resync redelivers current state.
                warn!(kind, key = %key, "Event dropped (no receivers)");
            }
        }
    }
}

impl Default for WatchHub {
    fn default() -> Self {
        Self::new()
    }
}
