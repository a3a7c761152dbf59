//! Resource change events delivered over the hub.

use glimmer_core::ResourceSnapshot;
use serde::{Deserialize, Serialize};

/// One change notification, carrying enough data to derive a key and
/// classify a color downstream.
///
/// `Added` is also redelivered by every resync sweep for every known
/// resource; consumers treat a redelivery with unchanged content as a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceEvent {
    /// A resource appeared (or was redelivered by a resync sweep).
    Added(ResourceSnapshot),
    /// A resource changed; both the previous and the current snapshot
    /// are delivered.
    Updated {
        old: ResourceSnapshot,
        new: ResourceSnapshot,
    },
    /// A resource is gone; the last known snapshot is delivered.
    Deleted(ResourceSnapshot),
}

impl ResourceEvent {
    /// Short label for log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Updated { .. } => "updated",
            Self::Deleted(_) => "deleted",
        }
    }

    /// The most recent snapshot carried by this event.
    #[must_use]
    pub const fn snapshot(&self) -> &ResourceSnapshot {
        match self {
            Self::Added(snapshot) | Self::Deleted(snapshot) => snapshot,
            Self::Updated { new, .. } => new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        let snapshot = ResourceSnapshot::new("default", "web-0");
        assert_eq!(ResourceEvent::Added(snapshot.clone()).kind(), "added");
        assert_eq!(
            ResourceEvent::Updated {
                old: snapshot.clone(),
                new: snapshot.clone(),
            }
            .kind(),
            "updated"
        );
        assert_eq!(ResourceEvent::Deleted(snapshot).kind(), "deleted");
    }

    #[test]
    fn test_updated_exposes_new_snapshot() {
        let old = ResourceSnapshot::new("default", "web-0");
        let new = old.clone().with_attribute("phase", "Running");
        let event = ResourceEvent::Updated {
            old,
            new: new.clone(),
        };
        assert_eq!(event.snapshot(), &new);
    }
}
