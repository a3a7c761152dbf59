//! Caller-supplied classification of upstream objects.
//!
//! The tracker never interprets snapshots itself; the host injects the two
//! functions that turn a snapshot into a stable key and a display color.

use crate::domain::{Color, KeyError, ResourceKey, ResourceSnapshot};

/// Derives the stable unique key for a snapshot.
///
/// A failure is fatal to the controller: without unique keys the tracker
/// cannot function.
pub type KeyFn = Box<dyn Fn(&ResourceSnapshot) -> Result<ResourceKey, KeyError> + Send + Sync>;

/// Picks the display color for a snapshot. Infallible; classification
/// policies fall back to a default color rather than fail.
pub type ColorFn = Box<dyn Fn(&ResourceSnapshot) -> Color + Send + Sync>;

/// Default key derivation: `namespace/name`, or bare `name` for
/// cluster-scoped resources.
pub fn derive_key(snapshot: &ResourceSnapshot) -> Result<ResourceKey, KeyError> {
    if snapshot.name.is_empty() {
        return Err(KeyError::MissingName);
    }
    if snapshot.namespace.is_empty() {
        return Ok(ResourceKey::new(snapshot.name.clone()));
    }
    Ok(ResourceKey::new(format!(
        "{}/{}",
        snapshot.namespace, snapshot.name
    )))
}
