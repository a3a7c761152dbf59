//! The ordered collection of tracked resources.

use tracing::debug;

use super::color::Color;
use super::errors::TrackerError;
use super::resource::{ResourceKey, ResourceRecord, ResourceState};

/// Outcome of an observation, used by callers to decide whether a render
/// pass is warranted. `Unchanged` observations trigger no repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Observation {
    /// The key was unknown; a new record was appended in state `Seen`.
    Appended,
    /// The key was known and its color differed; recolored in place,
    /// state `Changed`.
    Recolored,
    /// The key was known with the same color; no state change.
    Unchanged,
}

/// Ordered, mutable collection of resource records.
///
/// Insertion order is semantically meaningful: the record at position `i`
/// maps to display slot `i`. Updates mutate records in place and never
/// reorder the collection; only the post-removal render compacts it.
///
/// Lookups are linear scans: cardinality is tens of resources, not
/// thousands, and order matters more than lookup speed.
///
/// The tracker owns its records exclusively. All access goes through the
/// controller's lock; the tracker itself carries no synchronization.
#[derive(Debug, Default)]
pub struct Tracker {
    records: Vec<ResourceRecord>,
}

impl Tracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation of `key` with its classified `color`.
    ///
    /// Unknown keys are appended in state `Seen`. Known keys are recolored
    /// in place and marked `Changed` when the color differs; a same-color
    /// observation leaves the record untouched.
    pub fn observe(&mut self, key: ResourceKey, color: Color) -> Observation {
        let Some(index) = self.position(&key) else {
            self.records.push(ResourceRecord::seen(key, color));
            return Observation::Appended;
        };
        let record = &mut self.records[index];
        if record.color == color {
            debug!(key = %key, "Observation matches tracked color, no-op");
            return Observation::Unchanged;
        }
        record.color = color;
        record.state = ResourceState::Changed;
        Observation::Recolored
    }

    /// Mark the record for `key` as removed.
    ///
    /// The record stays in place until the next render pass flashes its
    /// departure and deletes it. A miss is an invariant violation (the
    /// event source guarantees prior existence) and must be treated as
    /// fatal by the caller.
    pub fn mark_removed(&mut self, key: &ResourceKey) -> Result<(), TrackerError> {
        let record = self
            .record_mut(key)
            .ok_or_else(|| TrackerError::UntrackedKey(key.clone()))?;
        record.state = ResourceState::Removed;
        Ok(())
    }

    /// Look up a record by key.
    #[must_use]
    pub fn get(&self, key: &ResourceKey) -> Option<&ResourceRecord> {
        self.records.iter().find(|r| &r.key == key)
    }

    /// Current position of `key`, which is also its display slot while
    /// within the display's addressable range.
    #[must_use]
    pub fn position(&self, key: &ResourceKey) -> Option<usize> {
        self.records.iter().position(|r| &r.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.position(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The tracked records in display order.
    #[must_use]
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    fn record_mut(&mut self, key: &ResourceKey) -> Option<&mut ResourceRecord> {
        self.records.iter_mut().find(|r| &r.key == key)
    }

    pub(crate) fn record_at_mut(&mut self, index: usize) -> &mut ResourceRecord {
        &mut self.records[index]
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> ResourceRecord {
        self.records.remove(index)
    }
}
