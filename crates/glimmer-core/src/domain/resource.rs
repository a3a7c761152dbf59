//! Resource records and their state machine.

use super::color::Color;

/// Unique, stable identifier of a tracked resource.
///
/// Derived from the resource's composite identity upstream (typically
/// `namespace/name`). Unique within the tracker at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Transient rendering state of one record.
///
/// `Seen` and `Changed` render identically (flash, then steady set) and are
/// collapsed into one branch by the synchronizer; they stay distinct here so
/// logs can tell first sight from a recolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// First observation of this key; not yet rendered.
    Seen,
    /// Color changed since the last render.
    Changed,
    /// Upstream reported the key gone; deleted after one departure flash.
    Removed,
    /// Rendered and unchanged since.
    Steady,
}

impl ResourceState {
    /// States that warrant an attention flash on the next render.
    #[must_use]
    pub const fn is_dirty(self) -> bool {
        matches!(self, Self::Seen | Self::Changed)
    }
}

/// One tracked resource: its identity, last classified color, and state.
///
/// Position in the tracker's collection determines the display slot, so a
/// record carries no slot of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub key: ResourceKey,
    pub color: Color,
    pub state: ResourceState,
}

impl ResourceRecord {
    #[must_use]
    pub fn seen(key: ResourceKey, color: Color) -> Self {
        Self {
            key,
            color,
            state: ResourceState::Seen,
        }
    }
}
