//! Domain errors for the resource tracker.

use thiserror::Error;

use super::resource::ResourceKey;

/// Errors from tracker operations.
///
/// An `UntrackedKey` means the upstream event source referenced a key this
/// tracker has never seen. The source guarantees prior existence, so the
/// caller must treat this as fatal: continuing would leave the display
/// permanently desynchronized from ground truth.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("resource {0} is not tracked")]
    UntrackedKey(ResourceKey),
}

/// Errors deriving a stable key from an upstream object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The object carries no name; no unique identity can be formed.
    #[error("resource has no name, cannot derive a key")]
    MissingName,
}

/// Errors parsing a color descriptor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a six-digit hex triplet, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}
