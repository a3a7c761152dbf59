//! Pure tracker state: records, transitions, and the ordered collection.
//!
//! Nothing in this module performs I/O. Rendering happens in the service
//! layer through the `DisplayStrip` port.

pub mod color;
pub mod errors;
pub mod resource;
pub mod snapshot;
pub mod tracker;

pub use color::Color;
pub use errors::{ColorParseError, KeyError, TrackerError};
pub use resource::{ResourceKey, ResourceRecord, ResourceState};
pub use snapshot::ResourceSnapshot;
pub use tracker::{Observation, Tracker};
