//! # Adapters
//!
//! In-memory implementations of the display port: `NullStrip` for
//! headless operation and `RecordingStrip` for asserting on rendered
//! frames in tests.

pub mod memory;

pub use memory::{NullStrip, RecordingStrip, StripOp};
