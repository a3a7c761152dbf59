//! # Glimmer Core - Resource Tracker & Display Synchronizer
//!
//! This crate holds the heart of the Glimmer controller: an ordered,
//! in-memory collection of tracked resources and the logic that projects
//! that collection onto a fixed eight-slot display.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Pure tracker state machine (records, transitions,
//!   slot assignment) with no I/O.
//! - **Ports Layer:** The `DisplayStrip` capability the host must provide,
//!   plus the caller-supplied key/color classification functions.
//! - **Service Layer:** The lock-guarded `Controller` that serializes event
//!   handling with rendering.
//! - **Adapters Layer:** In-memory strips (`NullStrip`, `RecordingStrip`)
//!   for tests and headless operation.
//!
//! ## Display policy
//!
//! A resource's visual position is a function of when it was first observed
//! relative to its currently-tracked peers, not a fixed per-key assignment.
//! Removals compact positions, so surviving resources appear to shift left.
//! Resources beyond the eighth position are tracked but not rendered until
//! a slot frees up.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Domain types
pub use domain::{
    Color, Observation, ResourceKey, ResourceRecord, ResourceSnapshot, ResourceState, Tracker,
};

// Domain errors
pub use domain::{ColorParseError, KeyError, TrackerError};

// Port traits and types
pub use ports::{DisplayError, DisplayStrip, Frame, SlotState, SLOT_COUNT};
pub use ports::{derive_key, ColorFn, KeyFn};

// Service
pub use service::{
    sync_display, Controller, ControllerError, FLASH_CYCLES, FLASH_INTERVAL, SHUTDOWN_COLOR,
};

// Adapters
pub use adapters::{NullStrip, RecordingStrip, StripOp};
