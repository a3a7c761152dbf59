//! # Service Layer
//!
//! The lock-guarded controller and the render pass it drives. Both run
//! under one mutual-exclusion boundary: an event mutates the tracker and
//! re-renders before the next event is admitted.

pub mod controller;
pub mod sync;

pub use controller::{Controller, ControllerError, SHUTDOWN_COLOR};
pub use sync::{sync_display, FLASH_CYCLES, FLASH_INTERVAL};
