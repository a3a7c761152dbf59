//! # Driven Ports
//!
//! Interfaces this crate **requires** the host application to implement:
//! the display strip the frames land on, and the classification functions
//! that turn upstream objects into keys and colors.

pub mod classify;
pub mod display;

pub use classify::{derive_key, ColorFn, KeyFn};
pub use display::{DisplayError, DisplayStrip, Frame, SlotState, SLOT_COUNT};
