//! # Glimmer Runtime
//!
//! Process-level wiring for the Glimmer controller: configuration,
//! tracing setup, the event dispatch loop, the stdin resource feed, and
//! termination handling. The interesting logic lives in `glimmer-core`
//! (tracker + synchronizer) and `glimmer-bus` (watch hub); this crate
//! only assembles them.

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod ingest;
pub mod strip;

pub use classify::{classify_color, COLOR_ATTRIBUTE, DEFAULT_COLOR};
pub use config::{ConfigError, GlimmerConfig};
pub use dispatch::DispatchError;
pub use ingest::IngestCommand;
pub use strip::ConsoleStrip;
