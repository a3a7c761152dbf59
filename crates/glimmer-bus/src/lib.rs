//! # Glimmer Bus - Resource Watch Hub
//!
//! The external event source the controller consumes: an in-memory hub
//! that holds the authoritative set of resource snapshots and broadcasts
//! typed change events to subscriptions.
//!
//! ```text
//! ┌──────────────┐                      ┌──────────────┐
//! │ Ingest feed  │                      │  Dispatcher  │
//! │              │     apply()          │              │
//! │              │ ───────┐             │              │
//! └──────────────┘        │             └──────────────┘
//!                         ▼                     ↑
//!                   ┌──────────────┐           │
//!                   │  Watch Hub   │ ──────────┘
//!                   │              │   subscribe()
//!                   └──────────────┘
//!                         │
//!                         └── resync sweep (periodic Added redelivery)
//! ```
//!
//! ## Delivery semantics
//!
//! Events fan out over a `tokio::sync::broadcast` channel. A subscriber
//! that falls behind skips the gap and keeps receiving; the periodic
//! resync sweep redelivers `Added` for every known resource, which is the
//! system's sole self-healing mechanism for missed events. The hub never
//! retries individual sends.

pub mod events;
pub mod hub;
pub mod resync;
pub mod subscription;

// Re-export main types
pub use events::ResourceEvent;
pub use hub::WatchHub;
pub use resync::run_resync;
pub use subscription::{WatchError, WatchStream, WatchSubscription};

/// Maximum events buffered per subscriber before older ones are skipped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
