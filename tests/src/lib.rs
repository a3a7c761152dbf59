//! # Glimmer Test Suite
//!
//! Unified test crate for scenarios spanning more than one workspace
//! member.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs    # Controller + strip rendering scenarios
//!     └── watch_flow.rs   # Hub → subscription → controller flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p glimmer-tests
//!
//! # By category
//! cargo test -p glimmer-tests integration::lifecycle
//! cargo test -p glimmer-tests integration::watch_flow
//! ```

pub mod integration;
