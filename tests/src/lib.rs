//! # Crucible Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-crate flows: accounting -> limits -> orchestrator
//! │   └── flows.rs
//! │
//! └── properties/       # Randomized invariant checks
//!     ├── conversions.rs
//!     └── limits.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p crucible-tests
//!
//! # By category
//! cargo test -p crucible-tests integration::
//! cargo test -p crucible-tests properties::
//! ```

#![allow(dead_code)]
