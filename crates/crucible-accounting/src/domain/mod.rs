//! # Accounting Domain
//!
//! Snapshot types and the pure conversion functions over them.

pub mod conversions;
pub mod errors;
pub mod snapshot;
