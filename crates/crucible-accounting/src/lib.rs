//! # Crucible Vault Accounting Engine
//!
//! Pure, stateless conversions between a vault's three units: internal
//! **shares**, the **yield token**, and the **underlying** asset, with
//! unrealized ("harvestable") yield accounted for.
//!
//! ## Purpose
//!
//! Every conversion is a pure function of a [`VaultSnapshot`] — a
//! point-in-time read of the vault's parameters and yield-token price. No
//! function here performs I/O; callers fetch a fresh snapshot before any
//! solvency-affecting decision and pass it in.
//!
//! ## Rounding
//!
//! All conversions floor. `shares_to_yield` and `yield_to_shares` are
//! therefore not exact inverses: a round trip may lose up to one unit per
//! direction. This mirrors on-chain truncation and is asserted in tests
//! rather than "fixed".
//!
//! ## Module Structure
//!
//! ```text
//! crucible-accounting/
//! ├── domain/
//! │   ├── snapshot.rs      # YieldTokenParams, TokenAdapter, VaultSnapshot
//! │   ├── conversions.rs   # the six conversions + unrealized balance
//! │   └── errors.rs        # AccountingError
//! └── display.rs           # lossy f64 helpers, display only
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod display;
pub mod domain;

pub use domain::errors::AccountingError;
pub use domain::snapshot::{TokenAdapter, VaultSnapshot, YieldTokenParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
