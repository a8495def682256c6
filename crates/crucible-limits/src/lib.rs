//! # Crucible Position Limit Calculator
//!
//! Derives the maximum safe amount for every mutating action from a
//! position snapshot, honoring the invariant that
//! `debt * minimum_collateralization <= total_value` must still hold after
//! the action.
//!
//! ## Purpose
//!
//! All four operations (`available_credit`, `available_withdraw`,
//! `available_liquidate`, `migration_preview`) are pure and total except
//! for explicit typed failures; none performs I/O. Callers supply fresh
//! snapshots and re-derive limits after every confirmed transaction —
//! a limit computed from a stale snapshot is never retroactively
//! corrected.
//!
//! ## Module Structure
//!
//! ```text
//! crucible-limits/
//! └── domain/
//!     ├── position.rs    # Position, AlchemistState
//!     ├── limits.rs      # credit / withdraw / liquidate / deposit maxima
//!     ├── migration.rs   # migration preview with typed infeasibility
//!     ├── routes.rs      # WithdrawRoute resolution, capability query
//!     └── errors.rs      # LimitError
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::errors::LimitError;
pub use domain::limits::{
    available_credit, available_deposit, available_liquidate, available_withdraw, Withdrawable,
};
pub use domain::migration::{
    migration_preview, MigrationInfeasible, MigrationOutcome, MigrationPreview,
};
pub use domain::position::{AlchemistState, Position, COLLATERALIZATION_SCALE};
pub use domain::routes::{
    check_supported, resolve_withdraw_route, supported_actions, Unsupported, WithdrawRoute,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
