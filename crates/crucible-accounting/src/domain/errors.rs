//! # Accounting Errors
//!
//! All variants are fatal to the computation that raised them and must be
//! propagated to the caller. Clamping or zeroing here could understate the
//! collateral a position requires.

use crucible_math::MathError;
use thiserror::Error;

/// Vault accounting error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccountingError {
    /// Underlying fixed-point arithmetic failed.
    #[error(transparent)]
    Math(#[from] MathError),

    /// The adapter reported a zero yield-token price.
    ///
    /// A zero price makes underlying→yield conversion undefined; it means
    /// the snapshot is unusable, not that the amount is zero.
    #[error("yield token price is zero")]
    DivisionByZeroPrice,

    /// The vault has outstanding shares but no unrealized active balance.
    ///
    /// An inconsistent on-chain state: shares claim a balance that does not
    /// exist. Surfaced, never silently treated as an empty vault.
    #[error("vault has {total_shares} shares but zero active balance")]
    DivisionByZeroBalance {
        /// Outstanding shares at the time of the read.
        total_shares: primitive_types::U256,
    },
}
