//! # Arithmetic Errors
//!
//! Failures here are fatal to the computation that raised them. Callers
//! must propagate, never clamp: a silently zeroed intermediate could
//! understate required collateral.

use thiserror::Error;

/// Fixed-point arithmetic error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    /// Intermediate or final value does not fit in 256 bits.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// Slippage outside the representable [0, 1_000_000] ppm range.
    #[error("slippage out of range: {ppm} ppm")]
    SlippageOutOfRange {
        /// The rejected parts-per-million value.
        ppm: u64,
    },
}
