//! # Limit Errors
//!
//! Arithmetic and accounting failures propagate transparently: a limit
//! computed over a failed conversion must not exist at all, since a
//! clamped or zeroed limit could let a position go undercollateralized.

use crucible_accounting::AccountingError;
use crucible_math::MathError;
use thiserror::Error;

/// Position limit computation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LimitError {
    /// A vault conversion failed.
    #[error(transparent)]
    Accounting(#[from] AccountingError),

    /// A fixed-point operation failed.
    #[error(transparent)]
    Math(#[from] MathError),
}
