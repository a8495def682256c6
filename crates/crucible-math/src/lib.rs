//! # Crucible Fixed-Point Arithmetic
//!
//! Exact integer arithmetic on token amounts scaled by a per-token decimal
//! count.
//!
//! ## Contract
//!
//! No operation in this crate uses binary floating point. Every amount that
//! feeds a contract call or a solvency decision is a `U256` with an
//! associated decimal count; intermediate products are widened to `U512` so
//! overflow is detected, never wrapped or saturated.
//!
//! Rounding is always **down** (floor). The bias this introduces is toward
//! protocol safety: payouts are understated, required inputs are never
//! understated. Callers that need the opposite bias supply an explicit
//! safety margin.
//!
//! ## Module Structure
//!
//! ```text
//! crucible-math/
//! ├── fixed_point/     # scale, mul_div, min_out
//! ├── slippage/        # Ppm unit newtype
//! └── errors/          # MathError
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod fixed_point;
pub mod slippage;

pub use errors::MathError;
pub use fixed_point::{min_out, mul_div, mul_div_up, pow_10, scale};
pub use slippage::Ppm;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
