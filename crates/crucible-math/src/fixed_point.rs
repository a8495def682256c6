//! # Fixed-Point Operations
//!
//! `scale`, `mul_div`, and `min_out` over `U256` amounts. All division is
//! truncating (floor); all overflow is detected and surfaced as
//! [`MathError::Overflow`].

use crate::errors::MathError;
use crate::slippage::{Ppm, PPM_DENOMINATOR};
use primitive_types::{U256, U512};

/// `10^exp`, or `Overflow` when the power does not fit in 256 bits.
pub fn pow_10(exp: u8) -> Result<U256, MathError> {
    U256::from(10u64)
        .checked_pow(U256::from(exp))
        .ok_or(MathError::Overflow)
}

/// Re-scale `amount` from `from_decimals` to `to_decimals`.
///
/// Widening multiplies by a power of ten and can overflow; narrowing
/// truncates (floor), losing sub-unit precision irrecoverably.
pub fn scale(amount: U256, from_decimals: u8, to_decimals: u8) -> Result<U256, MathError> {
    if to_decimals >= from_decimals {
        let factor = pow_10(to_decimals - from_decimals)?;
        amount.checked_mul(factor).ok_or(MathError::Overflow)
    } else {
        let factor = pow_10(from_decimals - to_decimals)?;
        // factor is a nonzero power of ten
        Ok(amount / factor)
    }
}

/// `floor(a * b / denominator)` with a 512-bit intermediate product.
///
/// Fails with `Overflow` when the quotient does not fit in 256 bits and
/// with `DivisionByZero` when `denominator == 0`. Callers must propagate
/// both, never catch-and-zero.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let wide: U512 = a.full_mul(b);
    let quotient = wide / U512::from(denominator);
    U256::try_from(quotient).map_err(|_| MathError::Overflow)
}

/// `ceil(a * b / denominator)` with a 512-bit intermediate product.
///
/// The rounding-up counterpart of [`mul_div`], for quantities the user
/// must supply (e.g. required collateral cover): rounding those up biases
/// the error toward protocol safety.
pub fn mul_div_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let wide: U512 = a.full_mul(b);
    let denom = U512::from(denominator);
    let mut quotient = wide / denom;
    if wide % denom != U512::zero() {
        quotient += U512::one();
    }
    U256::try_from(quotient).map_err(|_| MathError::Overflow)
}

/// Minimum acceptable output after applying a slippage tolerance:
/// `amount - floor(amount * ppm / 1_000_000)`.
///
/// Floor rounding on the deducted portion keeps the bound conservative
/// (the deduction is never understated by more than one unit, and the
/// bound never exceeds `amount`).
pub fn min_out(amount: U256, slippage: Ppm) -> Result<U256, MathError> {
    let deduction = mul_div(
        amount,
        U256::from(slippage.value()),
        U256::from(PPM_DENOMINATOR),
    )?;
    // deduction <= amount because slippage <= PPM_DENOMINATOR
    Ok(amount - deduction)
}
