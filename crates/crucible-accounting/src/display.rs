//! # Display Helpers
//!
//! Lossy `f64` renderings of exact amounts, for UI percentage/APY figures
//! only. Nothing returned from this module may feed a contract call or a
//! solvency decision.

use primitive_types::U256;

/// Lossy conversion of an exact amount to `f64` whole-token units.
pub fn to_f64_lossy(amount: U256, decimals: u8) -> f64 {
    let divisor = 10f64.powi(i32::from(decimals));
    u256_to_f64(amount) / divisor
}

/// A collateralization ratio as a display percentage (150.0 = 150%).
///
/// Returns `None` when debt is zero (infinite collateralization).
pub fn collateralization_percent(total_value: U256, debt: U256) -> Option<f64> {
    if debt.is_zero() {
        return None;
    }
    Some(u256_to_f64(total_value) / u256_to_f64(debt) * 100.0)
}

fn u256_to_f64(value: U256) -> f64 {
    // Walks the four 64-bit limbs; precision loss is acceptable here.
    let mut acc = 0f64;
    for limb in value.0.iter().rev() {
        acc = acc * 2f64.powi(64) + *limb as f64;
    }
    acc
}
