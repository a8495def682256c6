//! # Slippage Unit
//!
//! The `Ppm` newtype fixes the slippage denominator at parts-per-million.
//! Historical call sites disagreed about whether a "slippage percentage"
//! integer was denominated in 10^4 or 10^7; a unit type makes the
//! disagreement unrepresentable.

use crate::errors::MathError;
use serde::{Deserialize, Serialize};

/// Parts-per-million denominator.
pub const PPM_DENOMINATOR: u64 = 1_000_000;

/// A slippage tolerance in parts per million (denominator 1_000_000).
///
/// 1 bps = 100 ppm; 1% = 10_000 ppm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ppm(u32);

impl Ppm {
    /// Zero slippage.
    pub const ZERO: Ppm = Ppm(0);

    /// Create from a raw parts-per-million value.
    pub fn new(ppm: u32) -> Result<Self, MathError> {
        if u64::from(ppm) > PPM_DENOMINATOR {
            return Err(MathError::SlippageOutOfRange { ppm: ppm.into() });
        }
        Ok(Self(ppm))
    }

    /// Create from basis points (1 bps = 100 ppm).
    pub fn from_bps(bps: u32) -> Result<Self, MathError> {
        let ppm = u64::from(bps) * 100;
        if ppm > PPM_DENOMINATOR {
            return Err(MathError::SlippageOutOfRange { ppm });
        }
        Ok(Self(ppm as u32))
    }

    /// Raw parts-per-million value.
    pub fn value(&self) -> u32 {
        self.0
    }
}
