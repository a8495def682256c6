//! # Unit Conversions
//!
//! The six pure conversions between shares, yield tokens, and underlying,
//! plus the harvestable-yield adjustment they all depend on.
//!
//! ## Harvestable yield
//!
//! The vault's realized basis (`expected_value`) lags the market price of
//! the yield token. The delta is yield owed to depositors collectively but
//! not yet reflected in any individual's shares, so it is excluded from the
//! balance backing shares before conversion — otherwise a depositor would
//! double-count unharvested yield.

use super::errors::AccountingError;
use super::snapshot::VaultSnapshot;
use crucible_math::{mul_div, pow_10};
use primitive_types::U256;

impl VaultSnapshot {
    /// Convert a yield-token amount to underlying, floor.
    pub fn yield_to_underlying(&self, amount_yield: U256) -> Result<U256, AccountingError> {
        let one_yield = pow_10(self.yield_decimals())?;
        Ok(mul_div(amount_yield, self.adapter.price, one_yield)?)
    }

    /// Convert an underlying amount to yield tokens, floor.
    ///
    /// Fails with [`AccountingError::DivisionByZeroPrice`] when the adapter
    /// price is zero.
    pub fn underlying_to_yield(&self, amount_underlying: U256) -> Result<U256, AccountingError> {
        if self.adapter.price.is_zero() {
            return Err(AccountingError::DivisionByZeroPrice);
        }
        let one_yield = pow_10(self.yield_decimals())?;
        Ok(mul_div(amount_underlying, one_yield, self.adapter.price)?)
    }

    /// The active balance with unharvested gains stripped out.
    ///
    /// When the market value of `active_balance` exceeds `expected_value`,
    /// the excess is harvestable yield belonging to the protocol-wide
    /// harvest, not to current shares; it is deducted here. Floor rounding
    /// guarantees sub-unit gains leave the balance untouched, and a
    /// harvestable amount that truncates to zero yield tokens is treated as
    /// dust, not worth separating.
    pub fn unrealized_active_balance(&self) -> Result<U256, AccountingError> {
        let active = self.params.active_balance;
        if active.is_zero() {
            return Ok(U256::zero());
        }
        let current_value = self.yield_to_underlying(active)?;
        if current_value <= self.params.expected_value {
            return Ok(active);
        }
        let harvestable = self.underlying_to_yield(current_value - self.params.expected_value)?;
        if harvestable.is_zero() {
            return Ok(active);
        }
        Ok(active - harvestable)
    }

    /// Convert shares to yield tokens, floor.
    ///
    /// An empty vault (zero total shares) converts at identity, so the
    /// first depositor's math never divides by zero.
    pub fn shares_to_yield(&self, shares: U256) -> Result<U256, AccountingError> {
        if self.params.total_shares.is_zero() {
            return Ok(shares);
        }
        let balance = self.unrealized_active_balance()?;
        Ok(mul_div(shares, balance, self.params.total_shares)?)
    }

    /// Convert yield tokens to shares, floor.
    ///
    /// Identity for an empty vault. Fails with
    /// [`AccountingError::DivisionByZeroBalance`] when shares are
    /// outstanding against a zero unrealized balance — an inconsistent
    /// vault state that must be surfaced, never silently zeroed.
    pub fn yield_to_shares(&self, amount_yield: U256) -> Result<U256, AccountingError> {
        if self.params.total_shares.is_zero() {
            return Ok(amount_yield);
        }
        let balance = self.unrealized_active_balance()?;
        if balance.is_zero() {
            return Err(AccountingError::DivisionByZeroBalance {
                total_shares: self.params.total_shares,
            });
        }
        Ok(mul_div(amount_yield, self.params.total_shares, balance)?)
    }

    /// Convert shares to underlying, floor (composes the two hops).
    pub fn shares_to_underlying(&self, shares: U256) -> Result<U256, AccountingError> {
        let amount_yield = self.shares_to_yield(shares)?;
        self.yield_to_underlying(amount_yield)
    }

    /// Convert underlying to shares, floor (composes the two hops).
    pub fn underlying_to_shares(&self, amount_underlying: U256) -> Result<U256, AccountingError> {
        let amount_yield = self.underlying_to_yield(amount_underlying)?;
        self.yield_to_shares(amount_yield)
    }
}
