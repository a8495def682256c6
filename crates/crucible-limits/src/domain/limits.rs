//! # Limit Computations
//!
//! Maximum safe amounts for credit, withdraw, liquidate, and deposit.
//!
//! Required collateral cover rounds **up** (`mul_div_up`), everything paid
//! out to the user rounds down; both biases point toward protocol safety.

use super::errors::LimitError;
use super::position::{AlchemistState, Position, COLLATERALIZATION_SCALE};
use crucible_accounting::VaultSnapshot;
use crucible_math::{mul_div, mul_div_up, scale};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A withdraw limit expressed in every unit a caller needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawable {
    /// Limit in debt-token units.
    pub in_debt_units: U256,
    /// Limit in the vault's underlying token.
    pub underlying: U256,
    /// Limit in yield tokens.
    pub yield_tokens: U256,
    /// Limit in vault shares.
    pub shares: U256,
}

/// Debt-token amount still mintable against current collateral:
/// `total_value / minimum_collateralization - max(debt, 0)`, clamped to
/// zero.
pub fn available_credit(state: &AlchemistState) -> Result<U256, LimitError> {
    let capacity = mul_div(
        state.total_value,
        COLLATERALIZATION_SCALE,
        state.minimum_collateralization,
    )?;
    Ok(capacity.saturating_sub(state.debt.clamped()))
}

/// Maximum collateral withdrawable from one vault without breaching the
/// minimum collateralization.
///
/// When the *other* vaults' collateral already satisfies the required debt
/// cover, this vault's collateral is entirely free; otherwise the limit is
/// whatever cover exceeds the requirement. The debt-denominated limit is
/// converted back through the vault snapshot before returning.
pub fn available_withdraw(
    position: &Position,
    state: &AlchemistState,
    snapshot: &VaultSnapshot,
) -> Result<Withdrawable, LimitError> {
    let collateral_underlying = snapshot.shares_to_underlying(position.shares)?;
    let collateral_in_debt = scale(
        collateral_underlying,
        snapshot.underlying_decimals,
        state.debt_decimals,
    )?;

    let required_cover = mul_div_up(
        state.debt.clamped(),
        state.minimum_collateralization,
        COLLATERALIZATION_SCALE,
    )?;
    let max_withdraw_in_debt = state.total_value.saturating_sub(required_cover);
    let other_cover = state.total_value.saturating_sub(collateral_in_debt);

    let in_debt_units = if other_cover >= required_cover {
        collateral_in_debt
    } else {
        max_withdraw_in_debt.min(collateral_in_debt)
    };

    let underlying = scale(in_debt_units, state.debt_decimals, snapshot.underlying_decimals)?;
    let yield_tokens = snapshot.underlying_to_yield(underlying)?;
    let shares = snapshot.yield_to_shares(yield_tokens)?;

    Ok(Withdrawable {
        in_debt_units,
        underlying,
        yield_tokens,
        shares,
    })
}

/// Maximum yield-token amount liquidatable against the position's own debt.
///
/// Bounded by the smaller of the position's share balance (in yield
/// tokens) and the yield amount whose underlying value exactly cancels the
/// outstanding debt — a liquidation never leaves the account in credit.
pub fn available_liquidate(
    position: &Position,
    state: &AlchemistState,
    snapshot: &VaultSnapshot,
) -> Result<U256, LimitError> {
    let position_yield = snapshot.shares_to_yield(position.shares)?;
    let debt_in_underlying = scale(
        state.debt.clamped(),
        state.debt_decimals,
        snapshot.underlying_decimals,
    )?;
    let max_shares_for_debt = snapshot.underlying_to_shares(debt_in_underlying)?;
    let max_yield_for_debt = snapshot.shares_to_yield(max_shares_for_debt)?;
    Ok(position_yield.min(max_yield_for_debt))
}

/// Deposit amount accepted by the vault cap: the requested underlying
/// clamped to the vault's remaining capacity.
pub fn available_deposit(
    snapshot: &VaultSnapshot,
    requested_underlying: U256,
) -> Result<U256, LimitError> {
    Ok(requested_underlying.min(snapshot.params.remaining_capacity()))
}
