//! # Position State
//!
//! Per-(account, vault) position and per-(account, debt asset) Alchemist
//! state, as read from chain. Re-fetched after every confirmed transaction.

use crucible_types::{Address, Debt, TokenId};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Fixed-point scale for collateralization ratios: `1e18` = 100%.
pub const COLLATERALIZATION_SCALE: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// An account's position in one vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Owning account.
    pub account: Address,
    /// Vault the shares belong to (yield token id).
    pub vault: TokenId,
    /// Shares owned.
    pub shares: U256,
}

/// An account's aggregate state at one Alchemist (per debt asset).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlchemistState {
    /// Outstanding debt (signed; negative means credit).
    pub debt: Debt,
    /// Sum of collateral across all vaults sharing this debt asset,
    /// debt-token-denominated.
    pub total_value: U256,
    /// Required collateral-to-debt ratio, scaled by
    /// [`COLLATERALIZATION_SCALE`] (e.g. `1.5e18` = 150%).
    pub minimum_collateralization: U256,
    /// Debt-token decimal count.
    pub debt_decimals: u8,
}
