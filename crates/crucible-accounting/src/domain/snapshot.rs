//! # Vault Snapshots
//!
//! Point-in-time reads of a vault's parameters and yield-token price. A
//! snapshot is replaced wholesale after every confirmed transaction, never
//! patched field by field; computations that started from a stale snapshot
//! are not retroactively corrected.

use crucible_types::VaultId;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Per-vault parameters as read from the Alchemist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldTokenParams {
    /// Total outstanding shares across all depositors.
    pub total_shares: U256,
    /// Yield-token amount currently deployed.
    pub active_balance: U256,
    /// Underlying-denominated value expected from `active_balance` as of
    /// the last harvest.
    pub expected_value: U256,
    /// Deposit cap, underlying-denominated.
    pub maximum_expected_value: U256,
    /// Yield-token decimal count.
    pub decimals: u8,
}

impl YieldTokenParams {
    /// Remaining deposit capacity under the vault cap, underlying-denominated.
    ///
    /// Zero when the cap is already met or exceeded.
    pub fn remaining_capacity(&self) -> U256 {
        self.maximum_expected_value
            .saturating_sub(self.expected_value)
    }

    /// True when the vault has no outstanding shares.
    pub fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }
}

/// Yield-token adapter state: the exchange rate to underlying.
///
/// `price` is the underlying value of one whole yield token, scaled by
/// `10^yield_decimals`, as of the last on-chain read. Point-in-time only;
/// callers refresh before any solvency-affecting decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAdapter {
    /// Yield-token → underlying exchange rate, scaled by `10^yield_decimals`.
    pub price: U256,
}

impl TokenAdapter {
    /// Create an adapter snapshot with the given price.
    pub fn new(price: U256) -> Self {
        Self { price }
    }
}

/// A complete vault snapshot: identity, parameters, and adapter price.
///
/// The unit every accounting conversion operates on. Fetched fresh (or from
/// a short-TTL cache), never persisted across sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSnapshot {
    /// Vault identity.
    pub vault: VaultId,
    /// Vault parameters.
    pub params: YieldTokenParams,
    /// Adapter price.
    pub adapter: TokenAdapter,
    /// Underlying-token decimal count.
    pub underlying_decimals: u8,
}

impl VaultSnapshot {
    /// Yield-token decimal count.
    pub fn yield_decimals(&self) -> u8 {
        self.params.decimals
    }
}
