//! # Domain Entities
//!
//! Token and vault identity metadata. Loaded once from static registries at
//! startup and passed into engine constructors; immutable afterwards.

use crate::value_objects::{ChainId, TokenId};
use serde::{Deserialize, Serialize};

/// Token metadata.
///
/// Owned by a read-through cache keyed by (chain, address); never mutated
/// after load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Identity (chain + address).
    pub id: TokenId,
    /// Decimal count (precision of on-chain amounts).
    pub decimals: u8,
    /// Display symbol.
    pub symbol: String,
}

impl Token {
    /// Create token metadata.
    pub fn new(id: TokenId, decimals: u8, symbol: impl Into<String>) -> Self {
        Self {
            id,
            decimals,
            symbol: symbol.into(),
        }
    }
}

/// How a vault's yield token is wrapped, which determines the withdraw
/// route a transaction must take.
///
/// Resolved once per vault from static metadata; dispatched via a single
/// match when building call requests, never via scattered conditionals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultKind {
    /// Plain yield token held directly by the Alchemist.
    #[default]
    Standard,
    /// Aave aToken: deposits/withdrawals pass through the Aave gateway.
    AaveCollateral,
    /// Wrapped native token: withdrawals pass through the WETH gateway.
    WrappedNative,
}

/// Vault identity: the yield token, its underlying, and the wrapping kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultId {
    /// Yield-bearing token of the vault.
    pub yield_token: TokenId,
    /// Underlying asset of the vault.
    pub underlying_token: TokenId,
    /// Wrapping kind (drives route resolution).
    pub kind: VaultKind,
}

impl VaultId {
    /// Create a standard (directly-held) vault id.
    pub fn standard(yield_token: TokenId, underlying_token: TokenId) -> Self {
        Self {
            yield_token,
            underlying_token,
            kind: VaultKind::Standard,
        }
    }

    /// Chain this vault lives on.
    pub fn chain(&self) -> ChainId {
        self.yield_token.chain
    }
}

/// Alchemist identity: the per-debt-asset ledger contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlchemistId {
    /// Synthetic debt token minted by this Alchemist.
    pub debt_token: TokenId,
}
