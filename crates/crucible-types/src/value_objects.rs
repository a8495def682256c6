//! # Value Objects
//!
//! Immutable value types shared across the workspace.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Contract/account address (20-byte).
pub type Address = [u8; 20];

/// Supported network identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    /// Ethereum mainnet.
    Ethereum,
    /// Optimism L2.
    Optimism,
    /// Arbitrum L2.
    Arbitrum,
    /// Fantom.
    Fantom,
}

impl ChainId {
    /// Typical block time in seconds, used to size confirmation timeouts.
    pub fn block_time_secs(&self) -> u64 {
        match self {
            ChainId::Ethereum => 12,
            ChainId::Optimism => 2,
            ChainId::Arbitrum => 1,
            ChainId::Fantom => 1,
        }
    }

    /// Default confirmation-wait timeout in seconds.
    ///
    /// Generous on purpose: crossing it is advisory ("could not confirm"),
    /// never a failure, so false positives on slow networks are worse than
    /// a long wait.
    pub fn default_confirmation_timeout_secs(&self) -> u64 {
        match self {
            ChainId::Ethereum => 180,
            ChainId::Optimism | ChainId::Arbitrum | ChainId::Fantom => 60,
        }
    }
}

/// Token identity: an address on a specific chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId {
    /// Chain the token lives on.
    pub chain: ChainId,
    /// Token contract address.
    pub address: Address,
}

impl TokenId {
    /// Create a new token id.
    pub fn new(chain: ChainId, address: Address) -> Self {
        Self { chain, address }
    }
}

/// Signed debt balance at an Alchemist.
///
/// A negative balance means the account holds credit, not debt. All limit
/// and UI computations clamp the negative side to zero; the sign is kept
/// only so callers can distinguish "no debt" from "credit".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// True when the account is in credit (negative debt).
    pub negative: bool,
    /// Absolute value of the balance.
    pub magnitude: U256,
}

impl Debt {
    /// Positive debt of the given magnitude.
    pub fn owed(magnitude: U256) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// Credit (negative debt) of the given magnitude.
    pub fn credit(magnitude: U256) -> Self {
        Self {
            negative: true,
            magnitude,
        }
    }

    /// Zero debt.
    pub fn zero() -> Self {
        Self::default()
    }

    /// `max(debt, 0)`: the outstanding debt, with credit clamped to zero.
    pub fn clamped(&self) -> U256 {
        if self.negative {
            U256::zero()
        } else {
            self.magnitude
        }
    }

    /// True when the account owes nothing (zero or in credit).
    pub fn is_settled(&self) -> bool {
        self.negative || self.magnitude.is_zero()
    }
}

/// Mutating user actions the client can orchestrate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Deposit yield or underlying tokens into a vault.
    Deposit,
    /// Withdraw collateral from a vault.
    Withdraw,
    /// Repay outstanding debt.
    Repay,
    /// Borrow (mint) synthetic debt tokens against collateral.
    Borrow,
    /// Liquidate collateral against one's own debt.
    Liquidate,
    /// Migrate a position between vaults.
    Migrate,
    /// Bridge debt tokens to another network.
    Bridge,
    /// Wrap the native token before deposit.
    Wrap,
}

impl ActionKind {
    /// Whether this action moves a token into a spender contract.
    ///
    /// Only these actions need the allowance-check/approve branch of the
    /// orchestrator; liquidate, for example, operates purely on the
    /// caller's own recorded shares.
    pub fn moves_tokens(&self) -> bool {
        matches!(
            self,
            ActionKind::Deposit
                | ActionKind::Repay
                | ActionKind::Migrate
                | ActionKind::Bridge
                | ActionKind::Wrap
        )
    }
}

/// Cache-invalidation key emitted after a confirmed transaction.
///
/// Names exactly which snapshots a consumer must re-fetch; the orchestrator
/// never asks callers to invalidate everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheKey {
    /// A (account, vault) position.
    Position {
        /// Account address.
        account: Address,
        /// Vault token id.
        vault: TokenId,
    },
    /// A (account, debt asset) Alchemist state.
    Alchemist {
        /// Account address.
        account: Address,
        /// Debt token id.
        debt_token: TokenId,
    },
    /// A vault's shared parameters (total shares, balances, price).
    Vault {
        /// Vault token id.
        vault: TokenId,
    },
    /// An account's balance/allowance of a token.
    TokenBalance {
        /// Account address.
        account: Address,
        /// Token id.
        token: TokenId,
    },
}
