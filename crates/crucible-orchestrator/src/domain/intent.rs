//! # Transaction Intents
//!
//! The unit the orchestrator operates on. An intent is created by the
//! caller from fresh on-chain reads, executed once, and discarded; a retry
//! is always a new intent, never a resubmission of this one.

use super::call::CallRequest;
use crucible_limits::WithdrawRoute;
use crucible_math::Ppm;
use crucible_types::{ActionKind, Address, AlchemistId, CacheKey, ChainId, TokenId, VaultId};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind-specific payload of an intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentPayload {
    /// Deposit underlying/yield tokens into a vault.
    Deposit {
        /// Target vault.
        vault: VaultId,
        /// Owning Alchemist.
        alchemist: AlchemistId,
        /// Slippage-protected minimum shares out.
        min_shares: U256,
    },
    /// Withdraw collateral from a vault.
    Withdraw {
        /// Source vault.
        vault: VaultId,
        /// Owning Alchemist.
        alchemist: AlchemistId,
        /// Resolved withdraw route.
        route: WithdrawRoute,
        /// Recipient of the withdrawn tokens.
        recipient: Address,
    },
    /// Repay outstanding debt.
    Repay {
        /// Owning Alchemist.
        alchemist: AlchemistId,
    },
    /// Borrow (mint) debt tokens against collateral.
    Borrow {
        /// Owning Alchemist.
        alchemist: AlchemistId,
        /// Recipient of the minted tokens.
        recipient: Address,
    },
    /// Liquidate own collateral against own debt.
    Liquidate {
        /// Vault whose shares are liquidated.
        vault: VaultId,
        /// Owning Alchemist.
        alchemist: AlchemistId,
        /// Slippage-protected minimum underlying credited.
        min_underlying: U256,
    },
    /// Migrate a position between vaults.
    Migrate {
        /// Source vault.
        source: VaultId,
        /// Destination vault.
        dest: VaultId,
        /// Owning Alchemist.
        alchemist: AlchemistId,
        /// Minimum destination shares.
        min_shares: U256,
        /// Minimum destination underlying value.
        min_underlying: U256,
    },
    /// Bridge debt tokens to another network.
    Bridge {
        /// Destination network.
        dest_chain: ChainId,
        /// Token received on the destination network.
        dest_token: TokenId,
        /// Slippage tolerance applied to the relayer quote.
        slippage: Ppm,
    },
    /// Wrap the native token ahead of a deposit.
    Wrap {
        /// Vault the wrapped tokens are destined for.
        vault: VaultId,
    },
}

impl IntentPayload {
    /// Action kind this payload encodes.
    pub fn kind(&self) -> ActionKind {
        match self {
            IntentPayload::Deposit { .. } => ActionKind::Deposit,
            IntentPayload::Withdraw { .. } => ActionKind::Withdraw,
            IntentPayload::Repay { .. } => ActionKind::Repay,
            IntentPayload::Borrow { .. } => ActionKind::Borrow,
            IntentPayload::Liquidate { .. } => ActionKind::Liquidate,
            IntentPayload::Migrate { .. } => ActionKind::Migrate,
            IntentPayload::Bridge { .. } => ActionKind::Bridge,
            IntentPayload::Wrap { .. } => ActionKind::Wrap,
        }
    }
}

/// One mutating user action, bound to fresh chain reads at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIntent {
    /// Correlation id, unique per execution attempt.
    pub id: Uuid,
    /// Acting account.
    pub account: Address,
    /// Amount of `token` the action operates on.
    pub amount: U256,
    /// Token being moved or acted upon.
    pub token: TokenId,
    /// Contract the token moves into (approval target and call target).
    pub spender: Address,
    /// Kind-specific parameters.
    pub payload: IntentPayload,
}

impl TransactionIntent {
    /// Create an intent with a fresh correlation id.
    pub fn new(
        account: Address,
        amount: U256,
        token: TokenId,
        spender: Address,
        payload: IntentPayload,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account,
            amount,
            token,
            spender,
            payload,
        }
    }

    /// Action kind, derived from the payload so the two cannot disagree.
    pub fn kind(&self) -> ActionKind {
        self.payload.kind()
    }

    /// Network this intent executes on.
    pub fn chain(&self) -> ChainId {
        self.token.chain
    }

    /// Whether this intent needs the allowance-check/approve branch.
    pub fn needs_allowance(&self) -> bool {
        self.kind().moves_tokens()
    }

    /// Cache keys to invalidate once this intent confirms.
    ///
    /// Exactly the snapshots the action can have changed; consumers
    /// re-fetch these and nothing else.
    pub fn cache_keys(&self) -> Vec<CacheKey> {
        let mut keys = vec![CacheKey::TokenBalance {
            account: self.account,
            token: self.token,
        }];
        match &self.payload {
            IntentPayload::Deposit { vault, alchemist, .. }
            | IntentPayload::Withdraw { vault, alchemist, .. }
            | IntentPayload::Liquidate { vault, alchemist, .. } => {
                keys.push(CacheKey::Vault {
                    vault: vault.yield_token,
                });
                keys.push(CacheKey::Position {
                    account: self.account,
                    vault: vault.yield_token,
                });
                keys.push(CacheKey::Alchemist {
                    account: self.account,
                    debt_token: alchemist.debt_token,
                });
            }
            IntentPayload::Repay { alchemist } | IntentPayload::Borrow { alchemist, .. } => {
                keys.push(CacheKey::Alchemist {
                    account: self.account,
                    debt_token: alchemist.debt_token,
                });
            }
            IntentPayload::Migrate {
                source,
                dest,
                alchemist,
                ..
            } => {
                for vault in [source, dest] {
                    keys.push(CacheKey::Vault {
                        vault: vault.yield_token,
                    });
                    keys.push(CacheKey::Position {
                        account: self.account,
                        vault: vault.yield_token,
                    });
                }
                keys.push(CacheKey::Alchemist {
                    account: self.account,
                    debt_token: alchemist.debt_token,
                });
            }
            IntentPayload::Bridge { dest_token, .. } => {
                keys.push(CacheKey::TokenBalance {
                    account: self.account,
                    token: *dest_token,
                });
            }
            IntentPayload::Wrap { vault } => {
                keys.push(CacheKey::Vault {
                    vault: vault.yield_token,
                });
            }
        }
        keys
    }

    /// Build the abstract call request for this intent.
    ///
    /// `bridge_min_out` carries the slippage-adjusted quote output and is
    /// only consulted for bridge intents. Route dispatch happens here, in
    /// one match, from the route resolved at intent construction.
    pub fn build_call_request(&self, bridge_min_out: Option<U256>) -> CallRequest {
        let (method, args) = match &self.payload {
            IntentPayload::Deposit { min_shares, .. } => ("deposit", vec![*min_shares]),
            IntentPayload::Withdraw { route, .. } => {
                let method = match route {
                    WithdrawRoute::Direct => "withdraw",
                    WithdrawRoute::AaveGateway => "withdraw_via_aave_gateway",
                    WithdrawRoute::WethGateway => "withdraw_via_weth_gateway",
                };
                (method, vec![])
            }
            IntentPayload::Repay { .. } => ("repay", vec![]),
            IntentPayload::Borrow { .. } => ("mint", vec![]),
            IntentPayload::Liquidate { min_underlying, .. } => {
                ("liquidate", vec![*min_underlying])
            }
            IntentPayload::Migrate {
                min_shares,
                min_underlying,
                ..
            } => ("migrate", vec![*min_shares, *min_underlying]),
            IntentPayload::Bridge { .. } => {
                ("bridge", bridge_min_out.into_iter().collect())
            }
            IntentPayload::Wrap { .. } => ("wrap", vec![]),
        };
        CallRequest {
            chain: self.chain(),
            to: self.spender,
            method: method.to_string(),
            amount: self.amount,
            args,
        }
    }

    /// Build the exact-amount approval request for this intent.
    ///
    /// Approvals are never unlimited: bounding the allowance to the intent
    /// amount bounds the blast radius of a compromised spender.
    pub fn build_approval_request(&self) -> CallRequest {
        CallRequest {
            chain: self.chain(),
            to: self.token.address,
            method: "approve".to_string(),
            amount: self.amount,
            args: vec![],
        }
    }
}
