//! # Routes and Capability Queries
//!
//! Resolves how a withdrawal reaches the user (directly or through a
//! gateway) and whether a chain supports an action at all. Both are
//! answered *before* an intent is constructed, so unsupported actions are
//! disabled up front instead of failing mid-flight.

use crucible_types::{ActionKind, ChainId, VaultId, VaultKind};
use serde::{Deserialize, Serialize};

/// The path a withdrawal takes out of the Alchemist.
///
/// Resolved once per vault from static metadata and dispatched via a
/// single match; call-request construction never re-derives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawRoute {
    /// Withdraw the yield token directly.
    Direct,
    /// Unwrap through the Aave gateway (aToken collateral).
    AaveGateway,
    /// Unwrap through the WETH gateway (wrapped-native collateral).
    WethGateway,
}

/// Resolve the withdraw route for a vault from its wrapping kind.
pub fn resolve_withdraw_route(vault: &VaultId) -> WithdrawRoute {
    match vault.kind {
        VaultKind::Standard => WithdrawRoute::Direct,
        VaultKind::AaveCollateral => WithdrawRoute::AaveGateway,
        VaultKind::WrappedNative => WithdrawRoute::WethGateway,
    }
}

/// Why an action is unavailable on a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unsupported {
    /// Human-readable reason, suitable for disabling a control.
    pub reason: String,
}

/// Check whether `kind` is supported on `chain`.
///
/// Returned as a value so callers can disable the action; never thrown
/// through the orchestrator.
pub fn check_supported(chain: ChainId, kind: ActionKind) -> Result<(), Unsupported> {
    match (chain, kind) {
        (ChainId::Fantom, ActionKind::Bridge) => Err(Unsupported {
            reason: "no bridge provider on this network".to_string(),
        }),
        (ChainId::Fantom, ActionKind::Migrate) => Err(Unsupported {
            reason: "vault migrator is not deployed on this network".to_string(),
        }),
        _ => Ok(()),
    }
}

/// All action kinds available on `chain`, for building action menus.
pub fn supported_actions(chain: ChainId) -> Vec<ActionKind> {
    [
        ActionKind::Deposit,
        ActionKind::Withdraw,
        ActionKind::Repay,
        ActionKind::Borrow,
        ActionKind::Liquidate,
        ActionKind::Migrate,
        ActionKind::Bridge,
        ActionKind::Wrap,
    ]
    .into_iter()
    .filter(|kind| check_supported(chain, *kind).is_ok())
    .collect()
}
