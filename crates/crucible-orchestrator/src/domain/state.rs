//! # Intent State Machine
//!
//! States execute strictly in sequence within one intent; there is no
//! ordering guarantee between concurrently executing intents (that mirrors
//! on-chain nonce ordering and is left to the wallet layer).

use super::call::TxHash;
use super::revert::RevertReason;
use crucible_types::CacheKey;
use serde::{Deserialize, Serialize};

/// State of one executing transaction intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentState {
    /// Not started, or returned after a pre-submission failure.
    #[default]
    Idle,
    /// Reading the current allowance for the spender.
    CheckingAllowance,
    /// Submitting an exact-amount approval transaction.
    Approving,
    /// Waiting for the approval to confirm.
    AwaitingApprovalConfirmation,
    /// Dry-running the call to surface reverts before signing.
    Simulating,
    /// Waiting for the wallet to sign.
    AwaitingUserSignature,
    /// Transaction broadcast.
    Submitted,
    /// Polling for the receipt.
    AwaitingConfirmation,
    /// Receipt arrived with success status.
    Confirmed,
    /// Receipt arrived with revert status.
    Reverted,
    /// No receipt within the configured bound; outcome unknown.
    TimedOut,
}

impl IntentState {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, next: IntentState) -> bool {
        use IntentState::*;
        matches!(
            (self, next),
            (Idle, CheckingAllowance)
                | (Idle, Simulating)
                | (CheckingAllowance, Approving)
                | (CheckingAllowance, Simulating)
                | (Approving, AwaitingApprovalConfirmation)
                | (AwaitingApprovalConfirmation, CheckingAllowance)
                | (AwaitingApprovalConfirmation, Reverted)
                | (AwaitingApprovalConfirmation, TimedOut)
                | (Simulating, AwaitingUserSignature)
                | (Simulating, Idle)
                | (AwaitingUserSignature, Submitted)
                | (AwaitingUserSignature, Idle)
                | (Submitted, AwaitingConfirmation)
                | (AwaitingConfirmation, Confirmed)
                | (AwaitingConfirmation, Reverted)
                | (AwaitingConfirmation, TimedOut)
        )
    }

    /// Check if terminal state.
    ///
    /// `TimedOut` is terminal for the machine but advisory for the caller:
    /// the transaction may still confirm later. The machine never flips a
    /// terminal state retroactively; reconciliation happens by re-reading
    /// snapshots.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Reverted | Self::TimedOut)
    }

    /// Whether cancellation is still honored in this state.
    ///
    /// Once broadcast, a transaction can only be superseded, not
    /// cancelled.
    pub fn is_cancellable(&self) -> bool {
        use IntentState::*;
        matches!(
            self,
            Idle | CheckingAllowance | Approving | Simulating | AwaitingUserSignature
        )
    }
}

/// Terminal result of executing an intent.
///
/// `Reverted` and `TimedOut` are outcomes, not `Err` values: the machine
/// reached a terminal state and reports it with structure. Pre-submission
/// failures (simulation, rejection, cancellation) surface as
/// [`crate::OrchestratorError`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Transaction confirmed; the named cache keys were invalidated.
    Confirmed {
        /// Transaction hash.
        tx_hash: TxHash,
        /// Exactly which snapshots consumers must re-fetch.
        invalidated: Vec<CacheKey>,
    },
    /// Transaction mined but reverted.
    Reverted {
        /// Transaction hash.
        tx_hash: TxHash,
        /// Decoded revert reason.
        reason: RevertReason,
    },
    /// No receipt within the configured bound. Outcome unknown — callers
    /// should word this as "could not confirm, check your wallet", never
    /// as a failure.
    TimedOut {
        /// Transaction hash, for manual re-checking.
        tx_hash: TxHash,
    },
}
