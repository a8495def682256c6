//! # Orchestrator Errors
//!
//! Pre-submission failures. Post-submission terminal states (`Reverted`,
//! `TimedOut`) are reported through
//! [`crate::ExecutionOutcome`], not here, so callers can distinguish "this
//! definitely failed" from "outcome unknown".

use super::revert::RevertReason;
use super::state::IntentState;
use crucible_limits::LimitError;
use thiserror::Error;

/// Orchestration error. The state machine catches these at its boundary
/// and returns to `Idle`; retry is always a fresh caller-built intent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrchestratorError {
    /// Dry run reverted. Never auto-retried: the cause is state-dependent
    /// (e.g. a stale slippage bound) and identical inputs fail identically.
    #[error("simulation reverted: {0}")]
    Simulation(RevertReason),

    /// The wallet declined to sign.
    #[error("signature request rejected")]
    SignatureRejected,

    /// The wallet gave no answer within the configured signature bound.
    #[error("signature request timed out")]
    SignatureTimedOut,

    /// The caller cancelled before submission.
    #[error("cancelled before submission")]
    Cancelled,

    /// An approval confirmed but the re-read allowance still does not
    /// cover the intent amount.
    #[error("approval confirmed but allowance still insufficient")]
    ApprovalIneffective,

    /// Pre-flight limit validation failed.
    #[error(transparent)]
    Limits(#[from] LimitError),

    /// Ledger or quote provider transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Internal state machine bug: an illegal transition was attempted.
    #[error("invalid transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// Current state.
        from: IntentState,
        /// Attempted state.
        to: IntentState,
    },
}
