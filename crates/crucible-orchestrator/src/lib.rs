//! # Crucible Transaction Orchestrator
//!
//! A finite state machine per [`TransactionIntent`], identical in shape for
//! every action kind:
//!
//! ```text
//! Idle → CheckingAllowance → (Approving → AwaitingApprovalConfirmation
//!      → CheckingAllowance)* → Simulating → AwaitingUserSignature
//!      → Submitted → AwaitingConfirmation → {Confirmed | Reverted | TimedOut}
//! ```
//!
//! ## Policy
//!
//! - The allowance branch only runs for actions that move a token into a
//!   spender contract; approvals are for exactly the intent amount.
//! - Simulation happens before any signature is requested; a simulation
//!   failure is decoded and reported, never auto-retried.
//! - `TimedOut` is advisory, not a failure: the transaction may still
//!   confirm, so the caller is told "could not confirm", never "failed".
//! - No automatic resubmission; a retry is a fresh caller-built intent
//!   derived from re-read chain state.
//! - Cancellation is honored only before `Submitted`.
//!
//! ## Module Structure
//!
//! ```text
//! crucible-orchestrator/
//! ├── domain/          # intent, states, call types, revert decoding, errors
//! ├── ports/           # inbound API + outbound ledger/signer/quote/cache traits
//! ├── service/         # the async driver
//! └── config.rs        # per-network confirmation timeouts
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::OrchestratorConfig;
pub use domain::call::{CallParameters, CallRequest, Receipt, SignedCall, TxHash};
pub use domain::errors::OrchestratorError;
pub use domain::intent::{IntentPayload, TransactionIntent};
pub use domain::revert::RevertReason;
pub use domain::state::{ExecutionOutcome, IntentState};
pub use ports::{
    CacheSink, LedgerFault, LedgerReader, LedgerWriter, MockLedger, MockQuoteProvider, MockSigner,
    OrchestratorApi, Quote, QuoteProvider, ReceiptWait, RecordingCacheSink, WalletSigner,
};
pub use service::{CancelToken, Orchestrator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
