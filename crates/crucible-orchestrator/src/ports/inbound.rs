//! # Inbound Port
//!
//! The API the UI layer drives.

use crate::domain::errors::OrchestratorError;
use crate::domain::intent::TransactionIntent;
use crate::domain::state::ExecutionOutcome;
use crate::service::cancel::CancelToken;
use async_trait::async_trait;

/// Orchestrator API - inbound port.
#[async_trait]
pub trait OrchestratorApi: Send + Sync {
    /// Execute one intent through the full state machine.
    ///
    /// Each execution is independent: no automatic retry, no reuse of the
    /// intent. `cancel` is honored only before submission.
    async fn execute(
        &self,
        intent: TransactionIntent,
        cancel: CancelToken,
    ) -> Result<ExecutionOutcome, OrchestratorError>;
}
