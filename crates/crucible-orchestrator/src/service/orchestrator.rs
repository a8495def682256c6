//! # Orchestrator Service
//!
//! Drives one [`TransactionIntent`] through the state machine over the
//! outbound ports. Each execution is an independent async task; intents
//! share no mutable state, so any number may run concurrently (their
//! relative ordering is the wallet layer's concern, not ours).

use crate::config::OrchestratorConfig;
use crate::domain::call::{CallParameters, CallRequest, SignedCall, TxHash};
use crate::domain::errors::OrchestratorError;
use crate::domain::intent::{IntentPayload, TransactionIntent};
use crate::domain::revert::RevertReason;
use crate::domain::state::{ExecutionOutcome, IntentState};
use crate::ports::inbound::OrchestratorApi;
use crate::ports::outbound::{
    CacheSink, LedgerFault, LedgerReader, LedgerWriter, QuoteProvider, ReceiptWait, WalletSigner,
};
use crate::service::cancel::CancelToken;
use async_trait::async_trait;
use crucible_limits::LimitError;
use crucible_math::min_out;
use primitive_types::U256;
use std::future::Future;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The transaction orchestrator.
///
/// Owns nothing but port handles and configuration; all chain state is
/// read through the ports at execution time.
pub struct Orchestrator<L, W, S, Q>
where
    L: LedgerReader,
    W: LedgerWriter,
    S: WalletSigner,
    Q: QuoteProvider,
{
    reader: Arc<L>,
    writer: Arc<W>,
    signer: Arc<S>,
    quotes: Arc<Q>,
    cache: Arc<dyn CacheSink>,
    config: OrchestratorConfig,
}

impl<L, W, S, Q> Orchestrator<L, W, S, Q>
where
    L: LedgerReader,
    W: LedgerWriter,
    S: WalletSigner,
    Q: QuoteProvider,
{
    /// Create an orchestrator over the given ports.
    pub fn new(
        reader: Arc<L>,
        writer: Arc<W>,
        signer: Arc<S>,
        quotes: Arc<Q>,
        cache: Arc<dyn CacheSink>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            reader,
            writer,
            signer,
            quotes,
            cache,
            config,
        }
    }

    /// Validated state transition with structured logging.
    fn transition(
        intent_id: Uuid,
        state: &mut IntentState,
        next: IntentState,
    ) -> Result<(), OrchestratorError> {
        if !state.can_transition_to(next) {
            return Err(OrchestratorError::InvalidTransition {
                from: *state,
                to: next,
            });
        }
        debug!(intent = %intent_id, from = ?state, to = ?next, "state transition");
        *state = next;
        Ok(())
    }

    /// Abort if cancellation was requested and the machine is still in a
    /// cancellable state.
    fn check_cancel(
        cancel: &CancelToken,
        state: &IntentState,
        intent_id: Uuid,
    ) -> Result<(), OrchestratorError> {
        if cancel.is_cancelled() && state.is_cancellable() {
            info!(intent = %intent_id, state = ?state, "cancelled before submission");
            return Err(OrchestratorError::Cancelled);
        }
        Ok(())
    }

    fn map_fault(fault: LedgerFault) -> OrchestratorError {
        match fault {
            // A revert outside simulation/confirmation contexts is a
            // transport-shaped surprise; keep the raw text.
            LedgerFault::Revert(raw) => OrchestratorError::Network(raw),
            LedgerFault::Network(msg) => OrchestratorError::Network(msg),
        }
    }

    /// Bound a ledger round trip by the request timeout.
    async fn bounded<T>(
        &self,
        what: &str,
        fut: impl Future<Output = Result<T, LedgerFault>>,
    ) -> Result<T, OrchestratorError> {
        match timeout(self.config.request_timeout, fut).await {
            Ok(result) => result.map_err(Self::map_fault),
            Err(_) => Err(OrchestratorError::Network(format!("{what} timed out"))),
        }
    }

    /// Simulate with a timeout, decoding any revert reason.
    async fn simulate_bounded(
        &self,
        request: &CallRequest,
    ) -> Result<CallParameters, OrchestratorError> {
        match timeout(self.config.request_timeout, self.writer.simulate(request)).await {
            Ok(Ok(params)) => Ok(params),
            Ok(Err(LedgerFault::Revert(raw))) => {
                let reason = RevertReason::decode(&raw);
                warn!(method = %request.method, %reason, "simulation reverted");
                Err(OrchestratorError::Simulation(reason))
            }
            Ok(Err(LedgerFault::Network(msg))) => Err(OrchestratorError::Network(msg)),
            Err(_) => Err(OrchestratorError::Network("simulation timed out".to_string())),
        }
    }

    /// Ask the wallet to sign, bounded by the signature timeout and
    /// raced against cancellation. A wallet that never answers must not
    /// pin the intent in a cancellable state indefinitely.
    async fn request_signature(
        &self,
        params: CallParameters,
        cancel: &CancelToken,
    ) -> Result<SignedCall, OrchestratorError> {
        tokio::select! {
            result = timeout(self.config.signature_timeout, self.signer.sign(params)) => {
                match result {
                    Ok(Ok(signed)) => Ok(signed),
                    Ok(Err(_)) => Err(OrchestratorError::SignatureRejected),
                    Err(_) => Err(OrchestratorError::SignatureTimedOut),
                }
            }
            _ = cancel.cancelled() => Err(OrchestratorError::Cancelled),
        }
    }

    /// Walk the allowance-check/approve loop until the spender is covered.
    ///
    /// Approvals are for exactly the intent amount. After an approval
    /// confirms, the allowance is re-read from chain rather than assumed;
    /// if it still does not cover the intent, something upstream ate the
    /// allowance and we stop rather than approve again.
    async fn ensure_allowance(
        &self,
        intent: &TransactionIntent,
        state: &mut IntentState,
        cancel: &CancelToken,
    ) -> Result<Option<ExecutionOutcome>, OrchestratorError> {
        Self::transition(intent.id, state, IntentState::CheckingAllowance)?;
        let mut approved_once = false;
        loop {
            Self::check_cancel(cancel, state, intent.id)?;
            let allowance = self
                .bounded(
                    "allowance read",
                    self.reader
                        .allowance(intent.account, intent.token, intent.spender),
                )
                .await?;
            if allowance >= intent.amount {
                debug!(intent = %intent.id, %allowance, "allowance sufficient");
                return Ok(None);
            }
            if approved_once {
                warn!(intent = %intent.id, %allowance, "allowance still short after approval");
                return Err(OrchestratorError::ApprovalIneffective);
            }

            Self::transition(intent.id, state, IntentState::Approving)?;
            Self::check_cancel(cancel, state, intent.id)?;
            let request = intent.build_approval_request();
            let params = self.simulate_bounded(&request).await?;
            let signed = self.request_signature(params, cancel).await?;
            let tx_hash = self
                .bounded("approval submission", self.writer.submit(signed))
                .await?;
            Self::transition(intent.id, state, IntentState::AwaitingApprovalConfirmation)?;

            let bound = self.config.confirmation_timeout(intent.chain());
            match self
                .writer
                .wait_for_receipt(tx_hash, bound)
                .await
                .map_err(Self::map_fault)?
            {
                ReceiptWait::Mined(receipt) if receipt.success => {
                    approved_once = true;
                    // Re-derive from chain rather than assuming success.
                    Self::transition(intent.id, state, IntentState::CheckingAllowance)?;
                }
                ReceiptWait::Mined(receipt) => {
                    Self::transition(intent.id, state, IntentState::Reverted)?;
                    let reason = decode_receipt_reason(&receipt.revert_reason);
                    return Ok(Some(ExecutionOutcome::Reverted {
                        tx_hash: receipt.tx_hash,
                        reason,
                    }));
                }
                ReceiptWait::TimedOut => {
                    Self::transition(intent.id, state, IntentState::TimedOut)?;
                    return Ok(Some(ExecutionOutcome::TimedOut { tx_hash }));
                }
            }
        }
    }

    /// For bridge intents, fetch the relayer quote and fold the slippage
    /// tolerance into a minimum-output bound.
    async fn bridge_min_out(
        &self,
        intent: &TransactionIntent,
    ) -> Result<Option<U256>, OrchestratorError> {
        let IntentPayload::Bridge {
            dest_token,
            slippage,
            ..
        } = &intent.payload
        else {
            return Ok(None);
        };
        let quote = match timeout(
            self.config.request_timeout,
            self.quotes.quote(intent.token, *dest_token, intent.amount),
        )
        .await
        {
            Ok(Ok(quote)) => quote,
            Ok(Err(fault)) => return Err(OrchestratorError::Network(fault.to_string())),
            Err(_) => {
                return Err(OrchestratorError::Network(
                    "quote request timed out".to_string(),
                ))
            }
        };
        debug!(intent = %intent.id, amount_out = %quote.amount_out, fee = %quote.fee, "bridge quote");
        let bound = min_out(quote.amount_out, *slippage).map_err(LimitError::from)?;
        Ok(Some(bound))
    }

    async fn confirm(
        &self,
        intent: &TransactionIntent,
        state: &mut IntentState,
        tx_hash: TxHash,
    ) -> Result<ExecutionOutcome, OrchestratorError> {
        let bound = self.config.confirmation_timeout(intent.chain());
        match self
            .writer
            .wait_for_receipt(tx_hash, bound)
            .await
            .map_err(Self::map_fault)?
        {
            ReceiptWait::Mined(receipt) if receipt.success => {
                Self::transition(intent.id, state, IntentState::Confirmed)?;
                let keys = intent.cache_keys();
                self.cache.invalidate(&keys);
                info!(intent = %intent.id, tx = ?receipt.tx_hash, "confirmed");
                Ok(ExecutionOutcome::Confirmed {
                    tx_hash: receipt.tx_hash,
                    invalidated: keys,
                })
            }
            ReceiptWait::Mined(receipt) => {
                Self::transition(intent.id, state, IntentState::Reverted)?;
                let reason = decode_receipt_reason(&receipt.revert_reason);
                warn!(intent = %intent.id, %reason, "reverted");
                Ok(ExecutionOutcome::Reverted {
                    tx_hash: receipt.tx_hash,
                    reason,
                })
            }
            ReceiptWait::TimedOut => {
                // Advisory: the transaction may still confirm. Callers
                // re-read snapshots to reconcile; this machine never flips
                // its terminal state retroactively.
                Self::transition(intent.id, state, IntentState::TimedOut)?;
                warn!(intent = %intent.id, "no receipt within bound");
                Ok(ExecutionOutcome::TimedOut { tx_hash })
            }
        }
    }
}

fn decode_receipt_reason(raw: &Option<String>) -> RevertReason {
    match raw {
        Some(raw) => RevertReason::decode(raw),
        None => RevertReason::Other("execution reverted".to_string()),
    }
}

#[async_trait]
impl<L, W, S, Q> OrchestratorApi for Orchestrator<L, W, S, Q>
where
    L: LedgerReader + 'static,
    W: LedgerWriter + 'static,
    S: WalletSigner + 'static,
    Q: QuoteProvider + 'static,
{
    async fn execute(
        &self,
        intent: TransactionIntent,
        cancel: CancelToken,
    ) -> Result<ExecutionOutcome, OrchestratorError> {
        let mut state = IntentState::Idle;
        info!(intent = %intent.id, kind = ?intent.kind(), chain = ?intent.chain(), "executing intent");

        // Allowance branch only for actions that move a token into the
        // spender; others go straight to simulation.
        if intent.needs_allowance() {
            if let Some(outcome) = self.ensure_allowance(&intent, &mut state, &cancel).await? {
                return Ok(outcome);
            }
        }

        Self::transition(intent.id, &mut state, IntentState::Simulating)?;
        Self::check_cancel(&cancel, &state, intent.id)?;
        let bridge_min = self.bridge_min_out(&intent).await?;
        let request = intent.build_call_request(bridge_min);
        let params = match self.simulate_bounded(&request).await {
            Ok(params) => params,
            Err(err) => {
                // Never auto-retried: the cause is state-dependent and the
                // same inputs will fail the same way.
                Self::transition(intent.id, &mut state, IntentState::Idle)?;
                return Err(err);
            }
        };

        Self::transition(intent.id, &mut state, IntentState::AwaitingUserSignature)?;
        Self::check_cancel(&cancel, &state, intent.id)?;
        let signed = match self.request_signature(params, &cancel).await {
            Ok(signed) => signed,
            Err(err) => {
                Self::transition(intent.id, &mut state, IntentState::Idle)?;
                return Err(err);
            }
        };

        Self::transition(intent.id, &mut state, IntentState::Submitted)?;
        let tx_hash = self
            .bounded("submission", self.writer.submit(signed))
            .await?;
        Self::transition(intent.id, &mut state, IntentState::AwaitingConfirmation)?;
        self.confirm(&intent, &mut state, tx_hash).await
    }
}
