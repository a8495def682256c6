//! # Outbound Ports
//!
//! Traits for external collaborators: the ledger boundary, the wallet,
//! the quote provider, and the cache-invalidation sink. The orchestrator
//! owns none of them; it consumes interfaces.

use crate::domain::call::{CallParameters, CallRequest, Receipt, SignedCall, TxHash};
use async_trait::async_trait;
use crucible_types::{Address, CacheKey, TokenId};
use primitive_types::U256;
use std::time::Duration;
use thiserror::Error;

/// Ledger boundary failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerFault {
    /// The call reverted; raw reason attached for decoding.
    #[error("reverted: {0}")]
    Revert(String),
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Ledger read interface - outbound port.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Current allowance of `spender` over `owner`'s `token`.
    async fn allowance(
        &self,
        owner: Address,
        token: TokenId,
        spender: Address,
    ) -> Result<U256, LedgerFault>;

    /// Generic read-only contract call.
    async fn call(&self, request: &CallRequest) -> Result<Vec<u8>, LedgerFault>;
}

/// Result of waiting for a receipt within a bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReceiptWait {
    /// The transaction was mined (successfully or not — see the receipt).
    Mined(Receipt),
    /// The bound elapsed with no receipt. Not a failure: the transaction
    /// may still confirm later.
    TimedOut,
}

/// Ledger write interface - outbound port.
#[async_trait]
pub trait LedgerWriter: Send + Sync {
    /// Dry-run a call, resolving exact parameters or the revert reason.
    async fn simulate(&self, request: &CallRequest) -> Result<CallParameters, LedgerFault>;

    /// Broadcast a signed call.
    async fn submit(&self, call: SignedCall) -> Result<TxHash, LedgerFault>;

    /// Wait up to `timeout` for the transaction's receipt.
    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Result<ReceiptWait, LedgerFault>;
}

/// The wallet declined to sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("wallet declined the signature request")]
pub struct Declined;

/// Wallet signing interface - outbound port.
///
/// Signing itself (keys, hardware, prompts) is entirely external; the
/// orchestrator only needs a yes-with-signature or a no.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Ask the wallet to sign the simulated parameters.
    async fn sign(&self, params: CallParameters) -> Result<SignedCall, Declined>;
}

/// A relayer/swap quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    /// Amount expected out on the destination side.
    pub amount_out: U256,
    /// Fee the provider takes.
    pub fee: U256,
}

/// The quote provider could not supply a quote.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("quote unavailable: {0}")]
pub struct QuoteFault(pub String);

/// Bridge/swap quote interface - outbound port.
///
/// May fail independently of the ledger; a quote failure aborts the intent
/// before anything is signed.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Quote converting `amount` of `origin` into `dest`.
    async fn quote(
        &self,
        origin: TokenId,
        dest: TokenId,
        amount: U256,
    ) -> Result<Quote, QuoteFault>;
}

/// Cache-invalidation sink - outbound port.
///
/// Receives the exact keys a confirmed transaction dirtied; the consumer
/// decides how to re-fetch.
pub trait CacheSink: Send + Sync {
    /// Invalidate the given keys.
    fn invalidate(&self, keys: &[CacheKey]);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

#[derive(Default)]
struct MockLedgerState {
    /// Allowance per token address (mock simplification: one owner/spender).
    allowances: HashMap<Address, U256>,
    /// Scripted revert reasons per method for `simulate`.
    simulate_reverts: HashMap<String, String>,
    /// Scripted receipt outcomes, consumed in order; empty means success.
    receipt_script: VecDeque<ReceiptWait>,
    /// Requests behind each submitted tx hash.
    in_flight: HashMap<TxHash, CallRequest>,
    /// Everything submitted, in order.
    submitted: Vec<SignedCall>,
    next_tx: u8,
    allowance_reads: u32,
    simulations: u32,
}

/// Mock ledger for testing: reader + writer over scripted state.
#[derive(Default)]
pub struct MockLedger {
    state: Mutex<MockLedgerState>,
}

impl MockLedger {
    /// Set the current allowance for a token.
    pub fn set_allowance(&self, token: TokenId, amount: U256) {
        self.state.lock().allowances.insert(token.address, amount);
    }

    /// Script the next simulate of `method` to revert with `reason`.
    pub fn script_simulate_revert(&self, method: &str, reason: &str) {
        self.state
            .lock()
            .simulate_reverts
            .insert(method.to_string(), reason.to_string());
    }

    /// Script the next receipt wait outcome.
    pub fn script_receipt(&self, outcome: ReceiptWait) {
        self.state.lock().receipt_script.push_back(outcome);
    }

    /// Number of allowance reads so far.
    pub fn allowance_reads(&self) -> u32 {
        self.state.lock().allowance_reads
    }

    /// Number of simulations so far.
    pub fn simulations(&self) -> u32 {
        self.state.lock().simulations
    }

    /// Full requests submitted, in order.
    pub fn submitted_requests(&self) -> Vec<CallRequest> {
        self.state
            .lock()
            .submitted
            .iter()
            .map(|call| call.params.request.clone())
            .collect()
    }

    /// Methods submitted, in order.
    pub fn submitted_methods(&self) -> Vec<String> {
        self.state
            .lock()
            .submitted
            .iter()
            .map(|call| call.params.request.method.clone())
            .collect()
    }
}

#[async_trait]
impl LedgerReader for MockLedger {
    async fn allowance(
        &self,
        _owner: Address,
        token: TokenId,
        _spender: Address,
    ) -> Result<U256, LedgerFault> {
        let mut state = self.state.lock();
        state.allowance_reads += 1;
        Ok(state
            .allowances
            .get(&token.address)
            .copied()
            .unwrap_or_default())
    }

    async fn call(&self, _request: &CallRequest) -> Result<Vec<u8>, LedgerFault> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl LedgerWriter for MockLedger {
    async fn simulate(&self, request: &CallRequest) -> Result<CallParameters, LedgerFault> {
        let mut state = self.state.lock();
        state.simulations += 1;
        if let Some(reason) = state.simulate_reverts.remove(&request.method) {
            return Err(LedgerFault::Revert(reason));
        }
        Ok(CallParameters {
            request: request.clone(),
            gas_limit: U256::from(200_000u64),
        })
    }

    async fn submit(&self, call: SignedCall) -> Result<TxHash, LedgerFault> {
        let mut state = self.state.lock();
        state.next_tx += 1;
        let tx_hash = [state.next_tx; 32];
        state.in_flight.insert(tx_hash, call.params.request.clone());
        state.submitted.push(call);
        Ok(tx_hash)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        _timeout: Duration,
    ) -> Result<ReceiptWait, LedgerFault> {
        let mut state = self.state.lock();
        let outcome = state
            .receipt_script
            .pop_front()
            .unwrap_or(ReceiptWait::Mined(Receipt {
                tx_hash,
                success: true,
                revert_reason: None,
                block_number: 1,
            }));
        // A confirmed approval takes effect on the mock allowance.
        if let ReceiptWait::Mined(receipt) = &outcome {
            if receipt.success {
                if let Some(request) = state.in_flight.get(&tx_hash).cloned() {
                    if request.method == "approve" {
                        state.allowances.insert(request.to, request.amount);
                    }
                }
            }
        }
        Ok(outcome)
    }
}

/// Mock wallet signer.
#[derive(Default)]
pub struct MockSigner {
    /// Decline every signature request.
    pub decline: bool,
    signed: Mutex<u32>,
}

impl MockSigner {
    /// A signer that declines every request.
    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::default()
        }
    }

    /// Number of signatures granted.
    pub fn signed_count(&self) -> u32 {
        *self.signed.lock()
    }
}

#[async_trait]
impl WalletSigner for MockSigner {
    async fn sign(&self, params: CallParameters) -> Result<SignedCall, Declined> {
        if self.decline {
            return Err(Declined);
        }
        *self.signed.lock() += 1;
        Ok(SignedCall {
            params,
            signature: vec![0xAB; 65],
        })
    }
}

/// Mock quote provider charging a flat fee.
#[derive(Default)]
pub struct MockQuoteProvider {
    /// Flat fee deducted from every quote.
    pub fee: U256,
    /// Fail every request.
    pub unavailable: bool,
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    async fn quote(
        &self,
        _origin: TokenId,
        _dest: TokenId,
        amount: U256,
    ) -> Result<Quote, QuoteFault> {
        if self.unavailable {
            return Err(QuoteFault("provider offline".to_string()));
        }
        Ok(Quote {
            amount_out: amount.saturating_sub(self.fee),
            fee: self.fee,
        })
    }
}

/// Cache sink that records every invalidation batch.
#[derive(Default)]
pub struct RecordingCacheSink {
    batches: Mutex<Vec<Vec<CacheKey>>>,
}

impl RecordingCacheSink {
    /// All invalidation batches received so far.
    pub fn batches(&self) -> Vec<Vec<CacheKey>> {
        self.batches.lock().clone()
    }
}

impl CacheSink for RecordingCacheSink {
    fn invalidate(&self, keys: &[CacheKey]) {
        self.batches.lock().push(keys.to_vec());
    }
}
