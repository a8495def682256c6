//! # Call Types
//!
//! Abstract request/parameter/receipt shapes exchanged with the ledger
//! boundary. The ledger itself (RPC encoding, gas estimation, nonces) is an
//! external collaborator behind the outbound ports.

use crucible_types::{Address, ChainId};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Transaction hash.
pub type TxHash = [u8; 32];

/// A call the orchestrator wants dry-run and executed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Network to execute on.
    pub chain: ChainId,
    /// Target contract.
    pub to: Address,
    /// Method name at the abstract contract interface.
    pub method: String,
    /// Primary amount argument.
    pub amount: U256,
    /// Additional arguments (slippage minimums, recipients encoded
    /// upstream, quote outputs).
    pub args: Vec<U256>,
}

/// Exact parameters produced by a successful simulation.
///
/// Simulation resolves gas and pins the call bytes; these are what the
/// wallet is asked to sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallParameters {
    /// The simulated request.
    pub request: CallRequest,
    /// Gas limit the simulation settled on.
    pub gas_limit: U256,
}

/// A wallet-signed call, ready for broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedCall {
    /// Parameters that were signed.
    pub params: CallParameters,
    /// Opaque signature bytes.
    pub signature: Vec<u8>,
}

/// A mined transaction receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Transaction hash.
    pub tx_hash: TxHash,
    /// True when the transaction succeeded.
    pub success: bool,
    /// Raw revert reason when `success` is false.
    pub revert_reason: Option<String>,
    /// Block the transaction landed in.
    pub block_number: u64,
}
