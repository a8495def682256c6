//! # Orchestrator Domain
//!
//! Intents, the state machine, call/receipt types, revert decoding, and
//! errors.

pub mod call;
pub mod errors;
pub mod intent;
pub mod revert;
pub mod state;
