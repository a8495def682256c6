//! # Service Layer
//!
//! The async driver that walks an intent through the state machine.

pub mod cancel;
pub mod orchestrator;

pub use cancel::CancelToken;
pub use orchestrator::Orchestrator;
