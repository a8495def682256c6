//! # Orchestrator Configuration
//!
//! Immutable, constructed once at process start and passed in explicitly;
//! never read from ambient global state.

use crucible_types::ChainId;
use std::collections::HashMap;
use std::time::Duration;

/// Orchestrator configuration.
#[derive(Clone, Debug)]
pub struct OrchestratorConfig {
    /// Per-network overrides for the confirmation-wait bound. Networks
    /// without an override use [`ChainId::default_confirmation_timeout_secs`].
    pub confirmation_timeouts: HashMap<ChainId, Duration>,
    /// Bound on a single wallet signature request. A wallet that never
    /// answers must not hold the intent in a cancellable state forever.
    pub signature_timeout: Duration,
    /// Bound on a single ledger round trip (allowance read, simulation,
    /// submission) or quote request.
    pub request_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            confirmation_timeouts: HashMap::new(),
            signature_timeout: Duration::from_secs(300),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl OrchestratorConfig {
    /// Confirmation-wait bound for a network.
    ///
    /// Must be large enough to avoid false `TimedOut` on normal latency;
    /// crossing it is advisory, not an error.
    pub fn confirmation_timeout(&self, chain: ChainId) -> Duration {
        self.confirmation_timeouts
            .get(&chain)
            .copied()
            .unwrap_or_else(|| Duration::from_secs(chain.default_confirmation_timeout_secs()))
    }

    /// Override the confirmation timeout for one network.
    pub fn with_confirmation_timeout(mut self, chain: ChainId, timeout: Duration) -> Self {
        self.confirmation_timeouts.insert(chain, timeout);
        self
    }

    /// Override the wallet signature bound.
    pub fn with_signature_timeout(mut self, timeout: Duration) -> Self {
        self.signature_timeout = timeout;
        self
    }
}
