//! # Revert Reason Decoding
//!
//! Maps raw revert strings from simulation or confirmation into the known
//! protocol error set. A decoded name is always preferred over a generic
//! "execution reverted" message in anything user-visible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded revert reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevertReason {
    /// Output fell below the slippage minimum.
    InsufficientOutput,
    /// A protocol limit (deposit cap, mint cap) was exceeded.
    LimitExceeded,
    /// The action would leave the position undercollateralized.
    Undercollateralized,
    /// The token is not registered with the target contract.
    UnsupportedToken,
    /// Unrecognized; the raw message is preserved verbatim.
    Other(String),
}

impl RevertReason {
    /// Decode a raw revert string into the known error set.
    ///
    /// Matching is substring-based over the messages the protocol
    /// contracts actually emit; anything unrecognized is passed through as
    /// `Other` rather than discarded.
    pub fn decode(raw: &str) -> Self {
        let lowered = raw.to_ascii_lowercase();
        if lowered.contains("slippage") || lowered.contains("insufficient output") {
            Self::InsufficientOutput
        } else if lowered.contains("limit") || lowered.contains("cap exceeded") {
            Self::LimitExceeded
        } else if lowered.contains("undercollateralized") {
            Self::Undercollateralized
        } else if lowered.contains("unsupported token") || lowered.contains("token not registered")
        {
            Self::UnsupportedToken
        } else {
            Self::Other(raw.to_string())
        }
    }
}

impl fmt::Display for RevertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientOutput => write!(f, "output below slippage minimum"),
            Self::LimitExceeded => write!(f, "protocol limit exceeded"),
            Self::Undercollateralized => write!(f, "position would be undercollateralized"),
            Self::UnsupportedToken => write!(f, "token not supported"),
            Self::Other(raw) => write!(f, "{}", raw),
        }
    }
}
