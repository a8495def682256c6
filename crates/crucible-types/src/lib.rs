//! # Shared Types Crate
//!
//! Cross-crate domain types for the Crucible CDP client.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Types shared by more than one crate are
//!   defined here, never duplicated downstream.
//! - **Immutable Registries**: `Token` metadata is loaded once and passed
//!   explicitly into constructors; no crate reads ambient global state.
//! - **Exact Amounts**: Every amount that can affect solvency is a `U256`
//!   paired with a decimal count. Floating point exists only in
//!   display-only helpers, clearly marked as such.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod value_objects;

pub use entities::{AlchemistId, Token, VaultId, VaultKind};
pub use value_objects::{ActionKind, Address, CacheKey, ChainId, Debt, TokenId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
