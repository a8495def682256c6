//! # Migration Preview
//!
//! Moving a position's value between vaults without exiting to underlying.
//! The preview converts shares out of the source snapshot, into the
//! destination snapshot, and derives the two slippage-protected minimums
//! the migration call must supply.
//!
//! Infeasibility is a value, not an error: callers branch on it routinely
//! (e.g. to disable a button), so it is kept out of the `Err` channel.

use super::errors::LimitError;
use super::limits::available_credit;
use super::position::AlchemistState;
use crucible_accounting::VaultSnapshot;
use crucible_math::{min_out, scale, Ppm};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Slippage-protected parameters for a migration call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPreview {
    /// Destination shares expected at current prices.
    pub expected_shares: U256,
    /// Minimum acceptable destination shares.
    pub min_shares: U256,
    /// Minimum acceptable destination underlying value.
    pub min_underlying: U256,
}

/// Why a migration cannot proceed, mirroring the on-chain preconditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MigrationInfeasible {
    /// The migrated value, in debt units, exceeds the account's available
    /// credit at the destination Alchemist.
    InsufficientCredit {
        /// Credit the migration would need.
        needed: U256,
        /// Credit actually available.
        available: U256,
    },
    /// The destination vault's deposit cap cannot absorb the migrated
    /// value.
    DepositCapExceeded {
        /// Underlying value being migrated.
        needed: U256,
        /// Capacity remaining under the destination cap.
        remaining: U256,
    },
}

/// Feasibility outcome of a migration preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MigrationOutcome {
    /// Migration can proceed with these call parameters.
    Feasible(MigrationPreview),
    /// Migration would revert; reason attached.
    Infeasible(MigrationInfeasible),
}

/// Preview a migration of `share_amount` from `source` to `dest`.
///
/// `min_out` is applied twice — once to destination shares, once to
/// destination underlying — because the on-chain migration checks both
/// bounds independently.
pub fn migration_preview(
    source: &VaultSnapshot,
    dest: &VaultSnapshot,
    dest_alchemist: &AlchemistState,
    share_amount: U256,
    slippage: Ppm,
) -> Result<MigrationOutcome, LimitError> {
    let underlying = source.shares_to_underlying(share_amount)?;
    let underlying_at_dest = scale(
        underlying,
        source.underlying_decimals,
        dest.underlying_decimals,
    )?;

    let remaining = dest.params.remaining_capacity();
    if underlying_at_dest > remaining {
        return Ok(MigrationOutcome::Infeasible(
            MigrationInfeasible::DepositCapExceeded {
                needed: underlying_at_dest,
                remaining,
            },
        ));
    }

    // The migrator mints transient debt at the destination bounded by the
    // account's credit there.
    let value_in_debt = scale(
        underlying_at_dest,
        dest.underlying_decimals,
        dest_alchemist.debt_decimals,
    )?;
    let credit = available_credit(dest_alchemist)?;
    if value_in_debt > credit {
        return Ok(MigrationOutcome::Infeasible(
            MigrationInfeasible::InsufficientCredit {
                needed: value_in_debt,
                available: credit,
            },
        ));
    }

    let expected_shares = dest.underlying_to_shares(underlying_at_dest)?;
    Ok(MigrationOutcome::Feasible(MigrationPreview {
        expected_shares,
        min_shares: min_out(expected_shares, slippage)?,
        min_underlying: min_out(underlying_at_dest, slippage)?,
    }))
}
