//! Randomized invariants for the position-limit calculators.
//!
//! Every limit is a "maximum safe amount": these tests reconstruct the
//! post-action state for random positions and re-check the safety
//! condition in exact product space, with no division on the checking
//! side.

#[cfg(test)]
mod tests {
    use primitive_types::U256;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crucible_accounting::{TokenAdapter, VaultSnapshot, YieldTokenParams};
    use crucible_limits::{
        available_credit, available_deposit, available_liquidate, available_withdraw,
        AlchemistState, Position, COLLATERALIZATION_SCALE,
    };
    use crucible_math::mul_div_up;
    use crucible_types::{ChainId, Debt, TokenId, VaultId};

    const CASES: usize = 500;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xc0ffee)
    }

    /// Identity snapshot: price 1.0 and balance == total shares, so shares,
    /// yield, and underlying all convert one-for-one.
    fn identity_snapshot(cap: U256) -> VaultSnapshot {
        let pool = U256::exp10(24);
        VaultSnapshot {
            vault: VaultId::standard(
                TokenId::new(ChainId::Ethereum, [1u8; 20]),
                TokenId::new(ChainId::Ethereum, [2u8; 20]),
            ),
            params: YieldTokenParams {
                total_shares: pool,
                active_balance: pool,
                expected_value: pool,
                maximum_expected_value: cap,
                decimals: 18,
            },
            adapter: TokenAdapter::new(U256::exp10(18)),
            underlying_decimals: 18,
        }
    }

    fn position(shares: U256) -> Position {
        Position {
            account: [7u8; 20],
            vault: TokenId::new(ChainId::Ethereum, [1u8; 20]),
            shares,
        }
    }

    /// Random collateralization ratio in [1.0, 3.0), scaled by 1e18.
    fn random_ratio(rng: &mut StdRng) -> U256 {
        U256::exp10(18) + U256::from(rng.gen_range(0..2 * 10u64.pow(18)))
    }

    /// Minting the full available credit lands exactly at (or under) the
    /// minimum collateralization, never past it.
    #[test]
    fn test_borrowing_full_credit_keeps_minimum_collateralization() {
        let mut rng = rng();
        for _ in 0..CASES {
            let total_value = U256::from(rng.gen_range(0..u64::MAX));
            let ratio = random_ratio(&mut rng);
            let capacity = total_value * U256::exp10(18) / ratio;
            // Debt at a random fraction of capacity, so the position starts
            // healthy.
            let debt = capacity * U256::from(rng.gen_range(0..=1000u64)) / U256::from(1000u64);

            let state = AlchemistState {
                debt: Debt::owed(debt),
                total_value,
                minimum_collateralization: ratio,
                debt_decimals: 18,
            };
            let credit = available_credit(&state).unwrap();

            let new_debt = debt + credit;
            assert!(
                new_debt.full_mul(ratio) <= total_value.full_mul(COLLATERALIZATION_SCALE),
                "over-minted: debt={} credit={} total={} ratio={}",
                debt,
                credit,
                total_value,
                ratio
            );
        }
    }

    /// Withdrawing the full limit leaves the remaining collateral covering
    /// the debt at the minimum ratio.
    #[test]
    fn test_withdraw_limit_preserves_collateral_cover() {
        let mut rng = rng();
        let snapshot = identity_snapshot(U256::max_value());
        for _ in 0..CASES {
            let debt = U256::from(rng.gen_range(0..u64::MAX / 4));
            let ratio = random_ratio(&mut rng);
            let required = mul_div_up(debt, ratio, COLLATERALIZATION_SCALE).unwrap();
            // Total collateral always covers the requirement; the vault
            // under test holds a random slice of it.
            let total_value = required + U256::from(rng.gen_range(0..u64::MAX));
            let collateral =
                total_value * U256::from(rng.gen_range(0..=1000u64)) / U256::from(1000u64);

            let state = AlchemistState {
                debt: Debt::owed(debt),
                total_value,
                minimum_collateralization: ratio,
                debt_decimals: 18,
            };
            let w = available_withdraw(&position(collateral), &state, &snapshot).unwrap();

            assert!(w.in_debt_units <= collateral);
            let remaining = total_value - w.in_debt_units;
            assert!(
                debt.full_mul(ratio) <= remaining.full_mul(COLLATERALIZATION_SCALE),
                "uncovered after withdraw: debt={} ratio={} total={} collateral={} limit={}",
                debt,
                ratio,
                total_value,
                collateral,
                w.in_debt_units
            );
        }
    }

    /// A liquidation is bounded by both the position and the debt it
    /// cancels.
    #[test]
    fn test_liquidation_never_exceeds_position_or_debt() {
        let mut rng = rng();
        let snapshot = identity_snapshot(U256::max_value());
        for _ in 0..CASES {
            let shares = U256::from(rng.gen_range(0..u64::MAX));
            let debt = U256::from(rng.gen_range(0..u64::MAX));
            let state = AlchemistState {
                debt: Debt::owed(debt),
                total_value: shares,
                minimum_collateralization: U256::exp10(18),
                debt_decimals: 18,
            };
            let max = available_liquidate(&position(shares), &state, &snapshot).unwrap();
            assert!(max <= shares);
            assert!(max <= debt);
        }
    }

    /// An accepted deposit never pushes the vault past its cap.
    #[test]
    fn test_deposit_never_exceeds_remaining_capacity() {
        let mut rng = rng();
        for _ in 0..CASES {
            let cap = U256::from(rng.gen_range(0..u64::MAX));
            let held = cap * U256::from(rng.gen_range(0..=1000u64)) / U256::from(1000u64);
            let requested = U256::from(rng.gen_range(0..u64::MAX));

            let mut snapshot = identity_snapshot(cap);
            snapshot.params.expected_value = held;
            let accepted = available_deposit(&snapshot, requested).unwrap();

            assert!(accepted <= requested);
            assert!(held + accepted <= cap);
        }
    }
}
