//! Randomized invariants for the fixed-point and conversion layers.

#[cfg(test)]
mod tests {
    use primitive_types::U256;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crucible_accounting::{TokenAdapter, VaultSnapshot, YieldTokenParams};
    use crucible_math::{min_out, mul_div, scale, Ppm};
    use crucible_types::{ChainId, TokenId, VaultId};

    const CASES: usize = 500;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn snapshot(total_shares: U256, active: U256, expected: U256, price: U256) -> VaultSnapshot {
        VaultSnapshot {
            vault: VaultId::standard(
                TokenId::new(ChainId::Ethereum, [1u8; 20]),
                TokenId::new(ChainId::Ethereum, [2u8; 20]),
            ),
            params: YieldTokenParams {
                total_shares,
                active_balance: active,
                expected_value: expected,
                maximum_expected_value: U256::max_value(),
                decimals: 18,
            },
            adapter: TokenAdapter::new(price),
            underlying_decimals: 18,
        }
    }

    /// Price at or above par bounds the round-trip loss at one unit per
    /// floor division.
    #[test]
    fn test_yield_underlying_round_trip_loses_at_most_two_units() {
        let mut rng = rng();
        for _ in 0..CASES {
            let amount = U256::from(rng.gen_range(0..u64::MAX));
            let price = U256::exp10(18) + U256::from(rng.gen_range(0..10u64.pow(18)));
            let s = snapshot(U256::zero(), U256::zero(), U256::zero(), price);

            let underlying = s.yield_to_underlying(amount).unwrap();
            let back = s.underlying_to_yield(underlying).unwrap();

            assert!(back <= amount, "round trip gained: {} -> {}", amount, back);
            assert!(
                amount - back <= U256::from(2u64),
                "lost more than 2 units at amount={} price={}",
                amount,
                price
            );
        }
    }

    /// Floor rounding means a shares round trip can lose but never gain.
    #[test]
    fn test_shares_round_trip_never_gains() {
        let mut rng = rng();
        for _ in 0..CASES {
            let total_shares = U256::from(rng.gen_range(1..u64::MAX));
            let balance = U256::from(rng.gen_range(1..u64::MAX));
            let shares = U256::from(rng.gen_range(0..u64::MAX));
            let s = snapshot(total_shares, balance, U256::max_value(), U256::exp10(18));

            let amount_yield = s.shares_to_yield(shares).unwrap();
            let back = s.yield_to_shares(amount_yield).unwrap();
            assert!(
                back <= shares,
                "round trip gained shares: {} -> {} (T={}, B={})",
                shares,
                back,
                total_shares,
                balance
            );
        }
    }

    /// More shares never convert to fewer yield tokens.
    #[test]
    fn test_shares_to_yield_is_monotone() {
        let mut rng = rng();
        for _ in 0..CASES {
            let total_shares = U256::from(rng.gen_range(1..u64::MAX));
            let balance = U256::from(rng.gen_range(1..u64::MAX));
            let a = U256::from(rng.gen_range(0..u64::MAX));
            let b = U256::from(rng.gen_range(0..u64::MAX));
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let s = snapshot(total_shares, balance, U256::max_value(), U256::exp10(18));

            let lo_yield = s.shares_to_yield(lo).unwrap();
            let hi_yield = s.shares_to_yield(hi).unwrap();
            assert!(lo_yield <= hi_yield);
        }
    }

    /// The harvest adjustment only ever removes balance, and removes
    /// nothing when the vault sits at or below its realized basis.
    #[test]
    fn test_unrealized_balance_bounded_by_active() {
        let mut rng = rng();
        for _ in 0..CASES {
            let active = U256::from(rng.gen_range(0..u64::MAX));
            let expected = U256::from(rng.gen_range(0..u64::MAX));
            let price = U256::exp10(18) + U256::from(rng.gen_range(0..10u64.pow(18)));
            let s = snapshot(active, active, expected, price);

            let balance = s.unrealized_active_balance().unwrap();
            assert!(balance <= active);

            let current = s.yield_to_underlying(active).unwrap();
            if current <= expected {
                assert_eq!(balance, active);
            }
        }
    }

    /// Down-scaling truncates at most the dropped digits; up-scaling is
    /// exact.
    #[test]
    fn test_scale_round_trip_bounded_by_truncated_digits() {
        let mut rng = rng();
        for _ in 0..CASES {
            let amount = U256::from(rng.gen_range(0..u64::MAX));
            let down = scale(amount, 18, 6).unwrap();
            let back = scale(down, 6, 18).unwrap();
            assert!(back <= amount);
            assert!(amount - back < U256::exp10(12));
        }
    }

    /// `min_out` deducts exactly the floor of the proportional tolerance.
    #[test]
    fn test_min_out_deduction_is_exact() {
        let mut rng = rng();
        for _ in 0..CASES {
            let amount = U256::from(rng.gen_range(0..u64::MAX));
            let ppm = Ppm::new(rng.gen_range(0..=1_000_000)).unwrap();
            let bound = min_out(amount, ppm).unwrap();
            let deduction = mul_div(amount, U256::from(ppm.value()), U256::from(1_000_000u64))
                .unwrap();
            assert_eq!(bound, amount - deduction);
        }
    }
}
