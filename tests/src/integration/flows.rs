//! # Integration Test Flows
//!
//! Tests that crucible-accounting, crucible-limits, and
//! crucible-orchestrator work together: a snapshot is read, a limit is
//! computed from it, an intent is built within that limit, and the
//! orchestrator drives the intent over mock ports.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use primitive_types::U256;

    use crucible_accounting::{TokenAdapter, VaultSnapshot, YieldTokenParams};
    use crucible_limits::{
        available_credit, available_deposit, available_liquidate, available_withdraw,
        migration_preview, resolve_withdraw_route, AlchemistState, MigrationInfeasible,
        MigrationOutcome, Position, WithdrawRoute,
    };
    use crucible_math::{min_out, Ppm};
    use crucible_orchestrator::{
        CacheSink, CancelToken, ExecutionOutcome, IntentPayload, MockLedger, MockQuoteProvider,
        MockSigner, Orchestrator, OrchestratorApi, OrchestratorConfig, OrchestratorError,
        RecordingCacheSink, RevertReason, TransactionIntent,
    };
    use crucible_types::{AlchemistId, CacheKey, ChainId, Debt, TokenId, VaultId};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn e18(n: u64) -> U256 {
        U256::from(n) * U256::exp10(18)
    }

    fn tid(byte: u8) -> TokenId {
        TokenId::new(ChainId::Ethereum, [byte; 20])
    }

    fn vault_id() -> VaultId {
        VaultId::standard(tid(1), tid(2))
    }

    fn alchemist_id() -> AlchemistId {
        AlchemistId { debt_token: tid(9) }
    }

    /// Par snapshot: price 1.0, no unharvested yield.
    fn par_snapshot(active: U256, cap: U256) -> VaultSnapshot {
        VaultSnapshot {
            vault: vault_id(),
            params: YieldTokenParams {
                total_shares: active,
                active_balance: active,
                expected_value: active,
                maximum_expected_value: cap,
                decimals: 18,
            },
            adapter: TokenAdapter::new(U256::exp10(18)),
            underlying_decimals: 18,
        }
    }

    fn alchemist_state(debt: Debt, total_value: U256) -> AlchemistState {
        AlchemistState {
            debt,
            total_value,
            minimum_collateralization: e18(15) / 10,
            debt_decimals: 18,
        }
    }

    struct Harness {
        ledger: Arc<MockLedger>,
        signer: Arc<MockSigner>,
        cache: Arc<RecordingCacheSink>,
        orchestrator: Orchestrator<MockLedger, MockLedger, MockSigner, MockQuoteProvider>,
    }

    fn harness_with_quotes(quotes: MockQuoteProvider) -> Harness {
        let ledger = Arc::new(MockLedger::default());
        let signer = Arc::new(MockSigner::default());
        let cache = Arc::new(RecordingCacheSink::default());
        let orchestrator = Orchestrator::new(
            Arc::clone(&ledger),
            Arc::clone(&ledger),
            Arc::clone(&signer),
            Arc::new(quotes),
            Arc::clone(&cache) as Arc<dyn CacheSink>,
            OrchestratorConfig::default(),
        );
        Harness {
            ledger,
            signer,
            cache,
            orchestrator,
        }
    }

    fn harness() -> Harness {
        harness_with_quotes(MockQuoteProvider::default())
    }

    // =============================================================================
    // DEPOSIT: cap clamp -> slippage bound -> approve -> deposit
    // =============================================================================

    #[tokio::test]
    async fn test_deposit_flow_clamps_to_cap_then_approves_and_confirms() {
        // Vault holds 900 of a 1000 cap: a 500 request clamps to 100.
        let snapshot = par_snapshot(e18(900), e18(1000));
        let amount = available_deposit(&snapshot, e18(500)).unwrap();
        assert_eq!(amount, e18(100));

        let expected_shares = snapshot.underlying_to_shares(amount).unwrap();
        let slippage = Ppm::from_bps(50).unwrap();
        let min_shares = min_out(expected_shares, slippage).unwrap();

        let intent = TransactionIntent::new(
            [7u8; 20],
            amount,
            tid(2),
            [8u8; 20],
            IntentPayload::Deposit {
                vault: vault_id(),
                alchemist: alchemist_id(),
                min_shares,
            },
        );

        let h = harness();
        let outcome = h
            .orchestrator
            .execute(intent, CancelToken::new())
            .await
            .unwrap();
        assert!(matches!(outcome, ExecutionOutcome::Confirmed { .. }));

        // No prior allowance: approval precedes the deposit, for the exact
        // clamped amount.
        assert_eq!(h.ledger.submitted_methods(), vec!["approve", "deposit"]);
        let requests = h.ledger.submitted_requests();
        assert_eq!(requests[0].amount, amount);
        assert_eq!(requests[1].args, vec![min_shares]);

        // Confirmation invalidated the vault snapshot the deposit dirtied.
        let batches = h.cache.batches();
        assert_eq!(batches.len(), 1);
        assert!(batches[0].contains(&CacheKey::Vault { vault: tid(1) }));
    }

    // =============================================================================
    // BORROW: credit limit -> mint, no allowance branch
    // =============================================================================

    #[tokio::test]
    async fn test_borrow_up_to_available_credit() {
        let state = alchemist_state(Debt::owed(e18(400)), e18(1000));
        let credit = available_credit(&state).unwrap();
        assert!(credit > U256::zero());

        let intent = TransactionIntent::new(
            [7u8; 20],
            credit,
            tid(9),
            [8u8; 20],
            IntentPayload::Borrow {
                alchemist: alchemist_id(),
                recipient: [7u8; 20],
            },
        );

        let h = harness();
        let outcome = h
            .orchestrator
            .execute(intent, CancelToken::new())
            .await
            .unwrap();
        assert!(matches!(outcome, ExecutionOutcome::Confirmed { .. }));

        // Minting pulls nothing from the account: no allowance read, no
        // approval, straight to the mint call.
        assert_eq!(h.ledger.allowance_reads(), 0);
        assert_eq!(h.ledger.submitted_methods(), vec!["mint"]);

        let batches = h.cache.batches();
        assert!(batches[0].contains(&CacheKey::Alchemist {
            account: [7u8; 20],
            debt_token: tid(9),
        }));
    }

    // =============================================================================
    // WITHDRAW: collateral cover limit -> route dispatch
    // =============================================================================

    #[tokio::test]
    async fn test_withdraw_limit_drives_direct_route() {
        // Other vaults cover 600 of a 675 requirement: only 325 may leave.
        let snapshot = par_snapshot(e18(400), U256::max_value());
        let state = alchemist_state(Debt::owed(e18(450)), e18(1000));
        let position = Position {
            account: [7u8; 20],
            vault: tid(1),
            shares: e18(400),
        };
        let w = available_withdraw(&position, &state, &snapshot).unwrap();
        assert_eq!(w.underlying, e18(325));

        let route = resolve_withdraw_route(&vault_id());
        assert_eq!(route, WithdrawRoute::Direct);

        let intent = TransactionIntent::new(
            [7u8; 20],
            w.shares,
            tid(1),
            [8u8; 20],
            IntentPayload::Withdraw {
                vault: vault_id(),
                alchemist: alchemist_id(),
                route,
                recipient: [7u8; 20],
            },
        );

        let h = harness();
        let outcome = h
            .orchestrator
            .execute(intent, CancelToken::new())
            .await
            .unwrap();
        assert!(matches!(outcome, ExecutionOutcome::Confirmed { .. }));
        // Withdrawing moves tokens out of the protocol, not in: no approval.
        assert_eq!(h.ledger.allowance_reads(), 0);
        assert_eq!(h.ledger.submitted_methods(), vec!["withdraw"]);
    }

    // =============================================================================
    // MIGRATE: preview minimums flow into the call arguments
    // =============================================================================

    #[tokio::test]
    async fn test_migration_preview_parameters_flow_into_migrate_call() {
        let source = par_snapshot(e18(1000), U256::max_value());
        let dest = par_snapshot(e18(5000), U256::max_value());
        let dest_state = alchemist_state(Debt::zero(), e18(10_000));
        let slippage = Ppm::from_bps(30).unwrap();

        let outcome =
            migration_preview(&source, &dest, &dest_state, e18(100), slippage).unwrap();
        let MigrationOutcome::Feasible(preview) = outcome else {
            panic!("expected a feasible migration");
        };

        let intent = TransactionIntent::new(
            [7u8; 20],
            e18(100),
            tid(1),
            [8u8; 20],
            IntentPayload::Migrate {
                source: vault_id(),
                dest: VaultId::standard(tid(3), tid(4)),
                alchemist: alchemist_id(),
                min_shares: preview.min_shares,
                min_underlying: preview.min_underlying,
            },
        );

        let h = harness();
        let result = h
            .orchestrator
            .execute(intent, CancelToken::new())
            .await
            .unwrap();
        assert!(matches!(result, ExecutionOutcome::Confirmed { .. }));

        // Migration moves shares through the migrator: approve, then the
        // call carries exactly the preview's two minimums.
        assert_eq!(h.ledger.submitted_methods(), vec!["approve", "migrate"]);
        let requests = h.ledger.submitted_requests();
        assert_eq!(
            requests[1].args,
            vec![preview.min_shares, preview.min_underlying]
        );

        // Both vaults' snapshots are dirtied by a migration.
        let batches = h.cache.batches();
        assert!(batches[0].contains(&CacheKey::Vault { vault: tid(1) }));
        assert!(batches[0].contains(&CacheKey::Vault { vault: tid(3) }));
    }

    #[tokio::test]
    async fn test_infeasible_migration_is_reported_before_any_intent_exists() {
        let source = par_snapshot(e18(1000), U256::max_value());
        // Destination can absorb only 50 more underlying.
        let dest = par_snapshot(e18(5000), e18(5050));
        let dest_state = alchemist_state(Debt::zero(), e18(10_000));

        let outcome =
            migration_preview(&source, &dest, &dest_state, e18(100), Ppm::ZERO).unwrap();
        assert_eq!(
            outcome,
            MigrationOutcome::Infeasible(MigrationInfeasible::DepositCapExceeded {
                needed: e18(100),
                remaining: e18(50),
            })
        );
    }

    // =============================================================================
    // LIQUIDATE: limit from harvest-adjusted snapshot, revert decoding
    // =============================================================================

    #[tokio::test]
    async fn test_liquidate_simulation_revert_surfaces_decoded_reason() {
        let snapshot = par_snapshot(e18(1000), U256::max_value());
        let state = alchemist_state(Debt::owed(e18(150)), e18(400));
        let position = Position {
            account: [7u8; 20],
            vault: tid(1),
            shares: e18(400),
        };
        let max = available_liquidate(&position, &state, &snapshot).unwrap();
        assert_eq!(max, e18(150));

        let intent = TransactionIntent::new(
            [7u8; 20],
            max,
            tid(1),
            [8u8; 20],
            IntentPayload::Liquidate {
                vault: vault_id(),
                alchemist: alchemist_id(),
                min_underlying: min_out(max, Ppm::from_bps(50).unwrap()).unwrap(),
            },
        );

        let h = harness();
        h.ledger
            .script_simulate_revert("liquidate", "LimitExceeded(uint256)");
        let err = h
            .orchestrator
            .execute(intent, CancelToken::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrchestratorError::Simulation(RevertReason::LimitExceeded)
        );
        // Decoded and reported; nothing signed, nothing submitted, nothing
        // invalidated.
        assert_eq!(h.signer.signed_count(), 0);
        assert!(h.ledger.submitted_methods().is_empty());
        assert!(h.cache.batches().is_empty());
    }

    #[tokio::test]
    async fn test_liquidate_limit_uses_harvest_adjusted_balance() {
        // active=1000, expected=900, price=1.1: the harvestable gain is
        // stripped before shares convert, so the liquidatable amount shrinks
        // versus the naive balance.
        let price = e18(11) / 10;
        let snapshot = VaultSnapshot {
            vault: vault_id(),
            params: YieldTokenParams {
                total_shares: e18(1000),
                active_balance: e18(1000),
                expected_value: e18(900),
                maximum_expected_value: U256::max_value(),
                decimals: 18,
            },
            adapter: TokenAdapter::new(price),
            underlying_decimals: 18,
        };
        let naive = par_snapshot(e18(1000), U256::max_value());
        let state = alchemist_state(Debt::owed(e18(900)), e18(1000));
        let position = Position {
            account: [7u8; 20],
            vault: tid(1),
            shares: e18(500),
        };

        let adjusted = available_liquidate(&position, &state, &snapshot).unwrap();
        let unadjusted = available_liquidate(&position, &state, &naive).unwrap();
        assert!(adjusted < unadjusted);
    }

    // =============================================================================
    // BRIDGE: quote failure aborts before anything is signed
    // =============================================================================

    #[tokio::test]
    async fn test_unavailable_quote_aborts_bridge_before_signing() {
        let h = harness_with_quotes(MockQuoteProvider {
            fee: U256::zero(),
            unavailable: true,
        });
        // Allowance already covers the bridge amount; the quote is the
        // first thing that can fail.
        h.ledger.set_allowance(tid(9), e18(1));

        let intent = TransactionIntent::new(
            [7u8; 20],
            e18(1),
            tid(9),
            [8u8; 20],
            IntentPayload::Bridge {
                dest_chain: ChainId::Optimism,
                dest_token: TokenId::new(ChainId::Optimism, [9u8; 20]),
                slippage: Ppm::from_bps(100).unwrap(),
            },
        );

        let err = h
            .orchestrator
            .execute(intent, CancelToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::Network(_)));
        assert_eq!(h.signer.signed_count(), 0);
        assert!(h.ledger.submitted_methods().is_empty());
    }
}
