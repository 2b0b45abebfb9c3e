//! Property-based tests for risk engine invariants
//!
//! These tests use proptest to verify critical invariants:
//! - VaR always lies within the observed return range
//! - Expected shortfall never exceeds the VaR threshold
//! - Every risk score is clamped to [0, 1], even for wild inputs
//! - A no-op shock scenario reproduces the baseline exactly

use proptest::collection::vec;
use proptest::prelude::*;
use risk_engine::{
    statistics::{expected_shortfall, liquidity_metrics, value_at_risk},
    AdjacencyMatrix, BaselineConditions, CompositeScorer, RiskAnalytics, ShockScenario,
    StressTester, TradingMetrics,
};
use std::collections::BTreeMap;

/// Strategy for generating non-empty return series
fn returns_strategy() -> impl Strategy<Value = Vec<f64>> {
    vec(-0.5f64..0.5f64, 1..200)
}

/// Strategy for generating confidence levels strictly inside (0, 1)
fn confidence_strategy() -> impl Strategy<Value = f64> {
    0.01f64..0.99f64
}

/// Strategy for generating 0/1 adjacency matrices on 2..=8 nodes
fn adjacency_strategy() -> impl Strategy<Value = AdjacencyMatrix> {
    (2usize..=8)
        .prop_flat_map(|n| (Just(n), vec(prop::bool::ANY, n * (n - 1) / 2)))
        .prop_map(|(n, upper)| {
            let mut rows = vec![vec![0.0; n]; n];
            let mut idx = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    let w = if upper[idx] { 1.0 } else { 0.0 };
                    rows[i][j] = w;
                    rows[j][i] = w;
                    idx += 1;
                }
            }
            AdjacencyMatrix::new(rows).expect("generated matrix is valid")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: VaR lies within [min, max] of the series
    #[test]
    fn prop_var_within_observed_range(
        returns in returns_strategy(),
        confidence in confidence_strategy(),
    ) {
        let var = value_at_risk(&returns, confidence).unwrap();
        let min = returns.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = returns.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(var >= min && var <= max);
    }

    /// Property: ES never exceeds the VaR threshold it conditions on
    #[test]
    fn prop_expected_shortfall_at_most_var(
        returns in returns_strategy(),
        confidence in confidence_strategy(),
    ) {
        let var = value_at_risk(&returns, confidence).unwrap();
        // The minimum always sits in the tail, so ES is defined
        let es = expected_shortfall(&returns, var).unwrap();
        prop_assert!(es <= var);
    }

    /// Property: liquidity risk is clamped for arbitrary inputs
    #[test]
    fn prop_liquidity_risk_clamped(
        volume in -1e9f64..1e9,
        market_cap in 1e-3f64..1e12,
        spread in 0.0f64..10.0,
    ) {
        let analytics = RiskAnalytics::default();
        let score = analytics.liquidity_risk(volume, market_cap, spread).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: operational risk is clamped for arbitrary inputs
    #[test]
    fn prop_operational_risk_clamped(
        uptime in -1.0f64..2.0,
        volume in 0.0f64..1e9,
        error_rate in -1.0f64..10.0,
    ) {
        let analytics = RiskAnalytics::default();
        let score = analytics.operational_risk(uptime, volume, error_rate);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: systemic risk is clamped for arbitrary inputs
    #[test]
    fn prop_systemic_risk_clamped(
        network_size in 0u32..10_000_000,
        concentration in -2.0f64..2.0,
        interdependency in -2.0f64..2.0,
    ) {
        let analytics = RiskAnalytics::default();
        let score = analytics.systemic_risk(network_size, concentration, interdependency);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: the systemic composite is clamped for arbitrary components
    #[test]
    fn prop_systemic_composite_clamped(
        network in -100.0f64..100.0,
        liquidity in -100.0f64..100.0,
        operational in -100.0f64..100.0,
    ) {
        let scorer = CompositeScorer::default();
        let score = scorer.systemic(network, liquidity, operational);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: clustering coefficient of a 0/1 graph lies in [0, 1]
    /// and centralization is normalized
    #[test]
    fn prop_network_metrics_normalized(matrix in adjacency_strategy()) {
        let metrics = matrix.metrics().unwrap();
        prop_assert!((0.0..=1.0).contains(&metrics.clustering_coefficient));
        prop_assert!((0.0..=1.0).contains(&metrics.centralization));
        prop_assert!(metrics.average_degree >= 0.0);
        prop_assert!(metrics.edge_count >= 0.0);
    }

    /// Property: an empty shock map reproduces the baseline pipeline
    #[test]
    fn prop_noop_scenario_is_identity(
        matrix in adjacency_strategy(),
        volume in 1.0f64..1e9,
        market_cap in 1.0f64..1e9,
        spread in 0.0f64..0.5,
    ) {
        let baseline = BaselineConditions {
            trading_volume: volume,
            market_cap,
            bid_ask_spread: spread,
            market_depth: volume / 2.0,
            uptime: 0.999,
            transaction_volume: volume,
            error_rate: 0.0001,
        };

        let tester = StressTester::default();
        let results = tester
            .run(
                &baseline,
                &[ShockScenario {
                    name: "noop".to_string(),
                    shocks: BTreeMap::new(),
                    network: matrix,
                }],
            )
            .unwrap();

        let expected = liquidity_metrics(&TradingMetrics {
            volume,
            market_cap,
            spread,
            depth: volume / 2.0,
        })
        .unwrap();

        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(results[0].liquidity_risk, expected.liquidity_ratio);
    }
}
