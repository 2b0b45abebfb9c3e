//! Property-based tests for compliance engine invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Reserve adequacy is always capped at 1.0
//! - AML and compliance risk scores stay within [0, 1]
//! - KYC completion never exceeds 1.0 for consistent inputs

use compliance_engine::{ComplianceEngine, FrameworkMonitor, Jurisdiction};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn jurisdiction_strategy() -> impl Strategy<Value = Jurisdiction> {
    prop::sample::select(Jurisdiction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: reserve adequacy is capped at 1.0 for any positive book
    #[test]
    fn prop_reserve_adequacy_capped(
        liabilities in 1u64..1_000_000_000,
        assets in 0u64..1_000_000_000,
        jurisdiction in jurisdiction_strategy(),
    ) {
        let engine = ComplianceEngine::default();
        let ratio = engine
            .check_reserve_adequacy(
                Decimal::from(liabilities),
                Decimal::from(assets),
                jurisdiction,
            )
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    /// Property: the AML score is clamped for arbitrary observations
    #[test]
    fn prop_aml_score_clamped(
        volume in 0.0f64..1e12,
        suspicious in 0u64..1_000_000,
        risk_score in -2.0f64..2.0,
    ) {
        let engine = ComplianceEngine::default();
        let score = engine.aml_score(volume, suspicious, risk_score);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: KYC completion lies in [0, 1] when completions fit the
    /// population
    #[test]
    fn prop_kyc_completion_bounded(total in 1u64..10_000_000) {
        let engine = ComplianceEngine::default();
        let completed = total / 2;
        let rate = engine.kyc_completion(total, completed);
        prop_assert!((0.0..=1.0).contains(&rate));
    }

    /// Property: the compliance risk score is clamped for any mix of
    /// framework assessments
    #[test]
    fn prop_compliance_risk_score_clamped(
        reserve_ratio in 0.0f64..2.0,
        amount in 0u64..10_000_000,
        kyc in 0.0f64..1.0,
    ) {
        let assessments = vec![
            FrameworkMonitor::check_mica(reserve_ratio, Decimal::from(amount)),
            FrameworkMonitor::check_genius(reserve_ratio, kyc),
        ];
        let score = FrameworkMonitor::compliance_risk_score(&assessments);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}
