//! Stress-test orchestration
//!
//! Re-runs the full risk pipeline per shock scenario against a common
//! baseline and collects comparable result rows.

use crate::composite::CompositeScorer;
use crate::config::RiskConfig;
use crate::statistics::{liquidity_metrics, RiskAnalytics};
use crate::types::{BaselineConditions, ScenarioOutcome, ShockScenario};
use crate::Result;
use tracing::debug;

/// Stress tester over an immutable risk configuration
pub struct StressTester {
    analytics: RiskAnalytics,
    scorer: CompositeScorer,
}

impl StressTester {
    /// Create a stress tester from a risk configuration
    pub fn new(config: RiskConfig) -> Self {
        let scorer = CompositeScorer::new(config.composite.clone());
        Self {
            analytics: RiskAnalytics::new(config),
            scorer,
        }
    }

    /// Run all scenarios against the baseline
    ///
    /// Scenarios are independent and evaluated in input order; the result
    /// order matches exactly. The baseline is never mutated: shocks apply
    /// to a per-scenario copy. A malformed scenario (unknown shock field,
    /// invalid network matrix, non-positive shocked market cap) aborts the
    /// whole run.
    pub fn run(
        &self,
        baseline: &BaselineConditions,
        scenarios: &[ShockScenario],
    ) -> Result<Vec<ScenarioOutcome>> {
        let mut results = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            let shocked = baseline.apply_shocks(&scenario.shocks)?;

            let network = scenario.network.metrics()?;
            let liquidity = liquidity_metrics(&shocked.trading())?;
            let operational = shocked.operational();
            let operational_risk = self.analytics.operational_risk(
                operational.uptime,
                operational.volume,
                operational.error_rate,
            );

            let network_component = self.scorer.network_component(&network)?;
            let liquidity_component = self.scorer.liquidity_component(&liquidity);
            let systemic_risk =
                self.scorer
                    .systemic(network_component, liquidity_component, operational_risk);

            debug!(
                scenario = %scenario.name,
                systemic_risk,
                "stress scenario evaluated"
            );

            results.push(ScenarioOutcome {
                scenario: scenario.name.clone(),
                network_risk: network.centralization,
                liquidity_risk: liquidity.liquidity_ratio,
                operational_risk,
                systemic_risk,
            });
        }

        Ok(results)
    }
}

impl Default for StressTester {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
