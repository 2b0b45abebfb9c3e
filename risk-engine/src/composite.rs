//! Composite systemic-risk scoring
//!
//! Combines network topology, liquidity, and operational sub-scores into
//! a single systemic risk scalar.

use crate::config::CompositeWeights;
use crate::types::{clamp_score, LiquidityMetrics, NetworkMetrics};
use crate::{Error, Result};

/// Composite scorer over an immutable weight table
pub struct CompositeScorer {
    weights: CompositeWeights,
}

impl CompositeScorer {
    /// Create a scorer with the given weights
    pub fn new(weights: CompositeWeights) -> Self {
        Self { weights }
    }

    /// Network risk component from topology metrics
    pub fn network_component(&self, metrics: &NetworkMetrics) -> Result<f64> {
        if metrics.node_count == 0 {
            return Err(Error::InvalidInput(
                "Network component requires at least one node".to_string(),
            ));
        }

        let w = &self.weights;
        Ok(w.network_centralization * metrics.centralization
            + w.network_fragmentation * (1.0 - metrics.clustering_coefficient)
            + w.network_connectivity * (metrics.average_degree / metrics.node_count as f64))
    }

    /// Liquidity risk component from liquidity metrics
    pub fn liquidity_component(&self, metrics: &LiquidityMetrics) -> f64 {
        let w = &self.weights;
        w.liquidity_illiquidity * (1.0 - metrics.liquidity_ratio)
            + w.liquidity_spread * metrics.bid_ask_spread
            + w.liquidity_stagnation * (1.0 - metrics.turnover_ratio)
    }

    /// Systemic composite in [0, 1]
    pub fn systemic(&self, network_risk: f64, liquidity_risk: f64, operational_risk: f64) -> f64 {
        let w = &self.weights;
        clamp_score(
            w.systemic_network * network_risk
                + w.systemic_liquidity * liquidity_risk
                + w.systemic_operational * operational_risk,
        )
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(CompositeWeights::default())
    }
}
