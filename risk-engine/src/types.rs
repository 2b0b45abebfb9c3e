//! Core types for risk engine

use crate::network::AdjacencyMatrix;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate risk report for CBDC operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// 95% Value at Risk
    pub var_95: f64,

    /// 99% Value at Risk
    pub var_99: f64,

    /// Expected shortfall at the 95% VaR threshold
    pub expected_shortfall: f64,

    /// Liquidity risk score (0-1)
    pub liquidity_risk: f64,

    /// Operational risk score (0-1)
    pub operational_risk: f64,

    /// Systemic risk score (0-1)
    pub systemic_risk: f64,
}

/// Topology metrics derived from a participant network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Number of nodes
    pub node_count: usize,

    /// Number of edges (weighted sum / 2 for weighted graphs)
    pub edge_count: f64,

    /// Mean node degree
    pub average_degree: f64,

    /// Global clustering coefficient (0 when no connected triples exist)
    pub clustering_coefficient: f64,

    /// Freeman degree centralization
    pub centralization: f64,
}

/// Liquidity metrics derived from trading observations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityMetrics {
    /// Daily trading volume
    pub trading_volume: f64,

    /// Average bid-ask spread
    pub bid_ask_spread: f64,

    /// Market depth
    pub market_depth: f64,

    /// Volume / market cap
    pub turnover_ratio: f64,

    /// Spread-adjusted volume / market cap
    pub liquidity_ratio: f64,
}

/// Trading observations supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingMetrics {
    /// Daily trading volume
    pub volume: f64,

    /// Market capitalization (must be positive)
    pub market_cap: f64,

    /// Average bid-ask spread
    pub spread: f64,

    /// Market depth
    pub depth: f64,
}

/// Operational observations supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalMetrics {
    /// System uptime fraction
    pub uptime: f64,

    /// Daily transaction volume
    pub volume: f64,

    /// Transaction error rate
    pub error_rate: f64,
}

/// Systemic observations supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemicMetrics {
    /// Number of participants in the network
    pub network_size: u32,

    /// Market concentration ratio
    pub concentration: f64,

    /// Network interdependency score
    pub interdependency: f64,
}

/// Baseline market conditions for stress testing
///
/// Fields are addressable by name in [`ShockScenario::shocks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConditions {
    /// Daily trading volume
    pub trading_volume: f64,

    /// Market capitalization
    pub market_cap: f64,

    /// Average bid-ask spread
    pub bid_ask_spread: f64,

    /// Market depth
    pub market_depth: f64,

    /// System uptime fraction
    pub uptime: f64,

    /// Daily transaction volume
    pub transaction_volume: f64,

    /// Transaction error rate
    pub error_rate: f64,
}

impl BaselineConditions {
    /// Apply multiplicative shocks to a copy of the baseline
    ///
    /// Each `(field, delta)` entry scales the named field by `1 + delta`;
    /// unlisted fields are copied unchanged. An unknown field name is a
    /// malformed scenario.
    pub fn apply_shocks(&self, shocks: &BTreeMap<String, f64>) -> Result<Self> {
        let mut shocked = self.clone();
        for (field, delta) in shocks {
            let target = match field.as_str() {
                "trading_volume" => &mut shocked.trading_volume,
                "market_cap" => &mut shocked.market_cap,
                "bid_ask_spread" => &mut shocked.bid_ask_spread,
                "market_depth" => &mut shocked.market_depth,
                "uptime" => &mut shocked.uptime,
                "transaction_volume" => &mut shocked.transaction_volume,
                "error_rate" => &mut shocked.error_rate,
                other => {
                    return Err(Error::InvalidInput(format!("Unknown shock field: {}", other)))
                }
            };
            *target *= 1.0 + delta;
        }
        Ok(shocked)
    }

    /// Trading view of the conditions
    pub fn trading(&self) -> TradingMetrics {
        TradingMetrics {
            volume: self.trading_volume,
            market_cap: self.market_cap,
            spread: self.bid_ask_spread,
            depth: self.market_depth,
        }
    }

    /// Operational view of the conditions
    pub fn operational(&self) -> OperationalMetrics {
        OperationalMetrics {
            uptime: self.uptime,
            volume: self.transaction_volume,
            error_rate: self.error_rate,
        }
    }
}

/// Named shock scenario for stress testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockScenario {
    /// Scenario name, echoed in the result row
    pub name: String,

    /// Multiplicative deltas keyed by baseline field name
    pub shocks: BTreeMap<String, f64>,

    /// Participant network under this scenario
    pub network: AdjacencyMatrix,
}

/// One stress-test result row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub scenario: String,

    /// Network centralization under the scenario
    pub network_risk: f64,

    /// Liquidity ratio under shocked conditions
    pub liquidity_risk: f64,

    /// Operational risk score under shocked conditions
    pub operational_risk: f64,

    /// Composite systemic risk score
    pub systemic_risk: f64,
}

/// Clamp a score to the closed interval [0, 1]
pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}
