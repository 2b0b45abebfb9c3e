//! Configuration for risk engine
//!
//! All scoring formulas draw their weights from these tables so the
//! constants can be audited and tuned without touching formula logic.

use serde::{Deserialize, Serialize};

/// Risk engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Liquidity risk scoring weights
    pub liquidity: LiquidityWeights,

    /// Operational risk scoring weights
    pub operational: OperationalWeights,

    /// Systemic risk scoring weights
    pub systemic: SystemicWeights,

    /// Composite scoring weights
    pub composite: CompositeWeights,

    /// Confidence level for the primary VaR figure
    pub var_confidence: f64,

    /// Confidence level for the tail VaR figure
    pub var_confidence_tail: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            liquidity: LiquidityWeights::default(),
            operational: OperationalWeights::default(),
            systemic: SystemicWeights::default(),
            composite: CompositeWeights::default(),
            var_confidence: 0.95,
            var_confidence_tail: 0.99,
        }
    }
}

/// Weights for the liquidity risk score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityWeights {
    /// Weight on (1 - turnover ratio)
    pub turnover: f64,

    /// Weight on spread impact
    pub spread_impact: f64,
}

impl Default for LiquidityWeights {
    fn default() -> Self {
        Self {
            turnover: 0.7,
            spread_impact: 0.3,
        }
    }
}

/// Weights for the operational risk score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalWeights {
    /// Weight on (1 - uptime)
    pub availability: f64,

    /// Weight on normalized transaction volume
    pub volume: f64,

    /// Weight on the error rate
    pub error: f64,

    /// Transaction volume treated as full volume risk
    pub volume_normalizer: f64,
}

impl Default for OperationalWeights {
    fn default() -> Self {
        Self {
            availability: 0.4,
            volume: 0.3,
            error: 0.3,
            volume_normalizer: 1_000_000.0,
        }
    }
}

/// Weights for the systemic risk score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemicWeights {
    /// Weight on the sigmoid size risk
    pub size: f64,

    /// Weight on the concentration ratio
    pub concentration: f64,

    /// Weight on the interdependency score
    pub interdependency: f64,

    /// Network size at which size risk halves
    pub size_scale: f64,
}

impl Default for SystemicWeights {
    fn default() -> Self {
        Self {
            size: 0.3,
            concentration: 0.4,
            interdependency: 0.3,
            size_scale: 1000.0,
        }
    }
}

/// Weights for composite scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeWeights {
    /// Weight on centralization in the network component
    pub network_centralization: f64,

    /// Weight on (1 - clustering) in the network component
    pub network_fragmentation: f64,

    /// Weight on (average degree / node count) in the network component
    pub network_connectivity: f64,

    /// Weight on (1 - liquidity ratio) in the liquidity component
    pub liquidity_illiquidity: f64,

    /// Weight on the bid-ask spread in the liquidity component
    pub liquidity_spread: f64,

    /// Weight on (1 - turnover ratio) in the liquidity component
    pub liquidity_stagnation: f64,

    /// Weight on the network component in the systemic composite
    pub systemic_network: f64,

    /// Weight on the liquidity component in the systemic composite
    pub systemic_liquidity: f64,

    /// Weight on operational risk in the systemic composite
    pub systemic_operational: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            network_centralization: 0.3,
            network_fragmentation: 0.3,
            network_connectivity: 0.4,
            liquidity_illiquidity: 0.4,
            liquidity_spread: 0.3,
            liquidity_stagnation: 0.3,
            systemic_network: 0.4,
            systemic_liquidity: 0.3,
            systemic_operational: 0.3,
        }
    }
}

impl RiskConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("Failed to read config: {}", e)))?;
        let config: RiskConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load defaults with environment overrides
    pub fn from_env() -> crate::Result<Self> {
        let mut config = RiskConfig::default();

        if let Ok(level) = std::env::var("RISK_VAR_CONFIDENCE") {
            config.var_confidence = level
                .parse()
                .map_err(|e| crate::Error::Config(format!("RISK_VAR_CONFIDENCE: {}", e)))?;
        }

        if let Ok(level) = std::env::var("RISK_VAR_CONFIDENCE_TAIL") {
            config.var_confidence_tail = level
                .parse()
                .map_err(|e| crate::Error::Config(format!("RISK_VAR_CONFIDENCE_TAIL: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that confidence levels lie in (0, 1)
    pub fn validate(&self) -> crate::Result<()> {
        for level in [self.var_confidence, self.var_confidence_tail] {
            if level <= 0.0 || level >= 1.0 {
                return Err(crate::Error::Config(format!(
                    "Confidence level {} outside (0, 1)",
                    level
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = RiskConfig::default();
        let l = config.liquidity;
        assert!((l.turnover + l.spread_impact - 1.0).abs() < 1e-12);

        let o = config.operational;
        assert!((o.availability + o.volume + o.error - 1.0).abs() < 1e-12);

        let s = config.systemic;
        assert!((s.size + s.concentration + s.interdependency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_confidence() {
        let mut config = RiskConfig::default();
        config.var_confidence = 1.0;
        assert!(config.validate().is_err());
    }
}
