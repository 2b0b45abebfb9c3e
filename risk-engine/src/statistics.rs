//! Statistical risk analytics
//!
//! Value at Risk, expected shortfall, and the liquidity, operational, and
//! systemic risk scores that feed the aggregate risk report.

use crate::config::RiskConfig;
use crate::types::{
    clamp_score, LiquidityMetrics, OperationalMetrics, RiskMetrics, SystemicMetrics,
    TradingMetrics,
};
use crate::{Error, Result};

/// Value at Risk via the linear-interpolation empirical percentile
///
/// Returns the `(1 - confidence_level)`-th percentile of the return
/// distribution. The series must be non-empty and the confidence level
/// must lie in (0, 1).
pub fn value_at_risk(returns: &[f64], confidence_level: f64) -> Result<f64> {
    if returns.is_empty() {
        return Err(Error::InvalidInput(
            "Cannot compute VaR of an empty return series".to_string(),
        ));
    }
    if confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(Error::InvalidInput(format!(
            "Confidence level {} outside (0, 1)",
            confidence_level
        )));
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    // Linear interpolation between the closest ranks
    let rank = (1.0 - confidence_level) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let fraction = rank - lower as f64;

    if lower + 1 < sorted.len() {
        Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
    } else {
        Ok(sorted[lower])
    }
}

/// Expected shortfall: mean of all returns at or below the VaR threshold
///
/// Fails when no observation lies in the tail, since the mean of an empty
/// set is undefined.
pub fn expected_shortfall(returns: &[f64], var: f64) -> Result<f64> {
    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= var).collect();
    if tail.is_empty() {
        return Err(Error::InvalidInput(format!(
            "No returns at or below VaR threshold {}",
            var
        )));
    }
    Ok(tail.iter().sum::<f64>() / tail.len() as f64)
}

/// Derive liquidity metrics from trading observations
///
/// `turnover_ratio = volume / market_cap`;
/// `liquidity_ratio = volume * (1 - spread) / market_cap`.
pub fn liquidity_metrics(trading: &TradingMetrics) -> Result<LiquidityMetrics> {
    if trading.market_cap <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "Market cap must be positive, got {}",
            trading.market_cap
        )));
    }

    Ok(LiquidityMetrics {
        trading_volume: trading.volume,
        bid_ask_spread: trading.spread,
        market_depth: trading.depth,
        turnover_ratio: trading.volume / trading.market_cap,
        liquidity_ratio: trading.volume * (1.0 - trading.spread) / trading.market_cap,
    })
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Statistical risk analytics over an immutable weight configuration
pub struct RiskAnalytics {
    config: RiskConfig,
}

impl RiskAnalytics {
    /// Create analytics with the given configuration
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Liquidity risk score in [0, 1]
    ///
    /// Weighted combination of turnover shortfall and spread impact.
    pub fn liquidity_risk(
        &self,
        trading_volume: f64,
        market_cap: f64,
        bid_ask_spread: f64,
    ) -> Result<f64> {
        if market_cap <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Market cap must be positive, got {}",
                market_cap
            )));
        }

        let w = &self.config.liquidity;
        let turnover_ratio = trading_volume / market_cap;
        let spread_impact = bid_ask_spread / (1.0 + bid_ask_spread);

        let score = w.turnover * (1.0 - turnover_ratio) + w.spread_impact * spread_impact;
        Ok(clamp_score(score))
    }

    /// Operational risk score in [0, 1]
    pub fn operational_risk(&self, uptime: f64, transaction_volume: f64, error_rate: f64) -> f64 {
        let w = &self.config.operational;
        let availability_risk = 1.0 - uptime;
        let volume_risk = (transaction_volume / w.volume_normalizer).min(1.0);

        let score = w.availability * availability_risk + w.volume * volume_risk + w.error * error_rate;
        clamp_score(score)
    }

    /// Systemic risk score in [0, 1]
    ///
    /// Size risk decays with network size through a logistic function;
    /// concentration and interdependency enter linearly.
    pub fn systemic_risk(
        &self,
        network_size: u32,
        concentration_ratio: f64,
        interdependency_score: f64,
    ) -> f64 {
        let w = &self.config.systemic;
        let size_risk = 1.0 - sigmoid(f64::from(network_size) / w.size_scale);

        let score = w.size * size_risk
            + w.concentration * concentration_ratio
            + w.interdependency * interdependency_score;
        clamp_score(score)
    }

    /// Generate the aggregate risk report
    ///
    /// VaR is evaluated at both configured confidence levels; expected
    /// shortfall is taken against the primary VaR threshold.
    pub fn generate_risk_report(
        &self,
        returns: &[f64],
        trading: &TradingMetrics,
        operational: &OperationalMetrics,
        systemic: &SystemicMetrics,
    ) -> Result<RiskMetrics> {
        let var_95 = value_at_risk(returns, self.config.var_confidence)?;
        let var_99 = value_at_risk(returns, self.config.var_confidence_tail)?;
        let expected_shortfall = expected_shortfall(returns, var_95)?;

        let liquidity_risk =
            self.liquidity_risk(trading.volume, trading.market_cap, trading.spread)?;
        let operational_risk =
            self.operational_risk(operational.uptime, operational.volume, operational.error_rate);
        let systemic_risk = self.systemic_risk(
            systemic.network_size,
            systemic.concentration,
            systemic.interdependency,
        );

        Ok(RiskMetrics {
            var_95,
            var_99,
            expected_shortfall,
            liquidity_risk,
            operational_risk,
            systemic_risk,
        })
    }

    /// Weight configuration in use
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}

impl Default for RiskAnalytics {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
