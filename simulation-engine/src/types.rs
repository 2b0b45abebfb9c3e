//! Core types for simulation engine

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parameters for CBDC simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CbdcParameters {
    /// CBDC interest rate
    pub interest_rate: f64,

    /// Reserve requirement ratio
    pub reserve_requirement: f64,

    /// Per-transaction limit
    pub transaction_limit: Decimal,

    /// Maximum holding limit
    pub holding_limit: Decimal,

    /// Privacy level (0-1)
    pub privacy_level: f64,

    /// Cross-border functionality enabled
    pub cross_border_enabled: bool,
}

impl Default for CbdcParameters {
    fn default() -> Self {
        Self {
            interest_rate: 0.02,
            reserve_requirement: 0.1,
            transaction_limit: Decimal::from(1_000_000),
            holding_limit: Decimal::from(10_000_000),
            privacy_level: 0.7,
            cross_border_enabled: true,
        }
    }
}

impl CbdcParameters {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load defaults with environment overrides
    pub fn from_env() -> Result<Self> {
        let mut params = CbdcParameters::default();

        if let Ok(rate) = std::env::var("CBDC_INTEREST_RATE") {
            params.interest_rate = rate
                .parse()
                .map_err(|e| Error::Config(format!("CBDC_INTEREST_RATE: {}", e)))?;
        }
        if let Ok(limit) = std::env::var("CBDC_TRANSACTION_LIMIT") {
            params.transaction_limit = limit
                .parse()
                .map_err(|e| Error::Config(format!("CBDC_TRANSACTION_LIMIT: {}", e)))?;
        }

        Ok(params)
    }
}

/// One period of a monetary transmission simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransmissionPoint {
    /// Simulation period index
    pub period: u32,

    /// CBDC rate after policy pass-through
    pub cbdc_rate: f64,

    /// Commercial bank deposit rate
    pub deposit_rate: f64,

    /// Commercial bank lending rate
    pub lending_rate: f64,

    /// Money velocity
    pub money_velocity: f64,

    /// Cumulative inflation impact
    pub inflation_impact: f64,
}

/// One period of a financial stability simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityPoint {
    /// Simulation period index
    pub period: u32,

    /// Share of bank deposits migrated to CBDC
    pub deposit_migration: f64,

    /// Commercial bank funding cost
    pub bank_funding_cost: f64,

    /// Interbank liquidity index
    pub interbank_liquidity: f64,

    /// Payment system resilience index
    pub payment_system_resilience: f64,
}

/// Cost breakdown for a cross-border CBDC payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossBorderReceipt {
    /// Payment amount in source currency
    pub amount: Decimal,

    /// Source currency code
    pub source_currency: String,

    /// Target currency code
    pub target_currency: String,

    /// Exchange rate applied
    pub exchange_rate: Decimal,

    /// Estimated settlement time in minutes
    pub settlement_time_minutes: f64,

    /// Total fees in source currency
    pub fees: Decimal,

    /// Amount delivered in target currency after fees
    pub final_amount: Decimal,
}

/// Supported crisis scenario kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisKind {
    /// Run on bank deposits into CBDC
    BankRun,
    /// Attack on system availability
    CyberAttack,
    /// Abrupt regulatory regime change
    RegulatoryChange,
}

impl FromStr for CrisisKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bank_run" => Ok(CrisisKind::BankRun),
            "cyber_attack" => Ok(CrisisKind::CyberAttack),
            "regulatory_change" => Ok(CrisisKind::RegulatoryChange),
            other => Err(Error::InvalidInput(format!(
                "Unknown scenario type: {}",
                other
            ))),
        }
    }
}

/// Impact figures for a simulated crisis, scaled by severity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum CrisisImpact {
    /// Bank run impacts
    BankRun {
        /// Share of deposits withdrawn
        deposit_withdrawal_rate: f64,
        /// Liquidity impact index
        liquidity_impact: f64,
        /// System stress index
        system_stress: f64,
    },
    /// Cyber attack impacts
    CyberAttack {
        /// Remaining system availability
        system_availability: f64,
        /// Transaction delay in minutes
        transaction_delay: f64,
        /// Recovery time in hours
        recovery_time: f64,
    },
    /// Regulatory change impacts
    RegulatoryChange {
        /// One-off compliance cost
        compliance_cost: f64,
        /// Implementation time in days
        implementation_time: f64,
        /// Market impact index
        market_impact: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_impact_wire_format() {
        let impact = CrisisImpact::BankRun {
            deposit_withdrawal_rate: 0.15,
            liquidity_impact: 0.2,
            system_stress: 0.25,
        };

        let value = serde_json::to_value(&impact).unwrap();
        assert_eq!(value["scenario"], "bank_run");
        assert_eq!(value["deposit_withdrawal_rate"], 0.15);
    }

    #[test]
    fn test_parameters_default_limits() {
        let params = CbdcParameters::default();
        assert_eq!(params.transaction_limit, Decimal::from(1_000_000));
        assert!(params.cross_border_enabled);
    }
}
