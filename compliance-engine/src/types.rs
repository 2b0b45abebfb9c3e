//! Core types for compliance engine

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Supported jurisdictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    /// United States
    Us,
    /// European Union
    Eu,
    /// United Kingdom
    Uk,
    /// China
    China,
    /// Japan
    Japan,
    /// Singapore
    Singapore,
}

impl Jurisdiction {
    /// All supported jurisdictions
    pub const ALL: [Jurisdiction; 6] = [
        Jurisdiction::Us,
        Jurisdiction::Eu,
        Jurisdiction::Uk,
        Jurisdiction::China,
        Jurisdiction::Japan,
        Jurisdiction::Singapore,
    ];

    /// Jurisdiction code as used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Us => "US",
            Jurisdiction::Eu => "EU",
            Jurisdiction::Uk => "UK",
            Jurisdiction::China => "CHINA",
            Jurisdiction::Japan => "JAPAN",
            Jurisdiction::Singapore => "SINGAPORE",
        }
    }

    /// Parse a jurisdiction code
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "US" => Ok(Jurisdiction::Us),
            "EU" => Ok(Jurisdiction::Eu),
            "UK" => Ok(Jurisdiction::Uk),
            "CHINA" => Ok(Jurisdiction::China),
            "JAPAN" => Ok(Jurisdiction::Japan),
            "SINGAPORE" => Ok(Jurisdiction::Singapore),
            other => Err(Error::Config(format!("Unknown jurisdiction: {}", other))),
        }
    }
}

/// Supported regulatory frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegulatoryFramework {
    /// EU Markets in Crypto-Assets
    Mica,
    /// US stablecoin regulation
    Genius,
    /// Financial Stability Board
    Fsb,
    /// Bank for International Settlements
    Bis,
    /// Financial Action Task Force
    Fatf,
}

/// Compliance requirement definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRequirement {
    /// Regulatory framework the requirement belongs to
    pub framework: RegulatoryFramework,

    /// Requirement identifier within the framework
    pub requirement_id: String,

    /// Human-readable description
    pub description: String,

    /// Numeric compliance threshold
    pub threshold: f64,

    /// Jurisdiction the requirement applies in
    pub jurisdiction: String,
}

/// Aggregate compliance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceMetrics {
    /// Reserve adequacy ratio, capped at 1.0
    pub reserve_adequacy: f64,

    /// Per-jurisdiction transaction limit compliance
    pub transaction_limits: HashMap<Jurisdiction, bool>,

    /// KYC completion rate
    pub kyc_completion: f64,

    /// AML compliance score (0-1)
    pub aml_score: f64,

    /// Regulatory reporting compliance
    pub reporting_compliance: f64,
}

/// Compliance status of a framework assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// Assessment score meets the compliance threshold
    Compliant,
    /// Assessment score falls below the compliance threshold
    NonCompliant,
}

/// Result of a single framework assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkAssessment {
    /// Unique assessment identifier
    pub assessment_id: Uuid,

    /// Framework assessed
    pub framework: RegulatoryFramework,

    /// Requirement identifier
    pub requirement_id: String,

    /// Compliance score (0-1)
    pub compliance_score: f64,

    /// Assessment timestamp
    pub last_check: DateTime<Utc>,

    /// Scheduled next assessment
    pub next_check: DateTime<Utc>,

    /// Violations detected
    pub violations: Vec<String>,

    /// Suggested corrective actions
    pub corrective_actions: Vec<String>,

    /// Overall status
    pub status: ComplianceStatus,
}

/// Reserve position for adequacy checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservePosition {
    /// Total CBDC liabilities
    pub liabilities: Decimal,

    /// Total reserve assets
    pub assets: Decimal,

    /// Jurisdiction to check against
    pub jurisdiction: Jurisdiction,
}

/// KYC population snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycData {
    /// Total registered users
    pub total_users: u64,

    /// Users with completed KYC
    pub kyc_completed: u64,
}

/// AML observation snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmlData {
    /// Total transaction volume
    pub transaction_volume: f64,

    /// Suspicious transaction count
    pub suspicious_transactions: u64,

    /// Overall risk score (0-1)
    pub risk_score: f64,
}

/// A detected regulatory requirement change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequirementChange {
    /// Requirement present only in the new set
    Added {
        /// Requirement identifier
        requirement_id: String,
        /// Requirement description
        description: String,
    },
    /// Requirement threshold changed
    Modified {
        /// Requirement identifier
        requirement_id: String,
        /// Previous threshold
        old_threshold: f64,
        /// New threshold
        new_threshold: f64,
    },
    /// Requirement present only in the old set
    Removed {
        /// Requirement identifier
        requirement_id: String,
        /// Requirement description
        description: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jurisdiction_codes_round_trip() {
        for jurisdiction in Jurisdiction::ALL {
            assert_eq!(
                Jurisdiction::from_code(jurisdiction.code()).unwrap(),
                jurisdiction
            );
        }
        assert!(Jurisdiction::from_code("MARS").is_err());
    }

    #[test]
    fn test_jurisdiction_serializes_as_map_key() {
        let mut limits = HashMap::new();
        limits.insert(Jurisdiction::Us, true);

        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"US":true}"#);
    }
}
