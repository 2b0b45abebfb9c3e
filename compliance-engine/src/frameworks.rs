//! Regulatory framework assessments
//!
//! MiCA and GENIUS checks, the weighted compliance risk score, and
//! requirement change monitoring.

use crate::types::{
    ComplianceRequirement, ComplianceStatus, FrameworkAssessment, RegulatoryFramework,
    RequirementChange,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

/// Score deducted per violation
const VIOLATION_PENALTY: f64 = 0.2;

/// Score at or above which an assessment counts as compliant
const COMPLIANT_THRESHOLD: f64 = 0.8;

/// MiCA single-transaction limit (EUR)
const MICA_TRANSACTION_LIMIT: u64 = 1_000_000;

/// Minimum KYC completion under the GENIUS framework
const GENIUS_KYC_THRESHOLD: f64 = 0.95;

/// Stateless monitor for framework-level compliance
pub struct FrameworkMonitor;

impl FrameworkMonitor {
    fn assess(
        framework: RegulatoryFramework,
        requirement_id: &str,
        violations: Vec<String>,
        corrective_actions: Vec<String>,
    ) -> FrameworkAssessment {
        let compliance_score =
            (1.0 - violations.len() as f64 * VIOLATION_PENALTY).clamp(0.0, 1.0);
        let status = if compliance_score >= COMPLIANT_THRESHOLD {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::NonCompliant
        };

        if !violations.is_empty() {
            warn!(?framework, ?violations, "framework violations detected");
        }

        let now = Utc::now();
        FrameworkAssessment {
            assessment_id: Uuid::new_v4(),
            framework,
            requirement_id: requirement_id.to_string(),
            compliance_score,
            last_check: now,
            next_check: now + Duration::days(1),
            violations,
            corrective_actions,
            status,
        }
    }

    /// Check MiCA reserve and transaction-limit requirements
    pub fn check_mica(reserve_ratio: f64, transaction_amount: Decimal) -> FrameworkAssessment {
        let mut violations = Vec::new();
        let mut corrective_actions = Vec::new();

        if reserve_ratio < 1.0 {
            violations.push("Insufficient reserves".to_string());
            corrective_actions.push("Increase reserve holdings".to_string());
        }
        if transaction_amount > Decimal::from(MICA_TRANSACTION_LIMIT) {
            violations.push("Transaction limit exceeded".to_string());
            corrective_actions.push("Implement transaction limits".to_string());
        }

        Self::assess(
            RegulatoryFramework::Mica,
            "MICA_001",
            violations,
            corrective_actions,
        )
    }

    /// Check GENIUS reserve and KYC requirements
    pub fn check_genius(reserve_ratio: f64, kyc_completion: f64) -> FrameworkAssessment {
        let mut violations = Vec::new();
        let mut corrective_actions = Vec::new();

        if reserve_ratio < 1.0 {
            violations.push("Insufficient reserves".to_string());
            corrective_actions.push("Increase reserve holdings".to_string());
        }
        if kyc_completion < GENIUS_KYC_THRESHOLD {
            violations.push("Incomplete KYC".to_string());
            corrective_actions.push("Complete KYC for all users".to_string());
        }

        Self::assess(
            RegulatoryFramework::Genius,
            "GENIUS_001",
            violations,
            corrective_actions,
        )
    }

    /// Framework weight in the overall compliance risk score
    fn framework_weight(framework: RegulatoryFramework) -> f64 {
        match framework {
            RegulatoryFramework::Mica => 0.3,
            RegulatoryFramework::Genius => 0.3,
            RegulatoryFramework::Fsb => 0.2,
            RegulatoryFramework::Bis => 0.1,
            RegulatoryFramework::Fatf => 0.1,
        }
    }

    /// Overall compliance risk score in [0, 1]
    ///
    /// One minus the weighted sum of framework compliance scores; an
    /// empty assessment set is maximally risky.
    pub fn compliance_risk_score(assessments: &[FrameworkAssessment]) -> f64 {
        if assessments.is_empty() {
            return 1.0;
        }

        let weighted: f64 = assessments
            .iter()
            .map(|a| a.compliance_score * Self::framework_weight(a.framework))
            .sum();

        (1.0 - weighted).clamp(0.0, 1.0)
    }

    /// Diff two requirement sets by requirement id
    pub fn monitor_changes(
        current: &[ComplianceRequirement],
        new: &[ComplianceRequirement],
    ) -> Vec<RequirementChange> {
        let current_by_id: HashMap<&str, &ComplianceRequirement> = current
            .iter()
            .map(|r| (r.requirement_id.as_str(), r))
            .collect();
        let new_by_id: HashMap<&str, &ComplianceRequirement> =
            new.iter().map(|r| (r.requirement_id.as_str(), r)).collect();

        let mut changes = Vec::new();

        for req in new {
            match current_by_id.get(req.requirement_id.as_str()) {
                None => changes.push(RequirementChange::Added {
                    requirement_id: req.requirement_id.clone(),
                    description: req.description.clone(),
                }),
                Some(existing) if existing.threshold != req.threshold => {
                    changes.push(RequirementChange::Modified {
                        requirement_id: req.requirement_id.clone(),
                        old_threshold: existing.threshold,
                        new_threshold: req.threshold,
                    })
                }
                Some(_) => {}
            }
        }

        for req in current {
            if !new_by_id.contains_key(req.requirement_id.as_str()) {
                changes.push(RequirementChange::Removed {
                    requirement_id: req.requirement_id.clone(),
                    description: req.description.clone(),
                });
            }
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(id: &str, threshold: f64) -> ComplianceRequirement {
        ComplianceRequirement {
            framework: RegulatoryFramework::Mica,
            requirement_id: id.to_string(),
            description: format!("Requirement {}", id),
            threshold,
            jurisdiction: "EU".to_string(),
        }
    }

    #[test]
    fn test_mica_compliant() {
        let assessment = FrameworkMonitor::check_mica(1.0, Decimal::from(500_000));
        assert_eq!(assessment.status, ComplianceStatus::Compliant);
        assert_eq!(assessment.compliance_score, 1.0);
        assert!(assessment.violations.is_empty());
    }

    #[test]
    fn test_mica_violations() {
        let assessment = FrameworkMonitor::check_mica(0.9, Decimal::from(2_000_000));
        assert_eq!(assessment.violations.len(), 2);
        assert!((assessment.compliance_score - 0.6).abs() < 1e-12);
        assert_eq!(assessment.status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_genius_kyc_violation() {
        let assessment = FrameworkMonitor::check_genius(1.0, 0.9);
        assert_eq!(assessment.violations.len(), 1);
        assert_eq!(assessment.status, ComplianceStatus::Compliant);
        assert!((assessment.compliance_score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_compliance_risk_score() {
        let mica = FrameworkMonitor::check_mica(1.0, Decimal::from(500_000));
        let genius = FrameworkMonitor::check_genius(1.0, 0.98);

        let score = FrameworkMonitor::compliance_risk_score(&[mica, genius]);
        // Two fully compliant frameworks at weight 0.3 each
        assert!((score - 0.4).abs() < 1e-12);

        assert_eq!(FrameworkMonitor::compliance_risk_score(&[]), 1.0);
    }

    #[test]
    fn test_monitor_changes() {
        let current = vec![requirement("MICA_001", 1.0), requirement("MICA_002", 0.5)];
        let new = vec![requirement("MICA_001", 1.1), requirement("MICA_003", 0.9)];

        let changes = FrameworkMonitor::monitor_changes(&current, &new);
        assert_eq!(changes.len(), 3);

        assert!(changes.iter().any(|c| matches!(
            c,
            RequirementChange::Modified { requirement_id, .. } if requirement_id == "MICA_001"
        )));
        assert!(changes.iter().any(|c| matches!(
            c,
            RequirementChange::Added { requirement_id, .. } if requirement_id == "MICA_003"
        )));
        assert!(changes.iter().any(|c| matches!(
            c,
            RequirementChange::Removed { requirement_id, .. } if requirement_id == "MICA_002"
        )));
    }
}
