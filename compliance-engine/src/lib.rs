//! Compliance Engine for the CBDC platform
//!
//! Jurisdiction threshold checks, regulatory framework assessments, and
//! compliance risk scoring

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checks;
pub mod error;
pub mod frameworks;
pub mod types;

pub use checks::{ComplianceConfig, ComplianceEngine};
pub use error::{Error, Result};
pub use frameworks::FrameworkMonitor;
pub use types::*;
