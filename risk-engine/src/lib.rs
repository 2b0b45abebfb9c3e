//! Risk Engine for the CBDC platform
//!
//! Statistical risk analytics (VaR, expected shortfall), network-topology
//! risk, composite systemic-risk scoring, and stress testing

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod composite;
pub mod config;
pub mod error;
pub mod network;
pub mod statistics;
pub mod stress;
pub mod types;

pub use composite::CompositeScorer;
pub use config::RiskConfig;
pub use error::{Error, Result};
pub use network::AdjacencyMatrix;
pub use statistics::RiskAnalytics;
pub use stress::StressTester;
pub use types::*;
