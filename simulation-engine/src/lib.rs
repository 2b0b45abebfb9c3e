//! CBDC Simulation Engine
//!
//! Monetary transmission, cross-border payment costing, financial
//! stability simulation, crisis scenarios, and the economic identity
//! models behind them

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod economics;
pub mod error;
pub mod simulator;
pub mod types;

pub use economics::{EconomicModels, EconomicParameters};
pub use error::{Error, Result};
pub use simulator::CbdcSimulator;
pub use types::*;
