//! Error types for simulation engine

use thiserror::Error;

/// Simulation engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-domain argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported enumerated option or bad configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
