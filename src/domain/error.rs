//! Domain error types

use thiserror::Error;

/// Errors that can occur while computing or applying symbol energies
#[derive(Error, Debug)]
pub enum EnergyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for symbol energy operations
pub type EnergyResult<T> = Result<T, EnergyError>;
