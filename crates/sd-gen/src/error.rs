//! Error types for sd-gen

use sd_core::CoreError;
use sd_io::WriteError;
use thiserror::Error;

/// Generation errors
#[derive(Error, Debug)]
pub enum GenError {
    /// G001: A referenced table has no rows
    #[error("[G001] Cannot generate {target}: input table '{table}' is empty")]
    EmptyInput { target: String, table: String },

    /// G002: Missing-value rate outside [0, 1]
    #[error("[G002] Missing-value rate must be within [0, 1], got {rate}")]
    InvalidMissingRate { rate: f64 },

    /// G003: Sampling weights could not form a distribution
    #[error("[G003] Invalid sampling weights for {what}: {reason}")]
    InvalidWeights { what: String, reason: String },

    /// Configuration or table error from sd-core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Output error from sd-io
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result type alias for GenError
pub type GenResult<T> = Result<T, GenError>;
