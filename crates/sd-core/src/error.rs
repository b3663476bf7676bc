//! Error types for sd-core

use thiserror::Error;

/// Core error type for sampledata
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: A product category has no entry in the price table
    #[error("[C003] No price range configured for category '{category}'")]
    MissingPriceRange { category: String },

    /// C004: A product category appears more than once in the price table
    #[error("[C004] Duplicate price range for category '{category}'")]
    DuplicatePriceRange { category: String },

    /// C005: A price range whose bounds are not usable for sampling
    #[error("[C005] Invalid price range for category '{category}': min={min}, max={max}")]
    InvalidPriceRange {
        category: String,
        min: f64,
        max: f64,
    },

    /// C006: Row does not match the table's column count
    #[error("[C006] Row width mismatch in table '{table}': expected {expected} cells, found {found}")]
    RowWidthMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    /// C007: IO error with file path context
    #[error("[C007] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C008: YAML parse error
    #[error("[C008] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
