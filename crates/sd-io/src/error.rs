//! Error types for sd-io

use thiserror::Error;

/// Output errors
#[derive(Error, Debug)]
pub enum WriteError {
    /// Output directory could not be created (W001)
    #[error("[W001] Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    /// Output path exists but is not a directory (W002)
    #[error("[W002] Output path '{path}' exists and is not a directory")]
    NotADirectory { path: String },

    /// Table file could not be written (W003)
    #[error("[W003] Failed to write '{path}': {source}")]
    WriteFile {
        path: String,
        source: std::io::Error,
    },

    /// Table records could not be serialized (W004)
    #[error("[W004] Failed to write CSV records to '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Result type alias for WriteError
pub type WriteResult<T> = Result<T, WriteError>;
