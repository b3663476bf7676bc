//! sd-io - Output layer for sampledata
//!
//! This crate provides the `TableSink` trait, the CSV implementation used
//! for both the clean and the raw output trees, and idempotent output
//! directory preparation.

pub mod csv_writer;
pub mod error;
pub mod fs;
pub mod traits;

pub use csv_writer::{write_csv, CsvDirSink};
pub use error::{WriteError, WriteResult};
pub use fs::{ensure_dir, prepare_output_dirs};
pub use traits::TableSink;
