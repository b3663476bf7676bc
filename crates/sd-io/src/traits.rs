//! Table sink trait definition

use crate::error::WriteResult;
use sd_core::Table;
use std::path::PathBuf;

/// Destination for generated tables
pub trait TableSink {
    /// Write `table` under the name `stem`, replacing any previous output,
    /// and return the location written
    fn write_table(&self, table: &Table, stem: &str) -> WriteResult<PathBuf>;

    /// Sink type identifier for logging
    fn sink_type(&self) -> &'static str;
}
