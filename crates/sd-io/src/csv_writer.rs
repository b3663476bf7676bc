//! CSV serialization of tables
//!
//! One header row, then one record per row. Missing cells are written as
//! empty fields and every other cell through its `Display` form. Quoting is
//! left to the `csv` writer, which quotes a field only when it contains a
//! delimiter, a double quote, or a line break.

use crate::error::{WriteError, WriteResult};
use crate::traits::TableSink;
use sd_core::{Table, Value};
use std::fs::File;
use std::io;
use std::path::PathBuf;

fn cell_text(cell: &Option<Value>) -> String {
    cell.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Write `table` to `writer`, header first, then flush
pub fn write_csv<W: io::Write>(table: &Table, writer: &mut csv::Writer<W>) -> csv::Result<()> {
    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(cell_text))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes each table to `<dir>/<stem>.csv`
#[derive(Debug, Clone)]
pub struct CsvDirSink {
    dir: PathBuf,
}

impl CsvDirSink {
    /// Create a sink rooted at `dir`. The directory is not created here;
    /// see [`crate::fs::ensure_dir`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File path a table named `stem` is written to
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", stem))
    }
}

impl TableSink for CsvDirSink {
    fn write_table(&self, table: &Table, stem: &str) -> WriteResult<PathBuf> {
        let path = self.path_for(stem);
        let file = File::create(&path).map_err(|e| WriteError::WriteFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut writer = csv::Writer::from_writer(file);
        write_csv(table, &mut writer).map_err(|e| WriteError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;

        log::debug!(
            "Wrote {} rows of '{}' to {}",
            table.len(),
            table.name(),
            path.display()
        );
        Ok(path)
    }

    fn sink_type(&self) -> &'static str {
        "csv"
    }
}

#[cfg(test)]
#[path = "csv_writer_test.rs"]
mod tests;
