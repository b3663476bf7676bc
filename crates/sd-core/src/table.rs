//! Generic in-memory table
//!
//! Generators produce typed records; the quality injector and the writers
//! work on the untyped [`Table`] form so they can handle any entity. A cell is
//! `Option<Value>`, where `None` is a missing value.

use crate::error::{CoreError, CoreResult};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Display format for date cells
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for timestamp cells
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single non-missing cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Value::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name
    pub name: String,

    /// Identifier columns (primary and foreign keys) never receive
    /// injected missing values
    pub identifier: bool,
}

impl Column {
    /// A regular data column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: false,
        }
    }

    /// A key column protected from missing-value injection
    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: true,
        }
    }
}

/// A typed record that can be flattened into a [`Table`] row
pub trait TableRecord {
    /// Logical table name, also the stem of the output file
    const TABLE_NAME: &'static str;

    /// Column layout, in output order
    fn columns() -> Vec<Column>;

    /// Cells for this record, one per column in [`TableRecord::columns`] order
    fn to_row(&self) -> Vec<Option<Value>>;
}

/// A named table of rows with a fixed column layout
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Option<Value>>>,
}

impl Table {
    /// Create an empty table
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Flatten typed records into a table named after the record type
    pub fn from_records<R: TableRecord>(records: &[R]) -> Self {
        let columns = R::columns();
        let rows: Vec<_> = records.iter().map(R::to_row).collect();
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            name: R::TABLE_NAME.to_string(),
            columns,
            rows,
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column definitions
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header names, in column order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<Option<Value>>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, `column`), `None` if out of bounds or missing
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row)?.get(column)?.as_ref()
    }

    /// Append a row, checking its width against the column layout
    pub fn push_row(&mut self, row: Vec<Option<Value>>) -> CoreResult<()> {
        if row.len() != self.columns.len() {
            return Err(CoreError::RowWidthMismatch {
                table: self.name.clone(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Blank out one cell. Out-of-range positions are ignored.
    pub fn clear_cell(&mut self, row: usize, column: usize) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = None;
        }
    }

    /// Append copies of the rows at `indices`, in the order given.
    /// Out-of-range indices are skipped.
    pub fn append_copies(&mut self, indices: &[usize]) {
        let copies: Vec<_> = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        self.rows.extend(copies);
    }

    /// Number of missing cells in `column`
    pub fn missing_count(&self, column: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.get(column), Some(None)))
            .count()
    }

    /// Number of missing cells across the whole table
    pub fn total_missing(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_none()).count())
            .sum()
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
