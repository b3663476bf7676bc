//! Run summary

use serde::Serialize;
use std::path::PathBuf;

/// Outcome for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub clean_rows: usize,
    pub raw_rows: usize,
    pub missing_injected: usize,
    pub duplicates_appended: usize,
    pub clean_path: PathBuf,
    pub raw_path: PathBuf,
}

/// Outcome of a full generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub seed: u64,
    pub clean_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub tables: Vec<TableSummary>,
}

impl GenerationSummary {
    /// Summary for the table called `name`
    pub fn table(&self, name: &str) -> Option<&TableSummary> {
        self.tables.iter().find(|t| t.name == name)
    }
}
