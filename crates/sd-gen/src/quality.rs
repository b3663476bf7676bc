//! Data-quality issue injection
//!
//! Produces the "raw" variant of a table: a copy with randomly blanked cells
//! and a block of exact duplicate rows appended at the end. The input table is
//! only borrowed.

use crate::error::{GenError, GenResult};
use crate::sampling::sample_indices;
use rand::Rng;
use sd_core::Table;

/// Default per-cell probability of a missing value
pub const DEFAULT_MISSING_RATE: f64 = 0.02;

/// Duplicate rows appended per 100 input rows
pub const DUPLICATES_PER_HUNDRED: usize = 1;

/// A corrupted copy of a table and what was done to it
#[derive(Debug, Clone)]
pub struct CorruptedTable {
    pub table: Table,
    /// Cells blanked by missing-value injection
    pub missing_injected: usize,
    /// Rows appended as duplicates
    pub duplicates_appended: usize,
}

/// Number of duplicate rows appended to a table of `rows` rows: `floor(0.01 * rows)`
pub fn duplicate_count(rows: usize) -> usize {
    rows * DUPLICATES_PER_HUNDRED / 100
}

/// Return a corrupted copy of `table`.
///
/// Every cell outside the identifier columns is blanked with probability
/// `missing_rate` (one independent trial per cell, column by column). Then
/// `floor(0.01 * N)` distinct rows of the corrupted copy are picked uniformly
/// and appended, so the result has `N + floor(0.01 * N)` rows with the
/// originals first.
pub fn inject_quality_issues<R: Rng + ?Sized>(
    table: &Table,
    missing_rate: f64,
    rng: &mut R,
) -> GenResult<CorruptedTable> {
    if !(0.0..=1.0).contains(&missing_rate) {
        return Err(GenError::InvalidMissingRate { rate: missing_rate });
    }

    let mut corrupted = table.clone();
    let rows = corrupted.len();

    let mut missing_injected = 0;
    for (col, column) in table.columns().iter().enumerate() {
        if column.identifier {
            continue;
        }
        for row in 0..rows {
            if rng.gen::<f64>() < missing_rate {
                if corrupted.cell(row, col).is_some() {
                    missing_injected += 1;
                }
                corrupted.clear_cell(row, col);
            }
        }
    }

    let picked = sample_indices(rows, duplicate_count(rows), rng);
    corrupted.append_copies(&picked);

    log::info!(
        "Injected {} missing values and {} duplicate rows into '{}'",
        missing_injected,
        picked.len(),
        table.name()
    );

    Ok(CorruptedTable {
        table: corrupted,
        missing_injected,
        duplicates_appended: picked.len(),
    })
}

#[cfg(test)]
#[path = "quality_test.rs"]
mod tests;
