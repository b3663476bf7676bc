//! End-to-end generation run
//!
//! Generates customers, then products, then transactions from one seeded
//! generator, writes the clean tables, and then writes a corrupted copy of
//! each table to the raw sink.

use crate::customer::generate_customers;
use crate::error::GenResult;
use crate::product::generate_products;
use crate::quality::{inject_quality_issues, DEFAULT_MISSING_RATE};
use crate::summary::{GenerationSummary, TableSummary};
use crate::transaction::generate_transactions;
use rand::Rng;
use sd_core::{
    seeded_rng, validate_price_ranges, GeneratorConfig, Table, DEFAULT_SEED, PRICE_RANGES,
};
use sd_io::{prepare_output_dirs, CsvDirSink, TableSink};
use std::path::Path;

/// Suffix appended to table names in the raw output tree
pub const RAW_SUFFIX: &str = "_raw";

/// The three generated tables, held in memory
#[derive(Debug, Clone)]
pub struct Dataset {
    pub customers: Table,
    pub products: Table,
    pub transactions: Table,
}

impl Dataset {
    /// Tables in generation order
    pub fn tables(&self) -> [&Table; 3] {
        [&self.customers, &self.products, &self.transactions]
    }
}

/// Sample data generator entry point
#[derive(Debug, Clone)]
pub struct SampleDataGenerator {
    config: GeneratorConfig,
}

impl SampleDataGenerator {
    /// Create a generator, validating the configuration and the category
    /// price table
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        validate_price_ranges(PRICE_RANGES)?;
        Ok(Self { config })
    }

    /// Generate the clean tables without writing anything
    pub fn generate_tables<R: Rng + ?Sized>(&self, rng: &mut R) -> GenResult<Dataset> {
        let customers = generate_customers(self.config.customers, rng);
        let products = generate_products(self.config.products, rng)?;
        let transactions =
            generate_transactions(&customers, &products, self.config.transactions, rng)?;

        Ok(Dataset {
            customers: Table::from_records(&customers),
            products: Table::from_records(&products),
            transactions: Table::from_records(&transactions),
        })
    }

    /// Run the whole pipeline against the given sinks.
    ///
    /// Clean tables are written under their own names, corrupted copies
    /// under `<name>_raw`. Customers and products are corrupted as well as
    /// transactions.
    pub fn write_to(
        &self,
        clean: &dyn TableSink,
        raw: &dyn TableSink,
    ) -> GenResult<Vec<TableSummary>> {
        let mut rng = seeded_rng(DEFAULT_SEED);
        let dataset = self.generate_tables(&mut rng)?;

        log::info!("Writing clean tables ({})", clean.sink_type());
        let mut clean_paths = Vec::with_capacity(3);
        for table in dataset.tables() {
            clean_paths.push(clean.write_table(table, table.name())?);
        }

        log::info!("Writing raw tables with quality issues ({})", raw.sink_type());
        let mut summaries = Vec::with_capacity(3);
        for (table, clean_path) in dataset.tables().into_iter().zip(clean_paths) {
            let corrupted = inject_quality_issues(table, DEFAULT_MISSING_RATE, &mut rng)?;
            let raw_name = format!("{}{}", table.name(), RAW_SUFFIX);
            let raw_path = raw.write_table(&corrupted.table, &raw_name)?;

            summaries.push(TableSummary {
                name: table.name().to_string(),
                clean_rows: table.len(),
                raw_rows: corrupted.table.len(),
                missing_injected: corrupted.missing_injected,
                duplicates_appended: corrupted.duplicates_appended,
                clean_path,
                raw_path,
            });
        }

        Ok(summaries)
    }

    /// Generate everything into the configured clean and raw directories,
    /// creating them first if needed
    pub fn generate_all(&self) -> GenResult<GenerationSummary> {
        let clean_dir = Path::new(&self.config.clean_dir);
        let raw_dir = Path::new(&self.config.raw_dir);
        prepare_output_dirs(clean_dir, raw_dir)?;

        let tables = self.write_to(&CsvDirSink::new(clean_dir), &CsvDirSink::new(raw_dir))?;

        log::info!(
            "Generation complete: {} tables written to {} and {}",
            tables.len(),
            clean_dir.display(),
            raw_dir.display()
        );

        Ok(GenerationSummary {
            seed: DEFAULT_SEED,
            clean_dir: clean_dir.to_path_buf(),
            raw_dir: raw_dir.to_path_buf(),
            tables,
        })
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
