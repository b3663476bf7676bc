//! sd-gen - Generation layer for sampledata
//!
//! Customer, product, and transaction generators, the quality-issue injector
//! that derives the raw tables, and the [`SampleDataGenerator`] that runs
//! them in order and writes both output trees.

pub mod customer;
pub mod error;
pub mod orchestrator;
pub mod product;
pub mod quality;
pub mod sampling;
pub mod summary;
pub mod transaction;

pub use customer::{generate_customers, Country, Customer, Segment};
pub use error::{GenError, GenResult};
pub use orchestrator::{Dataset, SampleDataGenerator};
pub use product::{generate_products, Product};
pub use quality::{inject_quality_issues, CorruptedTable, DEFAULT_MISSING_RATE};
pub use sampling::sample_indices;
pub use summary::{GenerationSummary, TableSummary};
pub use transaction::{generate_transactions, Transaction};
