//! sd-core - Core library for sampledata
//!
//! This crate provides the shared types used across the sampledata
//! workspace: generator configuration, identifier newtypes, the product
//! category price table, the generic in-memory [`Table`], and the seeded
//! random source threaded through every sampling routine.

pub mod category;
pub mod config;
pub mod error;
pub mod ids;
mod newtype_id;
pub mod rng;
pub mod table;

pub use category::{price_range, validate_price_ranges, PriceRange, ProductCategory, PRICE_RANGES};
pub use config::GeneratorConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, ProductId, TransactionId};
pub use rng::{seeded_rng, SampleRng, DEFAULT_SEED};
pub use table::{Column, Table, TableRecord, Value};
