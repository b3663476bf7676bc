//! CLI command implementations

pub(crate) mod clean;
pub(crate) mod common;
pub(crate) mod generate;
