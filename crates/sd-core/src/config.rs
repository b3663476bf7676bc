//! Configuration types and parsing for sampledata.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generator configuration, optionally loaded from sampledata.yml
///
/// Only the row counts and the two output directories are configurable.
/// The random seed and the missing-value rate are fixed so that every run
/// with the same counts produces the same files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of customers to generate
    #[serde(default = "default_customers")]
    pub customers: usize,

    /// Number of products in the catalog
    #[serde(default = "default_products")]
    pub products: usize,

    /// Number of transactions to generate
    #[serde(default = "default_transactions")]
    pub transactions: usize,

    /// Directory receiving the uncorrupted reference tables
    #[serde(default = "default_clean_dir")]
    pub clean_dir: String,

    /// Directory receiving the tables with injected quality issues
    #[serde(default = "default_raw_dir")]
    pub raw_dir: String,
}

fn default_customers() -> usize {
    1000
}

fn default_products() -> usize {
    100
}

fn default_transactions() -> usize {
    5000
}

fn default_clean_dir() -> String {
    "data/processed".to_string()
}

fn default_raw_dir() -> String {
    "data/raw".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers: default_customers(),
            products: default_products(),
            transactions: default_transactions(),
            clean_dir: default_clean_dir(),
            raw_dir: default_raw_dir(),
        }
    }
}

impl GeneratorConfig {
    /// Build a validated configuration with the given row counts and the
    /// default output directories.
    pub fn with_counts(
        customers: usize,
        products: usize,
        transactions: usize,
    ) -> CoreResult<Self> {
        let config = Self {
            customers,
            products,
            transactions,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: GeneratorConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for sampledata.yml or sampledata.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("sampledata.yml");
        let yaml_path = dir.join("sampledata.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    ///
    /// Every row count must be at least 1 and both directories non-empty.
    pub fn validate(&self) -> CoreResult<()> {
        for (field, count) in [
            ("customers", self.customers),
            ("products", self.products),
            ("transactions", self.transactions),
        ] {
            if count == 0 {
                return Err(CoreError::ConfigInvalid {
                    message: format!("'{}' must be at least 1, got 0", field),
                });
            }
        }

        if self.clean_dir.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'clean_dir' cannot be empty".to_string(),
            });
        }
        if self.raw_dir.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "'raw_dir' cannot be empty".to_string(),
            });
        }
        if self.clean_dir == self.raw_dir {
            log::warn!(
                "clean_dir and raw_dir are both '{}'; files are told apart only by the _raw suffix",
                self.clean_dir
            );
        }

        Ok(())
    }

    /// Clean output directory, resolved against `root` when relative
    pub fn clean_dir_absolute(&self, root: &Path) -> PathBuf {
        resolve(root, &self.clean_dir)
    }

    /// Raw output directory, resolved against `root` when relative
    pub fn raw_dir_absolute(&self, root: &Path) -> PathBuf {
        resolve(root, &self.raw_dir)
    }

    /// Rewrite both output directories so relative ones point under `root`
    pub fn anchored(self, root: &Path) -> Self {
        let clean_dir = self.clean_dir_absolute(root).display().to_string();
        let raw_dir = self.raw_dir_absolute(root).display().to_string();
        Self {
            clean_dir,
            raw_dir,
            ..self
        }
    }
}

fn resolve(root: &Path, dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
