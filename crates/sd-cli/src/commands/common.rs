//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sd_core::{CoreError, GeneratorConfig};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Load the generator configuration.
///
/// An explicit `--config` path must exist. Without one, `sampledata.yml` (or
/// `.yaml`) in the working directory is used if present, otherwise defaults.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<GeneratorConfig> {
    if let Some(path) = &global.config {
        return GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match GeneratorConfig::load_from_dir(Path::new(".")) {
        Ok(config) => Ok(config),
        Err(CoreError::ConfigNotFound { .. }) => {
            log::debug!("No sampledata.yml found, using defaults");
            Ok(GeneratorConfig::default())
        }
        Err(e) => Err(e).context("Failed to load sampledata.yml"),
    }
}

/// Directory that relative output paths are resolved against: the directory
/// holding `--config` when given, otherwise the working directory
pub(crate) fn project_root(global: &GlobalArgs) -> PathBuf {
    global
        .config
        .as_deref()
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
