//! Clean command implementation
//!
//! Deletes the clean and raw output directories. Both are resolved against
//! the project root and must sit strictly inside it; anything else is refused
//! before a single file is touched.

use anyhow::{bail, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::cli::{CleanArgs, GlobalArgs};
use crate::commands::common::{load_config, project_root};

/// Refuse targets that are the root itself, lie outside it, or climb out
/// through `..`
fn check_target(root: &Path, target: &Path) -> Result<()> {
    if target.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!("Refusing to clean '{}': path contains '..'", target.display());
    }
    if target == root || !target.starts_with(root) {
        bail!(
            "Refusing to clean '{}': not a directory inside the project root '{}'",
            target.display(),
            root.display()
        );
    }
    Ok(())
}

/// Output directories to delete, deduplicated and checked against `root`
fn clean_targets(root: &Path, global: &GlobalArgs) -> Result<Vec<PathBuf>> {
    let config = load_config(global)?;
    let mut targets = vec![config.clean_dir_absolute(root)];
    let raw_dir = config.raw_dir_absolute(root);
    if !targets.contains(&raw_dir) {
        targets.push(raw_dir);
    }

    for target in &targets {
        check_target(root, target)?;
    }
    Ok(targets)
}

/// Execute the clean command
pub fn execute(args: &CleanArgs, global: &GlobalArgs) -> Result<()> {
    let root = project_root(global);
    let targets = clean_targets(&root, global)?;

    let mut removed = 0;
    let mut failures = Vec::new();

    for target in &targets {
        match fs::symlink_metadata(target) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                failures.push(format!("{}: not a directory", target.display()));
                continue;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Nothing to clean at {}", target.display());
                continue;
            }
            Err(e) => {
                failures.push(format!("{}: {}", target.display(), e));
                continue;
            }
        }

        if args.dry_run {
            println!("Would remove {}", target.display());
            removed += 1;
            continue;
        }

        match fs::remove_dir_all(target) {
            Ok(()) => {
                println!("Removed {}", target.display());
                removed += 1;
            }
            Err(e) => failures.push(format!("{}: {}", target.display(), e)),
        }
    }

    if !failures.is_empty() {
        bail!(
            "Failed to clean {} output path(s):\n  {}",
            failures.len(),
            failures.join("\n  ")
        );
    }

    log::info!(
        "{} of {} output directories {}",
        removed,
        targets.len(),
        if args.dry_run {
            "would be removed"
        } else {
            "removed"
        }
    );
    Ok(())
}

#[cfg(test)]
#[path = "clean_test.rs"]
mod tests;
