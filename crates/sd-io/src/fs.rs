//! Output directory preparation

use crate::error::{WriteError, WriteResult};
use std::path::Path;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> WriteResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(WriteError::NotADirectory {
            path: dir.display().to_string(),
        });
    }

    std::fs::create_dir_all(dir).map_err(|e| WriteError::CreateDir {
        path: dir.display().to_string(),
        source: e,
    })
}

/// Ensure both output trees exist before anything is written
pub fn prepare_output_dirs(clean_dir: &Path, raw_dir: &Path) -> WriteResult<()> {
    ensure_dir(clean_dir)?;
    ensure_dir(raw_dir)?;
    log::debug!(
        "Output directories ready: {} and {}",
        clean_dir.display(),
        raw_dir.display()
    );
    Ok(())
}
