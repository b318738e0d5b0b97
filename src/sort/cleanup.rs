use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Remove a directory tree if it is empty after removing its empty subdirectories.
///
/// Subdirectories are processed first, then the directory is listed again,
/// so the emptiness check sees the state after the recursive removals.
/// Returns `true` if the directory was removed.
///
/// # Errors
/// Returns an error if a directory cannot be read or removed.
pub fn clean_up(directory: &Path, verbose: bool) -> Result<bool> {
    let subdirectories: Vec<PathBuf> = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory: {}", directory.display()))?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|file_type| file_type.is_dir()))
        .map(|entry| entry.path())
        .collect();

    for subdirectory in &subdirectories {
        clean_up(subdirectory, verbose)?;
    }

    let is_empty = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory: {}", directory.display()))?
        .next()
        .is_none();

    if is_empty {
        if verbose {
            println!("Deleting '{}', empty", directory.display());
        }
        fs::remove_dir(directory).with_context(|| format!("Failed to remove directory: {}", directory.display()))?;
        Ok(true)
    } else {
        Ok(false)
    }
}
