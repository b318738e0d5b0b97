//! Find capture session directories and the media files inside them.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use itertools::Itertools;
use regex::Regex;
use walkdir::WalkDir;

use super::is_media_file;
use crate::natsort;

static RE_SESSION_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}").expect("Failed to create regex pattern for session directory"));

/// Session directories and the media files found inside them,
/// both in natural sort order.
#[derive(Debug, Default)]
pub struct MediaScan {
    pub sessions: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Session directory names start with four digits.
#[must_use]
pub fn is_session_dir_name(name: &str) -> bool {
    RE_SESSION_DIR.is_match(name)
}

/// Collect session directories directly under root and all media files within them.
///
/// # Errors
/// Returns an error if a directory cannot be read.
pub fn scan_sessions(root: &Path) -> Result<MediaScan> {
    let mut sessions = Vec::new();
    for entry in fs::read_dir(root).with_context(|| format!("Failed to read directory: {}", root.display()))? {
        let path = entry?.path();
        if path.is_dir() && is_session_dir_name(&crate::get_normalized_dir_name(&path)?) {
            sessions.push(path);
        }
    }
    natsort::sort_paths(&mut sessions);

    let mut files = Vec::new();
    for session in &sessions {
        for entry in WalkDir::new(session).min_depth(1) {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() && is_media_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    natsort::sort_paths(&mut files);

    Ok(MediaScan { sessions, files })
}

/// Find all media files anywhere under root whose name matches `*-<game_id>.*`.
///
/// # Errors
/// Returns an error if a directory cannot be read.
pub fn find_game_files(root: &Path, game_id: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("-{game_id}.");
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_file()
            && is_media_file(entry.path())
            && crate::path_to_filename_string(entry.path()).contains(&pattern)
        {
            files.push(entry.into_path());
        }
    }
    natsort::sort_paths(&mut files);
    Ok(files)
}

/// Add the path of the entry that failed to a directory walk error.
fn walk_error(error: walkdir::Error) -> anyhow::Error {
    let context = error.path().map_or_else(
        || "Failed to walk directory".to_string(),
        |path| format!("Failed to read: {}", path.display()),
    );
    anyhow::Error::new(error).context(context)
}

/// Get the game ID from a capture file name: the second `-` separated field of the stem.
///
/// # Errors
/// Returns an error if the stem has fewer than two fields.
pub fn extract_game_id(path: &Path) -> Result<String> {
    let (stem, _) = crate::get_normalized_file_name_and_extension(path)?;
    stem.split('-').nth(1).map(ToString::to_string).with_context(|| {
        format!(
            "File name does not contain a game ID, expected '<timestamp>-<game ID>': {}",
            path.display()
        )
    })
}

/// Distinct game IDs for the given files in order of first appearance.
///
/// # Errors
/// Returns an error if any file name is missing the game ID field.
pub fn unique_game_ids(files: &[PathBuf]) -> Result<Vec<String>> {
    let ids = files.iter().map(|path| extract_game_id(path)).collect::<Result<Vec<_>>>()?;
    Ok(ids.into_iter().unique().collect())
}
