//! Sort game console captures into per-game directories.
//!
//! The console stores screenshots and video clips in directories named after the
//! capture date, with file names of the form `<timestamp>-<game ID>.<ext>`.
//! This module resolves each game ID to a display name from a lookup file,
//! moves the captures into `<root>/<name>/` renamed to `YYYY-MM-DD_HH-MM-SS.<ext>`,
//! and finally removes the emptied date directories.

mod cleanup;
mod config;
mod lookup;
mod organize;
mod scan;
mod stats;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub use cleanup::clean_up;
pub use config::{Config, SwitchSortConfig};
pub use lookup::{GameLookup, LookupError, sanitize_name};
pub use organize::{MoveResult, SwitchSort, destination_path, reformat_timestamp};
pub use scan::{MediaScan, extract_game_id, find_game_files, is_session_dir_name, scan_sessions, unique_game_ids};
pub use stats::RunStats;

/// Recognized capture file extensions: still images and video clips.
pub const MEDIA_EXTENSIONS: [&str; 2] = ["jpg", "mp4"];

/// Default lookup file name, resolved against the current working directory.
pub const LOOKUP_FILE_NAME: &str = "game_IDs.json";

/// Default capture root: `$HOME/Pictures/Screenshots/Switch`
#[must_use]
pub fn default_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Pictures").join("Screenshots").join("Switch"))
}

/// Check if the path has one of the recognized media extensions.
/// Matching is exact and case-sensitive.
#[must_use]
pub fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| MEDIA_EXTENSIONS.contains(&extension))
}

#[cfg(test)]
mod media_file_tests {
    use super::*;

    #[test]
    fn recognizes_image_and_video() {
        assert!(is_media_file(Path::new("2023/20230415123045-ABC.jpg")));
        assert!(is_media_file(Path::new("2023/20230415123045-ABC.mp4")));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_media_file(Path::new("2023/20230415123045-ABC.png")));
        assert!(!is_media_file(Path::new("2023/20230415123045-ABC.JPG")));
        assert!(!is_media_file(Path::new("2023/notes")));
    }

    #[test]
    fn default_root_ends_with_switch() {
        if let Some(root) = default_root() {
            assert!(root.ends_with("Pictures/Screenshots/Switch"));
        }
    }
}
