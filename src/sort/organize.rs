use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;

use crate::{get_relative_path_or_filename, print_bold, print_error, print_warning};

use super::cleanup::clean_up;
use super::config::Config;
use super::lookup::{GameLookup, LookupError, sanitize_name};
use super::scan::{find_game_files, scan_sessions, unique_game_ids};
use super::stats::RunStats;

/// Outcome of processing a single capture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    /// Would be moved in dryrun mode.
    Planned,
    Collision,
    Failed,
}

/// Sorts captures under the root directory into per-game directories.
#[derive(Debug)]
pub struct SwitchSort {
    config: Config,
    lookup: GameLookup,
}

impl SwitchSort {
    #[must_use]
    pub const fn new(config: Config, lookup: GameLookup) -> Self {
        Self { config, lookup }
    }

    /// Run the full pipeline: scan, resolve, move and clean up.
    ///
    /// Unknown game IDs and destination collisions are reported and skipped.
    ///
    /// # Errors
    /// Returns an error for file names without a game ID and for file system failures
    /// while scanning, creating game directories, or removing session directories.
    pub fn run(&self) -> anyhow::Result<RunStats> {
        let root = &self.config.root;
        let scan = scan_sessions(root)?;
        if self.config.verbose {
            for path in &scan.files {
                println!("{}", get_relative_path_or_filename(path, root));
            }
        }
        println!("Found {} files to sort", scan.files.len());

        let game_ids = unique_game_ids(&scan.files)?;
        println!("Identified {} different games", game_ids.len());

        let mut stats = RunStats {
            files_found: scan.files.len(),
            games_found: game_ids.len(),
            ..Default::default()
        };
        let mut planned = HashSet::new();

        for (index, game_id) in game_ids.iter().enumerate() {
            let name = match self.lookup.resolve(game_id) {
                Ok(name) => name,
                Err(error @ LookupError::NotFound(_)) => {
                    print_error!("{error} in '{}'", self.config.lookup_file.display());
                    stats.unresolved.push(game_id.clone());
                    continue;
                }
                Err(error) => {
                    print_error!("Failed to resolve game ID `{game_id}`: {error}");
                    stats.unresolved.push(game_id.clone());
                    continue;
                }
            };

            print_bold!("{}/{}: {name}", index + 1, game_ids.len());
            let directory_name = sanitize_name(name);
            for result in self.organize_game(game_id, &directory_name, &mut planned)? {
                stats.add_result(&result);
            }
        }

        if self.config.dryrun {
            if self.config.verbose {
                println!("Dryrun: skipping cleanup");
            }
        } else {
            for session in &scan.sessions {
                if clean_up(session, self.config.verbose)? {
                    stats.sessions_removed += 1;
                } else {
                    print_warning!(
                        "Not cleaning up '{}' as it still contains files",
                        get_relative_path_or_filename(session, root)
                    );
                    stats.sessions_kept += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Move every capture for the given game ID into its game directory.
    fn organize_game(
        &self,
        game_id: &str,
        directory_name: &str,
        planned: &mut HashSet<PathBuf>,
    ) -> anyhow::Result<Vec<MoveResult>> {
        let root = &self.config.root;
        let game_dir = root.join(directory_name);
        if !self.config.dryrun {
            fs::create_dir_all(&game_dir)
                .with_context(|| format!("Failed to create directory: {}", game_dir.display()))?;
        }

        let mut results = Vec::new();
        for path in find_game_files(root, game_id)? {
            let destination = destination_path(&game_dir, &path)?;
            let result = self.move_file(&path, destination, planned);
            results.push(result);
        }

        Ok(results)
    }

    /// Move a single file, refusing to overwrite an existing destination.
    fn move_file(&self, source: &Path, destination: PathBuf, planned: &mut HashSet<PathBuf>) -> MoveResult {
        let root = &self.config.root;
        if destination.exists() || planned.contains(&destination) {
            print_error!(
                "Destination '{}' exists when moving '{}'",
                get_relative_path_or_filename(&destination, root),
                get_relative_path_or_filename(source, root)
            );
            return MoveResult::Collision;
        }

        if self.config.dryrun {
            println!(
                "{} {} -> {}",
                "Dryrun:".cyan().bold(),
                get_relative_path_or_filename(source, root),
                get_relative_path_or_filename(&destination, root)
            );
            planned.insert(destination);
            return MoveResult::Planned;
        }

        match fs::rename(source, &destination) {
            Ok(()) => {
                if self.config.verbose {
                    println!(
                        "{} -> {}",
                        get_relative_path_or_filename(source, root),
                        get_relative_path_or_filename(&destination, root)
                    );
                }
                MoveResult::Moved
            }
            Err(error) => {
                print_error!(
                    "Failed to move '{}': {error}",
                    get_relative_path_or_filename(source, root)
                );
                MoveResult::Failed
            }
        }
    }
}

/// Destination path for a capture file inside its game directory.
///
/// # Errors
/// Returns an error if the path has no file name.
pub fn destination_path(game_dir: &Path, source: &Path) -> anyhow::Result<PathBuf> {
    let (stem, extension) = crate::get_normalized_file_name_and_extension(source)?;
    let timestamp = stem.split('-').next().unwrap_or_default();
    let new_stem = reformat_timestamp(timestamp);
    let file_name = if extension.is_empty() {
        new_stem
    } else {
        format!("{new_stem}.{extension}")
    };
    Ok(game_dir.join(file_name))
}

/// Convert a raw `YYYYMMDDHHMMSS` timestamp to `YYYY-MM-DD_HH-MM-SS`.
///
/// Shorter input yields empty fields instead of failing.
///
/// ```rust
/// use switch_sort::sort::reformat_timestamp;
///
/// assert_eq!(reformat_timestamp("20230415123045"), "2023-04-15_12-30-45");
/// assert_eq!(reformat_timestamp("202304"), "2023-04-_--");
/// ```
#[must_use]
pub fn reformat_timestamp(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let slice = |start: usize, end: usize| -> String {
        let end = end.min(chars.len());
        let start = start.min(end);
        chars[start..end].iter().collect()
    };
    format!(
        "{}-{}-{}_{}-{}-{}",
        slice(0, 4),
        slice(4, 6),
        slice(6, 8),
        slice(8, 10),
        slice(10, 12),
        slice(12, 14)
    )
}
