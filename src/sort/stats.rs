use colored::Colorize;

use super::organize::MoveResult;

/// Statistics for a sorting run
#[derive(Debug, Default)]
pub struct RunStats {
    pub files_found: usize,
    pub games_found: usize,
    pub unresolved: Vec<String>,
    pub files_moved: usize,
    pub collisions: usize,
    pub failed_moves: usize,
    pub sessions_removed: usize,
    pub sessions_kept: usize,
}

impl RunStats {
    pub(crate) const fn add_result(&mut self, result: &MoveResult) {
        match result {
            MoveResult::Moved | MoveResult::Planned => self.files_moved += 1,
            MoveResult::Collision => self.collisions += 1,
            MoveResult::Failed => self.failed_moves += 1,
        }
    }

    pub fn print_summary(&self, dryrun: bool) {
        println!("{}", "\n--- Summary ---".bold().magenta());
        println!("Files found:        {}", self.files_found);
        println!("Games identified:   {}", self.games_found);
        if dryrun {
            println!("Files to move:      {}", self.files_moved);
        } else {
            println!("Files moved:        {}", self.files_moved);
        }
        println!(
            "Collisions:         {}",
            if self.collisions > 0 {
                self.collisions.to_string().red()
            } else {
                "0".normal()
            }
        );
        if self.failed_moves > 0 {
            println!("Failed moves:       {}", self.failed_moves.to_string().red());
        }
        if !self.unresolved.is_empty() {
            println!(
                "Unresolved IDs:     {}",
                self.unresolved.join(", ").yellow()
            );
        }
        if !dryrun {
            println!("Sessions removed:   {}", self.sessions_removed);
            println!("Sessions kept:      {}", self.sessions_kept);
        }
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn add_result_counts_each_kind() {
        let mut stats = RunStats::default();
        stats.add_result(&MoveResult::Moved);
        stats.add_result(&MoveResult::Planned);
        stats.add_result(&MoveResult::Collision);
        stats.add_result(&MoveResult::Failed);
        stats.add_result(&MoveResult::Moved);

        assert_eq!(stats.files_moved, 3);
        assert_eq!(stats.collisions, 1);
        assert_eq!(stats.failed_moves, 1);
    }
}
