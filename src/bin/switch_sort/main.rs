use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use switch_sort::sort::{Config, GameLookup, SwitchSort, SwitchSortConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    name = env!("CARGO_BIN_NAME"),
    about = "Sort console screenshots and videos into per-game directories"
)]
struct Args {
    /// Optional screenshot root directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    path: Option<PathBuf>,

    /// JSON file mapping game IDs to names
    #[arg(short, long, name = "FILE", value_hint = clap::ValueHint::FilePath)]
    ids: Option<PathBuf>,

    /// Only print changes without moving files
    #[arg(short, long)]
    print: bool,

    /// Generate shell completion
    #[arg(short = 'l', long, name = "SHELL")]
    completion: Option<Shell>,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(ref shell) = args.completion {
        return switch_sort::generate_shell_completion(*shell, Args::command(), true, env!("CARGO_BIN_NAME"));
    }

    let user_config = SwitchSortConfig::get_user_config()?;
    let config = Config::new(user_config, args.path.as_deref(), args.ids, args.print, args.verbose)?;
    if config.verbose {
        eprintln!("Config: {config:#?}");
    }

    let lookup = GameLookup::load(&config.lookup_file)?;
    let dryrun = config.dryrun;
    let stats = SwitchSort::new(config, lookup).run()?;
    stats.print_summary(dryrun);
    Ok(())
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_path_and_flags() {
        let args = Args::try_parse_from(["switchsort", "/captures/Switch", "-i", "ids.json", "-p", "-v"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("/captures/Switch")));
        assert_eq!(args.ids, Some(PathBuf::from("ids.json")));
        assert!(args.print);
        assert!(args.verbose);
        assert!(args.completion.is_none());
    }

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["switchsort"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.ids.is_none());
        assert!(!args.print);
        assert!(!args.verbose);
    }
}
