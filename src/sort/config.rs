//! Configuration for sorting captures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use super::{LOOKUP_FILE_NAME, default_root};

/// Config from the user config file.
#[derive(Debug, Default, Deserialize)]
pub struct SwitchSortConfig {
    #[serde(default)]
    pub dryrun: bool,
    #[serde(default)]
    pub ids_file: Option<PathBuf>,
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
}

/// Wrapper needed for parsing the config section.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    #[serde(default)]
    switch_sort: SwitchSortConfig,
}

/// Final config created from CLI arguments and user config file.
#[derive(Debug)]
pub struct Config {
    pub dryrun: bool,
    pub lookup_file: PathBuf,
    pub root: PathBuf,
    pub verbose: bool,
}

impl SwitchSortConfig {
    /// Try to read user config from the file if it exists.
    /// Otherwise, fall back to default config.
    ///
    /// # Errors
    /// Returns an error if config file exists but cannot be read or parsed.
    pub fn get_user_config() -> anyhow::Result<Self> {
        let Some(path) = crate::config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file {}:\n{e}", path.display())),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {error}",
                path.display()
            )),
        }
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML string is invalid.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str::<UserConfig>(toml_str)
            .map(|config| config.switch_sort)
            .context("Failed to parse switch_sort config TOML")
    }
}

impl Config {
    /// Combine command line values with the user config.
    /// Command line paths take precedence and boolean flags are combined.
    ///
    /// # Errors
    /// Returns an error if the resolved root directory does not exist.
    pub fn new(
        user_config: SwitchSortConfig,
        root: Option<&Path>,
        lookup_file: Option<PathBuf>,
        dryrun: bool,
        verbose: bool,
    ) -> anyhow::Result<Self> {
        let fallback_root = user_config.root.or_else(default_root).unwrap_or_default();
        let root = crate::resolve_input_path_or(root, &fallback_root)?;
        let lookup_file = lookup_file
            .or(user_config.ids_file)
            .unwrap_or_else(|| PathBuf::from(LOOKUP_FILE_NAME));

        Ok(Self {
            dryrun: dryrun || user_config.dryrun,
            lookup_file,
            root,
            verbose: verbose || user_config.verbose,
        })
    }
}

#[cfg(test)]
mod switch_sort_config_tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn from_toml_str_parses_empty_config() {
        let config = SwitchSortConfig::from_toml_str("").unwrap();
        assert!(!config.dryrun);
        assert!(!config.verbose);
        assert!(config.root.is_none());
        assert!(config.ids_file.is_none());
    }

    #[test]
    fn from_toml_str_parses_switch_sort_section() {
        let toml = r#"
[switch_sort]
root = "/captures/Switch"
ids_file = "/captures/game_IDs.json"
dryrun = true
verbose = true
"#;
        let config = SwitchSortConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("/captures/Switch")));
        assert_eq!(config.ids_file, Some(PathBuf::from("/captures/game_IDs.json")));
        assert!(config.dryrun);
        assert!(config.verbose);
    }

    #[test]
    fn from_toml_str_ignores_other_sections() {
        let toml = r"
[flip_date]
verbose = true

[switch_sort]
dryrun = true
";
        let config = SwitchSortConfig::from_toml_str(toml).unwrap();
        assert!(config.dryrun);
        assert!(!config.verbose);
    }

    #[test]
    fn from_toml_str_invalid_toml_returns_error() {
        let result = SwitchSortConfig::from_toml_str("this is not valid toml {{{");
        assert!(result.is_err());
    }

    #[test]
    fn new_prefers_cli_root_and_ids_file() {
        let cli_root = tempdir().unwrap();
        let config_root = tempdir().unwrap();
        let user_config = SwitchSortConfig {
            root: Some(config_root.path().to_path_buf()),
            ids_file: Some(PathBuf::from("config_ids.json")),
            ..Default::default()
        };

        let config = Config::new(
            user_config,
            Some(cli_root.path()),
            Some(PathBuf::from("cli_ids.json")),
            false,
            false,
        )
        .unwrap();

        assert_eq!(config.root, dunce::canonicalize(cli_root.path()).unwrap());
        assert_eq!(config.lookup_file, PathBuf::from("cli_ids.json"));
    }

    #[test]
    fn new_falls_back_to_user_config() {
        let config_root = tempdir().unwrap();
        let user_config = SwitchSortConfig {
            root: Some(config_root.path().to_path_buf()),
            ids_file: Some(PathBuf::from("config_ids.json")),
            dryrun: true,
            verbose: true,
        };

        let config = Config::new(user_config, None, None, false, false).unwrap();

        assert_eq!(config.root, dunce::canonicalize(config_root.path()).unwrap());
        assert_eq!(config.lookup_file, PathBuf::from("config_ids.json"));
        assert!(config.dryrun);
        assert!(config.verbose);
    }

    #[test]
    fn new_uses_default_lookup_file_name() {
        let root = tempdir().unwrap();
        let config = Config::new(SwitchSortConfig::default(), Some(root.path()), None, true, false).unwrap();
        assert_eq!(config.lookup_file, PathBuf::from(LOOKUP_FILE_NAME));
        assert!(config.dryrun);
        assert!(!config.verbose);
    }

    #[test]
    fn new_fails_for_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("Switch");
        let result = Config::new(SwitchSortConfig::default(), Some(&missing), None, false, false);
        assert!(result.is_err());
    }
}
