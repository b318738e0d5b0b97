//! Game ID to display name lookup table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use thiserror::Error;

/// Characters that are not allowed in directory names on common file systems.
const INVALID_PATH_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Reasons a game ID could not be resolved to a display name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No record for game ID `{0}`")]
    NotFound(String),
    #[error("Record for game ID `{id}` is not a string: {value}")]
    NotAString { id: String, value: String },
}

/// Read-only mapping from game ID to display name, loaded once per run.
#[derive(Debug, Default)]
pub struct GameLookup {
    entries: HashMap<String, Value>,
}

impl GameLookup {
    /// Load the lookup table from a JSON file containing a flat object.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read game ID file: {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("Failed to parse game ID file: {}", path.display()))
    }

    /// Parse the lookup table from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the string is not a JSON object.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let entries: HashMap<String, Value> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Get the display name for the given game ID.
    ///
    /// # Errors
    /// Returns an error if the ID is missing or its value is not a string.
    pub fn resolve(&self, game_id: &str) -> Result<&str, LookupError> {
        match self.entries.get(game_id) {
            Some(Value::String(name)) => Ok(name),
            Some(value) => Err(LookupError::NotAString {
                id: game_id.to_string(),
                value: value.to_string(),
            }),
            None => Err(LookupError::NotFound(game_id.to_string())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace characters that are invalid in directory names with an underscore.
///
/// Names that would not create a subdirectory of the root (`""`, `"."`, `".."`)
/// become a single underscore.
///
/// ```rust
/// use switch_sort::sort::sanitize_name;
///
/// assert_eq!(sanitize_name("Game: Part 2?"), "Game_ Part 2_");
/// ```
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if INVALID_PATH_CHARS.contains(&c) { '_' } else { c })
        .collect();
    match sanitized.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => sanitized,
    }
}

#[cfg(test)]
mod lookup_tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    use tempfile::tempdir;

    const IDS: &str = r#"{
        "ABC123": "My Game",
        "DEF456": "Other: Game?",
        "BAD000": 42
    }"#;

    #[test]
    fn resolves_known_id() {
        let lookup = GameLookup::from_json_str(IDS).unwrap();
        assert_eq!(lookup.resolve("ABC123"), Ok("My Game"));
        assert_eq!(lookup.len(), 3);
        assert!(!lookup.is_empty());
    }

    #[test]
    fn missing_id_is_not_found() {
        let lookup = GameLookup::from_json_str(IDS).unwrap();
        assert_eq!(
            lookup.resolve("XYZ789"),
            Err(LookupError::NotFound("XYZ789".to_string()))
        );
    }

    #[test]
    fn non_string_value_is_reported_with_id() {
        let lookup = GameLookup::from_json_str(IDS).unwrap();
        let error = lookup.resolve("BAD000").unwrap_err();
        assert_eq!(
            error,
            LookupError::NotAString {
                id: "BAD000".to_string(),
                value: "42".to_string()
            }
        );
        assert!(error.to_string().contains("BAD000"));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(GameLookup::from_json_str(r#"["ABC123", "My Game"]"#).is_err());
        assert!(GameLookup::from_json_str("{ not json").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game_IDs.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(IDS.as_bytes()).unwrap();

        let lookup = GameLookup::load(&path).unwrap();
        assert_eq!(lookup.resolve("DEF456"), Ok("Other: Game?"));
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = GameLookup::load(&dir.path().join("game_IDs.json"));
        assert!(result.is_err());
    }

    #[test]
    fn sanitize_replaces_every_invalid_char() {
        assert_eq!(sanitize_name(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_name("Game: Part 2?"), "Game_ Part 2_");
    }

    #[test]
    fn sanitize_special_directory_names() {
        assert_eq!(sanitize_name(""), "_");
        assert_eq!(sanitize_name("."), "_");
        assert_eq!(sanitize_name(".."), "_");
        assert_eq!(sanitize_name("..."), "...");
        assert_eq!(sanitize_name("../x"), ".._x");
    }

    #[test]
    fn sanitize_keeps_valid_names() {
        assert_eq!(sanitize_name("My Game"), "My Game");
        assert_eq!(sanitize_name("Pokémon™ Scarlet"), "Pokémon™ Scarlet");
    }
}
