//! Wizard configuration: commit types, scopes, and per-type overrides.
//!
//! The config file is JSON (default name `.epistlerc`) using the camelCase
//! field names of the legacy commitizen config format, so existing
//! `.changelogrc`-style files can be pointed at directly with `--config`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".epistlerc";

/// A commit type the user can pick (e.g. `feat`, `fix`, `WIP`).
#[derive(Debug, Clone, Deserialize)]
pub struct CommitType {
    /// Value stored in the answer set and used in the message head line.
    pub key: String,
    /// Display name shown in the type list.
    pub name: String,
    /// Optional longer description appended in grey to the display name.
    #[serde(default)]
    pub description: Option<String>,
}

/// A selectable scope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scope {
    pub name: String,
}

/// Full wizard configuration.
///
/// All fields beyond `types` are optional in the file; missing fields
/// default to empty collections / false.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub types: Vec<CommitType>,

    #[serde(default)]
    pub scopes: Vec<Scope>,

    /// Per-type replacement for the default scope list.
    #[serde(default)]
    pub scope_overrides: HashMap<String, Vec<Scope>>,

    /// When true, the scope list always offers "empty" and "custom" entries.
    #[serde(default)]
    pub allow_custom_scopes: bool,

    /// Type keys (lowercase match) for which the breaking-change prompt appears.
    #[serde(default)]
    pub allow_breaking_changes: Vec<String>,
}

impl Config {
    /// Load configuration from `path`, or from `.epistlerc` in the current
    /// directory when no path is given.
    ///
    /// A missing file is not an error: the wizard runs with an empty
    /// configuration, matching the behavior of the legacy adapter.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path: PathBuf = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Config file {} not found, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::ReadFailed { path, source: e }),
        };

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed { path, source: e })
    }

    /// The scope list in effect for a given type: the override when one is
    /// configured for that key, otherwise the default list.
    pub fn scopes_for(&self, type_key: &str) -> &[Scope] {
        match self.scope_overrides.get(type_key) {
            Some(scopes) => scopes,
            None => &self.scopes,
        }
    }

    /// Whether the breaking-change prompt applies to this type.
    ///
    /// Membership is tested against the lowercased type key.
    pub fn allows_breaking_changes(&self, type_key: &str) -> bool {
        let key = type_key.to_lowercase();
        self.allow_breaking_changes.iter().any(|t| *t == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Config {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"{
                "types": [
                    {"key": "feat", "name": "feat: a new feature", "description": "adds functionality"},
                    {"key": "fix", "name": "fix: a bug fix"}
                ],
                "scopes": [{"name": "core"}, {"name": "cli"}],
                "scopeOverrides": {"fix": [{"name": "hotfix"}]},
                "allowCustomScopes": true,
                "allowBreakingChanges": ["feat", "fix"]
            }"#,
        );

        assert_eq!(config.types.len(), 2);
        assert_eq!(config.types[0].key, "feat");
        assert_eq!(config.types[0].description.as_deref(), Some("adds functionality"));
        assert!(config.types[1].description.is_none());
        assert_eq!(config.scopes.len(), 2);
        assert!(config.allow_custom_scopes);
        assert_eq!(config.scope_overrides["fix"][0].name, "hotfix");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let config = parse(r#"{"types": [{"key": "feat", "name": "feat"}]}"#);

        assert!(config.scopes.is_empty());
        assert!(config.scope_overrides.is_empty());
        assert!(!config.allow_custom_scopes);
        assert!(config.allow_breaking_changes.is_empty());
    }

    #[test]
    fn test_scopes_for_prefers_override() {
        let config = parse(
            r#"{
                "types": [{"key": "fix", "name": "fix"}],
                "scopes": [{"name": "core"}],
                "scopeOverrides": {"fix": [{"name": "hotfix"}]}
            }"#,
        );

        assert_eq!(config.scopes_for("fix")[0].name, "hotfix");
        assert_eq!(config.scopes_for("feat")[0].name, "core");
    }

    #[test]
    fn test_allows_breaking_changes_case_insensitive() {
        let config = parse(
            r#"{
                "types": [{"key": "feat", "name": "feat"}],
                "allowBreakingChanges": ["feat"]
            }"#,
        );

        assert!(config.allows_breaking_changes("feat"));
        assert!(config.allows_breaking_changes("FEAT"));
        assert!(!config.allows_breaking_changes("fix"));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/.epistlerc"))).unwrap();
        assert!(config.types.is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".epistlerc");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed { .. }));
    }
}
