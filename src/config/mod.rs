//! Configuration module for pickr
//!
//! Holds the defaults the CLI falls back to when a flag is not given.
//! Configuration is stored in the user's config directory and can be
//! overridden with `PICKR_*` environment variables.

use crate::ui::Backend;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_search() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PickrConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Frontend used when `--backend` is not given
    #[serde(default)]
    pub backend: Backend,

    /// Offer the query as a free-text choice by default
    #[serde(default)]
    pub free_text: bool,

    /// Show the search field
    #[serde(default = "default_search")]
    pub search: bool,

    /// Placeholder shown in an empty search field
    #[serde(default)]
    pub hint: Option<String>,

    /// Default `id<delimiter>label` separator for input lines
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl Default for PickrConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            backend: Backend::default(),
            free_text: false,
            search: default_search(),
            hint: None,
            delimiter: None,
        }
    }
}

impl PickrConfig {
    /// Keys accepted by [`PickrConfig::get`] and [`PickrConfig::set`]
    pub const KEYS: &'static [&'static str] =
        &["quiet", "backend", "free_text", "search", "hint", "delimiter"];

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("pickr").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, then apply `PICKR_*` overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed,
    /// or an environment override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, Environment::with_prefix("PICKR"))
    }

    /// File values first, `environment` on top
    fn load_layered(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Current value of `key` as text, `None` for unknown keys
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "quiet" => self.quiet.to_string(),
            "backend" => self.backend.to_string(),
            "free_text" => self.free_text.to_string(),
            "search" => self.search.to_string(),
            "hint" => self.hint.clone().unwrap_or_default(),
            "delimiter" => self.delimiter.clone().unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Set `key` from its text form; an empty value unsets optional keys
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parse_bool = |value: &str| {
            value.parse::<bool>().map_err(|_| {
                ConfigError::Message(format!("Invalid value for {key}: '{value}'. Use 'true' or 'false'"))
            })
        };
        let optional = |value: &str| (!value.is_empty()).then(|| value.to_string());

        match key {
            "quiet" => self.quiet = parse_bool(value)?,
            "free_text" => self.free_text = parse_bool(value)?,
            "search" => self.search = parse_bool(value)?,
            "backend" => {
                self.backend = <Backend as clap::ValueEnum>::from_str(value, true).map_err(|_| {
                    ConfigError::Message(format!("Invalid value for backend: '{value}'. Use 'tui' or 'prompt'"))
                })?;
            }
            "hint" => self.hint = optional(value),
            "delimiter" => self.delimiter = optional(value),
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    Self::KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Render as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use tempfile::TempDir;

    fn pickr_env(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Environment::with_prefix("PICKR").source(Some(vars))
    }

    #[test]
    fn test_default_config() {
        let config = PickrConfig::default();
        assert!(!config.quiet);
        assert!(config.search);
        assert!(!config.free_text);
        assert_eq!(config.backend, Backend::Tui);
        assert!(config.delimiter.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PickrConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, PickrConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend = \"prompt\"\nfree_text = true\n").unwrap();

        let config = PickrConfig::load_from(&path).unwrap();
        assert_eq!(config.backend, Backend::Prompt);
        assert!(config.free_text);
        assert!(config.search);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PickrConfig {
            quiet: true,
            search: false,
            hint: Some("type to filter".to_string()),
            delimiter: Some("\t".to_string()),
            ..PickrConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = PickrConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = PickrConfig::default();

        config.set("backend", "prompt").unwrap();
        config.set("search", "false").unwrap();
        config.set("delimiter", "\t").unwrap();

        assert_eq!(config.get("backend").as_deref(), Some("prompt"));
        assert_eq!(config.get("search").as_deref(), Some("false"));
        assert_eq!(config.delimiter.as_deref(), Some("\t"));

        config.set("delimiter", "").unwrap();
        assert!(config.delimiter.is_none());
        assert_eq!(config.get("delimiter").as_deref(), Some(""));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = PickrConfig::default();

        assert!(config.set("quiet", "yes").is_err());
        assert!(config.set("backend", "curses").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_none());
        assert_eq!(config, PickrConfig::default());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = PickrConfig::default();
        for key in PickrConfig::KEYS {
            assert!(config.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "search = true\nbackend = \"tui\"\nhint = \"from file\"\n").unwrap();

        let config =
            PickrConfig::load_layered(&path, pickr_env(&[("PICKR_SEARCH", "false"), ("PICKR_BACKEND", "prompt")]))
                .unwrap();
        assert!(!config.search);
        assert_eq!(config.backend, Backend::Prompt);
        assert_eq!(config.hint.as_deref(), Some("from file"));
    }

    #[test]
    fn test_environment_without_file() {
        let dir = TempDir::new().unwrap();
        let config =
            PickrConfig::load_layered(&dir.path().join("config.toml"), pickr_env(&[("PICKR_QUIET", "true")]))
                .unwrap();
        assert!(config.quiet);
        assert!(config.search);
    }

    #[test]
    fn test_environment_with_wrong_type_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result =
            PickrConfig::load_layered(&dir.path().join("config.toml"), pickr_env(&[("PICKR_SEARCH", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend = \"curses\"\n").unwrap();

        assert!(PickrConfig::load_from(&path).is_err());
    }
}
