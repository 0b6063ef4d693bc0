//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the CLI's own
//! configuration in TOML format with platform-specific directory resolution.
//! Theme settings documents are separate; see [`crate::parser`].

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Settings file used when `--settings` is not given
    pub settings: Option<PathBuf>,
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Application configuration.
///
/// Stored as `config.toml` in the config directory:
///
/// ```toml
/// [paths]
/// settings = "/srv/forum/topic-cards.yml"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Logging preferences
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `TOPIC_CARDS_CONFIG_DIR` wins when set. Otherwise:
    ///
    /// - Linux: `~/.config/TopicCards/`
    /// - macOS: `~/Library/Application Support/TopicCards/`
    /// - Windows: `%APPDATA%\TopicCards\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", config_path.display()))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).with_context(|| {
            format!(
                "Failed to rename temp config file to: {}",
                config_path.display()
            )
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `logging.level` is one of trace, debug, info, warn, error
    ///
    /// The settings path is not required to exist here; commands report a
    /// missing file when they try to read it.
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Sets the default log level with validation.
    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        let previous = std::mem::replace(&mut self.logging.level, level.to_lowercase());
        if let Err(e) = self.validate() {
            self.logging.level = previous;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.settings, None);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());

        let mut config = Config::new();
        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("loud"), "{err}");
    }

    #[test]
    fn test_set_log_level() {
        let mut config = Config::new();
        config.set_log_level("DEBUG").unwrap();
        assert_eq!(config.logging.level, "debug");

        assert!(config.set_log_level("verbose").is_err());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config = Config::from_toml("[paths]\nsettings = \"/tmp/settings.yml\"\n").unwrap();
        assert_eq!(
            config.paths.settings,
            Some(PathBuf::from("/tmp/settings.yml"))
        );
        assert_eq!(config.logging.level, "warn");

        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_toml_invalid_level() {
        assert!(Config::from_toml("[logging]\nlevel = \"chatty\"\n").is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.paths.settings = Some(temp_dir.path().join("settings.yml"));
        config.set_log_level("info").unwrap();

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }
}
