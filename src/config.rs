//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_BINARY_NAME, CONFIG_DIR_ENV};
use crate::models::{DEFAULT_CELLS, DEFAULT_SHADE_STEP, MAX_CELLS, MIN_CELLS};

/// Palette generation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of cells in a freshly generated palette
    #[serde(default = "default_size")]
    pub default_size: usize,
    /// Lightness points added or removed by one lighten/darken step
    #[serde(default = "default_shade_step")]
    pub shade_step: f32,
}

fn default_size() -> usize {
    DEFAULT_CELLS
}

fn default_shade_step() -> f32 {
    DEFAULT_SHADE_STEP
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            shade_step: default_shade_step(),
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// URL the `colors` parameter is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5173/".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the key help line on startup
    #[serde(default = "default_true")]
    pub show_help_on_startup: bool,
    /// Print the hex code on each swatch
    #[serde(default = "default_true")]
    pub show_hex_labels: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            show_hex_labels: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/palettekit/config.toml`
/// - macOS: `~/Library/Application Support/palettekit/config.toml`
/// - Windows: `%APPDATA%\palettekit\config.toml`
///
/// `PALETTEKIT_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `default_size` must be within 1..=100
/// - `shade_step` must be greater than 0 and at most 100
/// - `base_url` must start with `http://` or `https://`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Palette generation defaults
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Share link settings
    #[serde(default)]
    pub share: ShareConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `PALETTEKIT_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `palettekit`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

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
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit file path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let size = self.palette.default_size;
        if !(MIN_CELLS..=MAX_CELLS).contains(&size) {
            anyhow::bail!(
                "palette.default_size must be between {MIN_CELLS} and {MAX_CELLS}, got {size}"
            );
        }

        let step = self.palette.shade_step;
        if !(step > 0.0 && step <= 100.0) {
            anyhow::bail!("palette.shade_step must be in (0, 100], got {step}");
        }

        let url = &self.share.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("share.base_url must start with http:// or https://, got '{url}'");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.palette.default_size, 20);
        assert!((config.palette.shade_step - 10.0).abs() < f32::EPSILON);
        assert_eq!(config.share.base_url, "http://localhost:5173/");
        assert!(config.ui.show_help_on_startup);
        assert!(config.ui.show_hex_labels);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.palette.default_size = 0;
        assert!(config.validate().is_err());
        config.palette.default_size = 101;
        assert!(config.validate().is_err());
        config.palette.default_size = 100;
        assert!(config.validate().is_ok());

        config.palette.shade_step = 0.0;
        assert!(config.validate().is_err());
        config.palette.shade_step = f32::NAN;
        assert!(config.validate().is_err());
        config.palette.shade_step = 5.0;

        config.share.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.share.base_url = "https://example.com/p".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.palette.default_size = 8;
        config.share.base_url = "https://colors.example/".to_string();
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_save_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.palette.default_size = 500;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }

    #[test]
    fn test_config_load_missing_and_partial() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        assert_eq!(Config::load_from(&config_file).unwrap(), Config::new());

        fs::write(&config_file, "[palette]\ndefault_size = 5\n").unwrap();
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.palette.default_size, 5);
        assert!((loaded.palette.shade_step - 10.0).abs() < f32::EPSILON);
        assert_eq!(loaded.share, ShareConfig::default());

        fs::write(&config_file, "[palette\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }
}
