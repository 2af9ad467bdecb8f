//! Configuration module for the expt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the expt application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ExptError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "expt.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the expt CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lex-specific configuration.
    #[serde(default)]
    pub lex: LexConfig,
}

/// Lex-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Read source files in one call rather than through a buffered reader.
    #[serde(default = "default_true")]
    pub prefetch: bool,

    /// Default output format (`json` or `summary`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            prefetch: true,
            format: default_format(),
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/expt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExptError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ExptError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ExptError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("expt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("expt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
