//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default character used to mask password input
pub const DEFAULT_MASK_CHAR: char = '•';

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "signin_tui=warn";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Character drawn in place of each password character
    pub mask_char: Option<char>,
    /// Show the key hint bar
    pub show_help: Option<bool>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signin", "signin-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`
    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
