//! Configuration management for TED.
//!
//! Loads configuration from ${TED_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::document::DEFAULT_HISTORY_LIMIT;

pub mod paths {
    //! Path resolution for TED configuration.
    //!
    //! TED_HOME resolution order:
    //! 1. TED_HOME environment variable (if set)
    //! 2. ~/.config/ted (default)

    use std::path::PathBuf;

    /// Returns the TED home directory.
    ///
    /// Checks TED_HOME env var first, falls back to ~/.config/ted
    pub fn ted_home() -> PathBuf {
        if let Ok(home) = std::env::var("TED_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("ted"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ted_home().join("config.toml")
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_true() -> bool {
    true
}

/// Editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Undo snapshots retained per open file.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Prompt to save unsaved files when exiting. When false, exit does not
    /// prompt and does not save.
    #[serde(default = "default_true")]
    pub confirm_save_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            confirm_save_on_exit: true,
        }
    }
}

const CONFIG_TEMPLATE: &str = "\
# TED configuration

# Undo snapshots retained per open file.
# history_limit = 10

# Prompt to save unsaved files when exiting.
# confirm_save_on_exit = true
";

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if the file already exists (no silent overwrite); creates parent
    /// directories as needed.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
