//! User configuration loaded from `config.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Render the integer part with thousand separators.
    pub group_digits: bool,
    /// Prompt printed before each line of input.
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_digits: false,
            prompt: "> ".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful `=` result to the clipboard.
    pub copy_on_equals: bool,
}

/// Default location: `$XDG_CONFIG_HOME/keycalc/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
}

impl Config {
    /// Parse config text. Missing sections and keys take their defaults.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Load the config at `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to load {}", path.display()))
    }
}
