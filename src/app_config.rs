use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and merging global and per-directory settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Whether character counting is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Target character count for the manuscript
    #[serde(default = "default_target_words")]
    pub target_words: usize,

    /// Minimum character count, used for the below-minimum threshold
    #[serde(default)]
    pub min_words: Option<usize>,

    /// Whether to render the status line
    #[serde(default = "default_true")]
    pub show_in_status_bar: bool,

    /// Whether to report threshold states alongside the status line
    #[serde(default)]
    pub show_background_color: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Fallback config location inside the user config directory.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("genko")
            .join("conf.json")
    }

    /// Produce a copy with a directory override applied on top.
    ///
    /// Only keys present in the override replace the global values.
    pub fn with_directory_override(&self, overrides: &DirectoryOverride) -> Self {
        let mut config = self.clone();

        if let Some(enabled) = overrides.enabled {
            config.enabled = enabled;
        }
        if let Some(target_words) = overrides.target_words {
            config.target_words = target_words;
        }
        if let Some(min_words) = overrides.min_words {
            config.min_words = Some(min_words);
        }
        if let Some(show_background_color) = overrides.show_background_color {
            config.show_background_color = show_background_color;
        }

        config
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(min_words) = self.min_words {
            if self.target_words > 0 && min_words > self.target_words {
                return Err(anyhow!(
                    "min_words ({}) must not exceed target_words ({})",
                    min_words,
                    self.target_words
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: true,
            target_words: default_target_words(),
            min_words: None,
            show_in_status_bar: true,
            show_background_color: false,
            log_level: LogLevel::default(),
        }
    }
}

/// Name of the per-directory override file placed next to manuscripts.
pub const DIRECTORY_CONFIG_FILENAME: &str = ".genko.json";

/// Per-directory configuration override.
///
/// Any subset of keys may be present; absent keys fall back to the
/// global configuration. The file uses camelCase keys on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryOverride {
    // @field: Enable/disable counting for this directory
    #[serde(default)]
    pub enabled: Option<bool>,

    // @field: Target character count for this directory
    #[serde(default)]
    pub target_words: Option<usize>,

    // @field: Minimum character count for this directory
    #[serde(default)]
    pub min_words: Option<usize>,

    // @field: Threshold state reporting for this directory
    #[serde(default)]
    pub show_background_color: Option<bool>,
}

impl DirectoryOverride {
    /// Load the override that applies to a manuscript path.
    ///
    /// Looks for `.genko.json` in the manuscript's directory. A missing
    /// file or malformed JSON is treated as "no override", never as an
    /// error surfaced to the user.
    pub fn load_for<P: AsRef<Path>>(manuscript_path: P) -> Option<Self> {
        let dir = manuscript_path.as_ref().parent()?;
        Self::load_from_dir(dir)
    }

    /// Load the override file from a specific directory, if present and
    /// well-formed.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Option<Self> {
        let config_path = dir.as_ref().join(DIRECTORY_CONFIG_FILENAME);

        let content = match std::fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(_) => return None,
        };

        match serde_json::from_str(&content) {
            Ok(overrides) => Some(overrides),
            Err(e) => {
                debug!(
                    "Ignoring malformed directory config {}: {}",
                    config_path.display(),
                    e
                );
                None
            }
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: log crate level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_target_words() -> usize {
    5000
}
