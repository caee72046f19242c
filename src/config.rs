//! Configuration management
//!
//! Settings live in `<config_dir>/wisp-term/config.toml`. Every section and
//! field is optional; anything missing falls back to the built-in defaults,
//! which reproduce the landing page demo exactly.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sim::{MenuController, MonitorMetrics, MonitorView, Script, TypingConfig};

/// Errors raised while reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub terminal: TerminalConfig,
    pub monitor: MonitorMetrics,
    pub page: PageConfig,
}

/// Animation timing, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between the section coming into view and the first keystroke
    pub start_delay_ms: u64,
    /// Delay between keystrokes
    pub per_char_ms: u64,
    /// Pause after typing before the menu opens
    pub completion_delay_ms: u64,
    /// Cursor blink period
    pub blink_ms: u64,
    /// Maximum time between redraws
    pub frame_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 400,
            per_char_ms: 150,
            completion_delay_ms: 1000,
            blink_ms: 530,
            frame_ms: 50,
        }
    }
}

/// Text shown inside the simulated terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Command typed at the prompt
    pub command: String,
    /// Prompt glyph
    pub prompt: String,
    /// Window title bar text
    pub title: String,
    /// Banner shown above the menu
    pub banner: String,
    /// Question under the banner
    pub question: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            command: "wisp".to_string(),
            prompt: "$".to_string(),
            title: "wisp — terminal".to_string(),
            banner: "WISP CLI v0.1.0".to_string(),
            question: "What would you like to do?".to_string(),
        }
    }
}

/// Host page settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Start with the terminal section already in view
    pub autostart: bool,
    /// Rows the section must be inside the viewport before it starts
    pub visibility_margin: u16,
    /// Height of the intro block above the section, in rows
    pub intro_rows: u16,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            autostart: false,
            visibility_margin: 3,
            intro_rows: 30,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("wisp-term").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Typing settings derived from `[timing]` and `[terminal]`.
    pub fn typing(&self) -> TypingConfig {
        TypingConfig {
            target: self.terminal.command.clone(),
            start_delay: Duration::from_millis(self.timing.start_delay_ms),
            per_char_delay: Duration::from_millis(self.timing.per_char_ms),
            completion_delay: Duration::from_millis(self.timing.completion_delay_ms),
        }
    }

    /// Build the simulation script for this configuration.
    pub fn script(&self) -> Script {
        Script::new(
            self.typing(),
            MenuController::default(),
            MonitorView::new(self.monitor.clone()),
        )
        .with_blink_period(Duration::from_millis(self.timing.blink_ms))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.timing.frame_ms.max(1))
    }
}
