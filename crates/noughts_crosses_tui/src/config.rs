//! Terminal host configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives the tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Token colours.
    #[serde(default)]
    colors: ColorConfig,
}

/// Token colours as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Colour of crosses.
    #[serde(default = "default_cross")]
    cross: String,

    /// Colour of noughts.
    #[serde(default = "default_nought")]
    nought: String,

    /// Colour of the hover preview.
    #[serde(default = "default_preview")]
    preview: String,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts_crosses.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_cross() -> String {
    "#023E8A".to_string()
}

#[instrument]
fn default_nought() -> String {
    "#1B4332".to_string()
}

#[instrument]
fn default_preview() -> String {
    "#DEE2E6".to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            cross: default_cross(),
            nought: default_nought(),
            preview: default_preview(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            colors: ColorConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Reject bad colours at load time.
        config.colors.palette()?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Resolved terminal colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Palette {
    /// Colour of crosses.
    cross: Color,
    /// Colour of noughts.
    nought: Color,
    /// Colour of the hover preview.
    preview: Color,
}

impl ColorConfig {
    /// Parses the colour strings.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            cross: parse_color("cross", &self.cross)?,
            nought: parse_color("nought", &self.nought)?,
            preview: parse_color("preview", &self.preview)?,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        ColorConfig::default().palette().unwrap_or(Self {
            cross: Color::Blue,
            nought: Color::Green,
            preview: Color::Gray,
        })
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Invalid {} colour: {}", name, value)))
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
