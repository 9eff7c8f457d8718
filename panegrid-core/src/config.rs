//! Persisted layout settings
//!
//! Settings are stored as TOML under the user's configuration directory.
//! Missing keys take their defaults, so a partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::DEFAULT_SPLITTER_SIZE;
use crate::trace_operation;
use crate::tracing::span_names;

/// Errors raised while reading or writing settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written
    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid settings TOML
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be encoded
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No configuration directory is known for this platform
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// The settings describe an unusable layout
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level name: error, warn, info, debug or trace
    pub level: String,
    /// Custom filter directive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filter: None,
        }
    }
}

/// Initial layout of the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Grid rows
    pub rows: u32,
    /// Grid columns
    pub cols: u32,
    /// Total width in pixels
    pub width: u32,
    /// Total height in pixels
    pub height: u32,
    /// Divider thickness in pixels
    pub splitter_size: u32,
    /// Logging section
    pub logging: LoggingSettings,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 2,
            width: 1280,
            height: 800,
            splitter_size: DEFAULT_SPLITTER_SIZE,
            logging: LoggingSettings::default(),
        }
    }
}

impl LayoutSettings {
    /// `<config dir>/panegrid/layout.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("panegrid").join("layout.toml"))
    }

    /// Loads and validates settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let _span = trace_operation!(span_names::CONFIG_LOAD, path = %path.display()).entered();
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;
        tracing::debug!(rows = settings.rows, cols = settings.cols, "settings loaded");
        Ok(settings)
    }

    /// Loads from the default path, falling back to defaults.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::default_path()
            .map(|path| Self::load_or_default_from(&path))
            .unwrap_or_default()
    }

    /// Loads from `path`, falling back to defaults when the file is
    /// missing or unusable.
    #[must_use]
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), %error, "ignoring unusable settings");
            Self::default()
        })
    }

    /// Writes the settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let _span = trace_operation!(span_names::CONFIG_SAVE, path = %path.display()).entered();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Writes the settings to the default path and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` when the platform has no
    /// configuration directory, otherwise as [`save`](Self::save).
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Rejects grids without rows or columns.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}
