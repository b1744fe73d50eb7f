//! INI configuration file for the CLI.
//!
//! The file lives at `<config_dir>/lonlat/config.ini` and supplies
//! defaults that command-line flags override:
//!
//! ```ini
//! [output]
//! precision = 5
//! format = json
//!
//! [projection]
//! zoom = 9
//!
//! [input]
//! order = lon-first
//! ```
//!
//! A missing file is not an error; every setting has a default.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use ini::Ini;
use thiserror::Error;

use lonlat::{DEFAULT_PRECISION, MAX_TILE_ZOOM};

/// Zoom used for projection when neither flag nor config sets one.
pub const DEFAULT_ZOOM: u8 = 9;

/// Errors reading, writing or interpreting the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// How positions are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON objects and arrays
    #[default]
    Json,
    /// Plain comma-separated text
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Token order of plain-text position arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputOrder {
    /// `lon,lat`
    #[default]
    LonFirst,
    /// `lat,lon`
    LatFirst,
}

impl fmt::Display for InputOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputOrder::LonFirst => write!(f, "lon-first"),
            InputOrder::LatFirst => write!(f, "lat-first"),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Decimal places for `print`.
    pub precision: usize,
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            format: OutputFormat::default(),
        }
    }
}

/// `[projection]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSettings {
    pub zoom: u8,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSettings {
    pub order: InputOrder,
}

/// The parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub output: OutputSettings,
    pub projection: ProjectionSettings,
    pub input: InputSettings,
}

/// Default config file location.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lonlat")
        .join("config.ini")
}

impl ConfigFile {
    /// Load from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            if let Some(value) = ini.get_from(Some(key.section()), key.key_name()) {
                key.set(&mut config, value)?;
            }
        }

        tracing::debug!(path = %path.display(), ?config, "Loaded config file");
        Ok(config)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini.write_to_file(path).map_err(write_error)
    }
}

/// A settable configuration key, addressed as `section.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    OutputPrecision,
    OutputFormat,
    ProjectionZoom,
    InputOrder,
}

impl ConfigKey {
    /// All keys in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::OutputPrecision,
            ConfigKey::OutputFormat,
            ConfigKey::ProjectionZoom,
            ConfigKey::InputOrder,
        ]
    }

    /// Full `section.key` name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::OutputPrecision => "output.precision",
            ConfigKey::OutputFormat => "output.format",
            ConfigKey::ProjectionZoom => "projection.zoom",
            ConfigKey::InputOrder => "input.order",
        }
    }

    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::OutputPrecision | ConfigKey::OutputFormat => "output",
            ConfigKey::ProjectionZoom => "projection",
            ConfigKey::InputOrder => "input",
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::OutputPrecision => "precision",
            ConfigKey::OutputFormat => "format",
            ConfigKey::ProjectionZoom => "zoom",
            ConfigKey::InputOrder => "order",
        }
    }

    /// Current value as it would be written to the file.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::OutputPrecision => config.output.precision.to_string(),
            ConfigKey::OutputFormat => config.output.format.to_string(),
            ConfigKey::ProjectionZoom => config.projection.zoom.to_string(),
            ConfigKey::InputOrder => config.input.order.to_string(),
        }
    }

    /// Parse and store `value`.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason,
        };

        match self {
            ConfigKey::OutputPrecision => {
                let precision: usize = value.parse().map_err(|e| invalid(format!("{}", e)))?;
                if precision > 17 {
                    return Err(invalid("must be at most 17".to_string()));
                }
                config.output.precision = precision;
            }
            ConfigKey::OutputFormat => {
                config.output.format = OutputFormat::from_str(value, true).map_err(invalid)?;
            }
            ConfigKey::ProjectionZoom => {
                let zoom: u8 = value.parse().map_err(|e| invalid(format!("{}", e)))?;
                if zoom > MAX_TILE_ZOOM {
                    return Err(invalid(format!("must be at most {}", MAX_TILE_ZOOM)));
                }
                config.projection.zoom = zoom;
            }
            ConfigKey::InputOrder => {
                config.input.order = InputOrder::from_str(value, true).map_err(invalid)?;
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
