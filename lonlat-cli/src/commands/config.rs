//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path`
//! for viewing and modifying settings from the command line.

use std::path::Path;

use clap::Subcommand;

use crate::config::{ConfigFile, ConfigKey};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., projection.zoom)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., projection.zoom)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand against the file at `path`.
pub fn run(command: &ConfigCommands, path: &Path) -> Result<String, CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(key, path),
        ConfigCommands::Set { key, value } => run_set(key, value, path),
        ConfigCommands::List => run_list(path),
        ConfigCommands::Path => Ok(path.display().to_string()),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'lonlat config list' to see available keys.",
            key
        ))
    })
}

/// Get a configuration value.
fn run_get(key: &str, path: &Path) -> Result<String, CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load_from(path)?;
    Ok(config_key.get(&config))
}

/// Set a configuration value.
fn run_set(key: &str, value: &str, path: &Path) -> Result<String, CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load_from(path)?;
    config_key.set(&mut config, value)?;
    config.save_to(path)?;

    tracing::info!(key = config_key.name(), value, "Updated configuration");
    Ok(format!("Set {} = {}", config_key.name(), config_key.get(&config)))
}

/// List all configuration settings, grouped by section.
fn run_list(path: &Path) -> Result<String, CliError> {
    let config = ConfigFile::load_from(path)?;

    let mut lines = vec!["Configuration Settings".to_string(), "======================".to_string()];
    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        // Print section header when section changes
        if section != current_section {
            lines.push(String::new());
            lines.push(format!("[{}]", section));
            current_section = section;
        }

        lines.push(format!("  {} = {}", key.key_name(), key.get(&config)));
    }

    Ok(lines.join("\n"))
}
