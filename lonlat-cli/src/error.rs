//! CLI error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The library rejected a position.
    #[error(transparent)]
    LonLat(#[from] lonlat::LonLatError),

    /// An argument that looked like JSON failed to parse.
    #[error("Invalid JSON input '{input}': {source}")]
    Json {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be loaded, saved or interpreted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A result could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lonlat_error_is_transparent() {
        let err = CliError::from(lonlat::LonLatError::InvalidInput);
        assert_eq!(err.to_string(), "Value must not be null or undefined.");
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("missing section".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing section");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = CliError::from(io);
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
