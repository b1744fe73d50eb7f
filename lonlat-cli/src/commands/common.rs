//! Common types and utilities shared across CLI commands.

use clap::Args;
use lonlat::{from_lat_first_string, normalize, LonLat};
use serde::Serialize;

use crate::config::{ConfigFile, InputOrder, OutputFormat};
use crate::error::CliError;

/// Flags controlling how position arguments are read.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Read plain-text positions as `lat,lon` instead of `lon,lat`
    #[arg(long, conflicts_with = "lon_first")]
    pub lat_first: bool,

    /// Read plain-text positions as `lon,lat` (overrides config)
    #[arg(long)]
    pub lon_first: bool,
}

impl InputArgs {
    /// CLI flags take precedence, then config.
    pub fn order(&self, config: &ConfigFile) -> InputOrder {
        if self.lat_first {
            InputOrder::LatFirst
        } else if self.lon_first {
            InputOrder::LonFirst
        } else {
            config.input.order
        }
    }
}

/// Whether an argument should be read as JSON rather than plain text.
fn looks_like_json(arg: &str) -> bool {
    let trimmed = arg.trim_start();
    trimmed.starts_with('{')
        || trimmed.starts_with('[')
        || trimmed.starts_with('"')
        || trimmed == "null"
}

/// Resolve a position argument.
///
/// Arguments starting with `{`, `[` or `"` (and the literal `null`) are
/// parsed as JSON and classified by shape. Anything else is a delimited
/// string read in `order`.
pub fn resolve_position(arg: &str, order: InputOrder) -> Result<LonLat, CliError> {
    if looks_like_json(arg) {
        let value: serde_json::Value =
            serde_json::from_str(arg).map_err(|source| CliError::Json {
                input: arg.to_string(),
                source,
            })?;
        tracing::debug!(shape = lonlat::Input::from_json(&value).shape(), "Parsed JSON argument");
        return Ok(normalize(value)?);
    }

    let position = match order {
        InputOrder::LonFirst => normalize(arg)?,
        InputOrder::LatFirst if arg.is_empty() => normalize(arg)?,
        InputOrder::LatFirst => from_lat_first_string(arg)?,
    };
    Ok(position)
}

/// Resolve the output format from CLI args and config.
pub fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> OutputFormat {
    cli_format.unwrap_or(config.output.format)
}

/// Render a serializable value as compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_lon_first() {
        let position = resolve_position("12,34", InputOrder::LonFirst).unwrap();
        assert_eq!(position, LonLat { lon: 12.0, lat: 34.0 });
    }

    #[test]
    fn test_plain_text_lat_first() {
        let position = resolve_position("12,34", InputOrder::LatFirst).unwrap();
        assert_eq!(position, LonLat { lon: 34.0, lat: 12.0 });
    }

    #[test]
    fn test_json_object_ignores_order() {
        let position = resolve_position(r#"{"lng": 12, "lat": 34}"#, InputOrder::LatFirst).unwrap();
        assert_eq!(position, LonLat { lon: 12.0, lat: 34.0 });
    }

    #[test]
    fn test_json_array_and_string() {
        let expected = LonLat { lon: 12.0, lat: 34.0 };
        assert_eq!(resolve_position("[12, 34]", InputOrder::LonFirst).unwrap(), expected);
        assert_eq!(resolve_position(r#""12,34""#, InputOrder::LonFirst).unwrap(), expected);
    }

    #[test]
    fn test_json_null_is_invalid_input() {
        let err = resolve_position("null", InputOrder::LonFirst).unwrap_err();
        assert!(matches!(
            err,
            CliError::LonLat(lonlat::LonLatError::InvalidInput)
        ));
    }

    #[test]
    fn test_empty_argument_is_invalid_input() {
        for order in [InputOrder::LonFirst, InputOrder::LatFirst] {
            let err = resolve_position("", order).unwrap_err();
            assert!(matches!(
                err,
                CliError::LonLat(lonlat::LonLatError::InvalidInput)
            ));
        }
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = resolve_position("{lng: 12}", InputOrder::LonFirst).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn test_input_args_precedence() {
        let mut config = ConfigFile::default();
        config.input.order = InputOrder::LatFirst;

        let none = InputArgs {
            lat_first: false,
            lon_first: false,
        };
        assert_eq!(none.order(&config), InputOrder::LatFirst);

        let lon_first = InputArgs {
            lat_first: false,
            lon_first: true,
        };
        assert_eq!(lon_first.order(&config), InputOrder::LonFirst);
    }

    #[test]
    fn test_to_json_position() {
        let position = LonLat { lon: 1.5, lat: -2.0 };
        assert_eq!(to_json(&position).unwrap(), r#"{"lon":1.5,"lat":-2.0}"#);
    }

    #[test]
    fn test_to_json_reports_serialization_failure() {
        let mut keyed = std::collections::BTreeMap::new();
        keyed.insert((1, 2), 3);

        let err = to_json(&keyed).unwrap_err();
        assert!(matches!(err, CliError::Serialize(_)));
        assert!(err.to_string().starts_with("Failed to render output"));
    }
}
