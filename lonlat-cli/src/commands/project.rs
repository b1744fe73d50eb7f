//! Web Mercator projection commands: `to-pixel`, `from-pixel` and `tile`.

use clap::Args;

use lonlat::Pixel;

use crate::commands::common::{resolve_format, resolve_position, to_json, InputArgs};
use crate::config::{ConfigFile, OutputFormat};
use crate::error::CliError;

/// Arguments for `to-pixel`.
#[derive(Debug, Args)]
pub struct ToPixelArgs {
    /// Position as JSON or `lon,lat` text
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Zoom level (defaults to config `projection.zoom`)
    #[arg(long, short)]
    pub zoom: Option<u8>,

    #[command(flatten)]
    pub input_args: InputArgs,

    /// Output format (defaults to config `output.format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `from-pixel`.
#[derive(Debug, Args)]
pub struct FromPixelArgs {
    /// Pixel X
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Pixel Y
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// Zoom level (defaults to config `projection.zoom`)
    #[arg(long, short)]
    pub zoom: Option<u8>,

    /// Output format (defaults to config `output.format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `tile`.
#[derive(Debug, Args)]
pub struct TileArgs {
    /// Position as JSON or `lon,lat` text
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Zoom level (defaults to config `projection.zoom`)
    #[arg(long, short)]
    pub zoom: Option<u8>,

    #[command(flatten)]
    pub input_args: InputArgs,

    /// Output format (defaults to config `output.format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Resolve zoom from CLI args and config.
fn resolve_zoom(cli_zoom: Option<u8>, config: &ConfigFile) -> u8 {
    cli_zoom.unwrap_or(config.projection.zoom)
}

/// Project a position to pixel coordinates.
pub fn run_to_pixel(args: &ToPixelArgs, config: &ConfigFile) -> Result<String, CliError> {
    let position = resolve_position(&args.input, args.input_args.order(config))?;
    let zoom = resolve_zoom(args.zoom, config);
    let pixel = lonlat::to_pixel(position, zoom)?;
    tracing::debug!(%position, zoom, x = pixel.x, y = pixel.y, "Projected position");

    Ok(match resolve_format(args.format, config) {
        OutputFormat::Json => to_json(&pixel)?,
        OutputFormat::Text => format!("{},{}", pixel.x, pixel.y),
    })
}

/// Convert pixel coordinates back to a position.
pub fn run_from_pixel(args: &FromPixelArgs, config: &ConfigFile) -> Result<String, CliError> {
    let zoom = resolve_zoom(args.zoom, config);
    let position = lonlat::from_pixel(Pixel::new(args.x, args.y), zoom);

    Ok(match resolve_format(args.format, config) {
        OutputFormat::Json => to_json(&position)?,
        OutputFormat::Text => position.to_string(),
    })
}

/// Find the slippy-map tile containing a position.
pub fn run_tile(args: &TileArgs, config: &ConfigFile) -> Result<String, CliError> {
    let position = resolve_position(&args.input, args.input_args.order(config))?;
    let tile = lonlat::to_tile(position, resolve_zoom(args.zoom, config))?;

    Ok(match resolve_format(args.format, config) {
        OutputFormat::Json => to_json(&tile)?,
        OutputFormat::Text => tile.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lon_first() -> InputArgs {
        InputArgs {
            lat_first: false,
            lon_first: false,
        }
    }

    #[test]
    fn test_to_pixel_uses_config_zoom() {
        let args = ToPixelArgs {
            input: "-70,40".to_string(),
            zoom: None,
            input_args: lon_first(),
            format: Some(OutputFormat::Text),
        };
        let output = run_to_pixel(&args, &ConfigFile::default()).unwrap();
        let (x, y) = output.split_once(',').unwrap();

        assert!((x.parse::<f64>().unwrap() - 40049.77777777778).abs() < 1e-9);
        assert!((y.parse::<f64>().unwrap() - 49621.12736343896).abs() < 1e-9);
    }

    #[test]
    fn test_to_pixel_rejects_polar_latitude() {
        let args = ToPixelArgs {
            input: "70,86".to_string(),
            zoom: Some(9),
            input_args: lon_first(),
            format: None,
        };
        let err = run_to_pixel(&args, &ConfigFile::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::LonLat(lonlat::LonLatError::Domain { .. })
        ));
    }

    #[test]
    fn test_from_pixel_text() {
        let args = FromPixelArgs {
            x: 40000.0,
            y: 50000.0,
            zoom: Some(9),
            format: Some(OutputFormat::Text),
        };
        let output = run_from_pixel(&args, &ConfigFile::default()).unwrap();
        assert!(output.starts_with("-70.13671875,39.198205348894"));
    }

    #[test]
    fn test_tile_output() {
        let mut args = TileArgs {
            input: "-74.0060,40.7128".to_string(),
            zoom: Some(16),
            input_args: lon_first(),
            format: Some(OutputFormat::Text),
        };
        let config = ConfigFile::default();
        assert_eq!(run_tile(&args, &config).unwrap(), "16/19295/24640");

        args.format = Some(OutputFormat::Json);
        assert_eq!(
            run_tile(&args, &config).unwrap(),
            r#"{"row":24640,"col":19295,"zoom":16}"#
        );
    }
}
