//! Normalization, translation and comparison commands.
//!
//! Provides `normalize`, `convert`, `print` and `equal`. Each command
//! returns its rendered output so callers decide where it goes.

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::commands::common::{resolve_format, resolve_position, to_json, InputArgs};
use crate::config::{ConfigFile, OutputFormat};
use crate::error::CliError;

/// Target shape for `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// `[lon, lat]` array
    Coordinates,
    /// `{x: lon, y: lat}` point
    Point,
    /// `lon,lat` string
    String,
    /// `lat,lon` string
    LatFirstString,
    /// GeoJSON Point geometry
    Geojson,
}

/// Arguments for `normalize`.
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Position as JSON or `lon,lat` text
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    #[command(flatten)]
    pub input_args: InputArgs,

    /// Output format (defaults to config `output.format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Position as JSON or `lon,lat` text
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Shape to convert to
    #[arg(long, value_enum)]
    pub to: Shape,

    #[command(flatten)]
    pub input_args: InputArgs,
}

/// Arguments for `print`.
#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Position as JSON or `lon,lat` text
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Decimal places (defaults to config `output.precision`)
    #[arg(long, short)]
    pub precision: Option<usize>,

    #[command(flatten)]
    pub input_args: InputArgs,
}

/// Arguments for `equal`.
#[derive(Debug, Args)]
pub struct EqualArgs {
    /// First position
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second position
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// Maximum per-axis difference still considered equal
    #[arg(long, short, default_value_t = 0.0)]
    pub epsilon: f64,

    #[command(flatten)]
    pub input_args: InputArgs,
}

#[derive(Serialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

/// Normalize a position and render it.
pub fn run_normalize(args: &NormalizeArgs, config: &ConfigFile) -> Result<String, CliError> {
    let position = resolve_position(&args.input, args.input_args.order(config))?;
    Ok(match resolve_format(args.format, config) {
        OutputFormat::Json => to_json(&position)?,
        OutputFormat::Text => position.to_string(),
    })
}

/// Translate a position into another shape.
pub fn run_convert(args: &ConvertArgs, config: &ConfigFile) -> Result<String, CliError> {
    let position = resolve_position(&args.input, args.input_args.order(config))?;
    tracing::debug!(shape = ?args.to, %position, "Converting position");

    let output = match args.to {
        Shape::Coordinates => to_json(&lonlat::to_coordinates(position)?)?,
        Shape::Point => to_json(&lonlat::to_point(position)?)?,
        Shape::String => lonlat::to_string(position)?,
        Shape::LatFirstString => lonlat::to_lat_first_string(position)?,
        Shape::Geojson => to_json(&GeoJsonPoint {
            kind: "Point",
            coordinates: lonlat::to_coordinates(position)?,
        })?,
    };
    Ok(output)
}

/// Render a position as `lon, lat` with fixed decimals.
pub fn run_print(args: &PrintArgs, config: &ConfigFile) -> Result<String, CliError> {
    let position = resolve_position(&args.input, args.input_args.order(config))?;
    let precision = args.precision.unwrap_or(config.output.precision);
    Ok(lonlat::print(position, Some(precision))?)
}

/// Compare two positions.
pub fn run_equal(args: &EqualArgs, config: &ConfigFile) -> Result<String, CliError> {
    let order = args.input_args.order(config);
    let a = resolve_position(&args.a, order)?;
    let b = resolve_position(&args.b, order)?;
    Ok(lonlat::is_equal_within(a, b, args.epsilon)?.to_string())
}
