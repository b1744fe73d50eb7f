//! Output formatters and comparison.
//!
//! Every function here normalizes its input first, so it accepts the same
//! shapes as [`normalize`] and fails the same way.

use crate::error::LonLatError;
use crate::input::Input;
use crate::normalize::normalize;
use crate::position::Point;

/// Decimal places used by [`print`] when none are given.
pub const DEFAULT_PRECISION: usize = 5;

/// Translate to a GeoJSON-style `[lon, lat]` array.
pub fn to_coordinates(input: impl Into<Input>) -> Result<[f64; 2], LonLatError> {
    Ok(normalize(input)?.to_coordinates())
}

/// Translate to a point with `x` as longitude and `y` as latitude.
pub fn to_point(input: impl Into<Input>) -> Result<Point, LonLatError> {
    Ok(normalize(input)?.to_point())
}

/// Translate to a `lon,lat` string.
///
/// Numbers use their shortest round-tripping form, so
/// `to_string([12.0, 34.5])` is `"12,34.5"`.
pub fn to_string(input: impl Into<Input>) -> Result<String, LonLatError> {
    Ok(normalize(input)?.to_string())
}

/// Alias of [`to_string`], named for symmetry with [`to_lat_first_string`].
pub fn to_lon_first_string(input: impl Into<Input>) -> Result<String, LonLatError> {
    to_string(input)
}

/// Translate to a `lat,lon` string.
pub fn to_lat_first_string(input: impl Into<Input>) -> Result<String, LonLatError> {
    let position = normalize(input)?;
    Ok(format!("{},{}", position.lat, position.lon))
}

/// Render as `lon, lat` rounded to `precision` decimal places.
///
/// `None` uses [`DEFAULT_PRECISION`]. `Some(0)` rounds to whole degrees
/// rather than falling back to the default.
///
/// ```
/// assert_eq!(lonlat::print("12.345678,34", None).unwrap(), "12.34568, 34.00000");
/// assert_eq!(lonlat::print("12.345678,34", Some(2)).unwrap(), "12.35, 34.00");
/// assert_eq!(lonlat::print("12.6,34", Some(0)).unwrap(), "13, 34");
/// ```
pub fn print(input: impl Into<Input>, precision: Option<usize>) -> Result<String, LonLatError> {
    let position = normalize(input)?;
    let precision = precision.unwrap_or(DEFAULT_PRECISION);
    Ok(format!(
        "{:.*}, {:.*}",
        precision, position.lon, precision, position.lat
    ))
}

/// Whether two inputs normalize to exactly the same position.
pub fn is_equal(a: impl Into<Input>, b: impl Into<Input>) -> Result<bool, LonLatError> {
    is_equal_within(a, b, 0.0)
}

/// Whether two inputs normalize to positions at most `epsilon` apart on
/// each axis. The bound is inclusive.
pub fn is_equal_within(
    a: impl Into<Input>,
    b: impl Into<Input>,
    epsilon: f64,
) -> Result<bool, LonLatError> {
    let a = normalize(a)?;
    let b = normalize(b)?;
    Ok((a.lat - b.lat).abs() <= epsilon && (a.lon - b.lon).abs() <= epsilon)
}
