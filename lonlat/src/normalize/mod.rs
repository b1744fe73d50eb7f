//! Normalization of loose input into a validated [`LonLat`].
//!
//! [`normalize`] dispatches on the [`Input`] shape; the `from_*` functions
//! skip dispatch when the caller already knows what it has. All of them
//! resolve longitude before latitude, so input broken on both axes reports
//! the longitude.

mod floatize;

pub use floatize::{parse_float, LATITUDE_KEYS, LONGITUDE_KEYS};

use tracing::trace;

use crate::error::{Axis, LonLatError};
use crate::input::{FieldObject, Input, RawValue};
use crate::position::{LonLat, Point};

use floatize::floatize;

/// Normalize any supported input shape into a validated position.
///
/// # Errors
///
/// - [`LonLatError::InvalidInput`] for empty input
/// - [`LonLatError::InvalidCoordinate`] when an axis is missing,
///   non-numeric or out of range
///
/// # Examples
///
/// ```
/// use lonlat::{normalize, LonLat};
/// use serde_json::json;
///
/// let expected = LonLat { lon: 12.0, lat: 34.0 };
/// assert_eq!(normalize("12,34").unwrap(), expected);
/// assert_eq!(normalize([12.0, 34.0]).unwrap(), expected);
/// assert_eq!(normalize(json!({"x": 12, "y": 34})).unwrap(), expected);
/// assert_eq!(normalize(json!({"longitude": 12, "lat": "34"})).unwrap(), expected);
/// ```
pub fn normalize(input: impl Into<Input>) -> Result<LonLat, LonLatError> {
    let input = input.into();
    trace!(shape = input.shape(), "normalizing input");

    match &input {
        Input::Empty => Err(LonLatError::InvalidInput),
        Input::Text(s) if s.is_empty() => Err(LonLatError::InvalidInput),
        Input::Coordinates(values) => pair(values.first(), values.get(1)),
        Input::Text(s) => from_string(s),
        Input::Point { x, y } => pair(Some(x), Some(y)),
        Input::Fields(fields) => from_fields(fields),
    }
}

/// Parse an ordered `[lon, lat]` pair. Extra elements are ignored.
///
/// ```
/// let position = lonlat::from_coordinates(["12", "34"]).unwrap();
/// assert_eq!((position.lon, position.lat), (12.0, 34.0));
/// ```
pub fn from_coordinates<I, V>(coordinates: I) -> Result<LonLat, LonLatError>
where
    I: IntoIterator<Item = V>,
    V: Into<RawValue>,
{
    let mut values = coordinates.into_iter().map(Into::into);
    let lon = values.next();
    let lat = values.next();
    pair(lon.as_ref(), lat.as_ref())
}

/// Parse an object carrying longitude and latitude under alias keys.
///
/// Longitude is read from the first of `lon`, `lng`, `longitude` that
/// holds a number; latitude from `lat`, then `latitude`.
pub fn from_fields(fields: &FieldObject) -> Result<LonLat, LonLatError> {
    let lon = floatize(
        Axis::Longitude,
        LONGITUDE_KEYS.iter().map(|key| fields.get(key)),
    )?;
    let lat = floatize(
        Axis::Latitude,
        LATITUDE_KEYS.iter().map(|key| fields.get(key)),
    )?;
    Ok(LonLat { lon, lat })
}

/// Parse a screen point, reading `x` as longitude and `y` as latitude.
pub fn from_point(point: Point) -> Result<LonLat, LonLatError> {
    pair(
        Some(&RawValue::Number(point.x)),
        Some(&RawValue::Number(point.y)),
    )
}

/// Parse a `lon,lat` string.
///
/// The string is split on the first comma. A string without a comma has
/// no latitude and fails validation like any other missing value.
pub fn from_string(s: &str) -> Result<LonLat, LonLatError> {
    let (first, second) = split_pair(s);
    pair(Some(&first), second.as_ref())
}

/// Parse a `lat,lon` string.
///
/// Latitude-first order is never inferred; callers holding such strings
/// must use this function.
pub fn from_lat_first_string(s: &str) -> Result<LonLat, LonLatError> {
    let (first, second) = split_pair(s);
    pair(second.as_ref(), Some(&first))
}

fn split_pair(s: &str) -> (RawValue, Option<RawValue>) {
    match s.split_once(',') {
        Some((first, second)) => (first.into(), Some(second.into())),
        None => (s.into(), None),
    }
}

fn pair(lon: Option<&RawValue>, lat: Option<&RawValue>) -> Result<LonLat, LonLatError> {
    let lon = floatize(Axis::Longitude, [lon])?;
    let lat = floatize(Axis::Latitude, [lat])?;
    Ok(LonLat { lon, lat })
}
