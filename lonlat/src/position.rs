//! Canonical position and screen-point types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, LonLatError};
use crate::normalize;

/// A validated longitude/latitude pair in WGS84 degrees.
///
/// Every value handed out by the normalizer satisfies
/// `lon ∈ [-180, 180]` and `lat ∈ [-90, 90]`. Zero is a valid value on
/// both axes.
///
/// Deserializing accepts any of the loose input shapes understood by
/// [`normalize`](crate::normalize()), so `"12,34"`, `[12, 34]` and
/// `{"lng": 12, "latitude": 34}` all decode to the same position.
/// Serializing always produces `{"lon": .., "lat": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct LonLat {
    /// Longitude in degrees, positive east.
    pub lon: f64,
    /// Latitude in degrees, positive north.
    pub lat: f64,
}

impl LonLat {
    /// Create a position, validating both axes.
    pub fn new(lon: f64, lat: f64) -> Result<Self, LonLatError> {
        Ok(Self {
            lon: checked(Axis::Longitude, lon)?,
            lat: checked(Axis::Latitude, lat)?,
        })
    }

    /// The `[lon, lat]` coordinate array used by GeoJSON.
    pub fn to_coordinates(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// The screen-point form, with `x` as longitude and `y` as latitude.
    pub fn to_point(&self) -> Point {
        Point {
            x: self.lon,
            y: self.lat,
        }
    }
}

fn checked(axis: Axis, value: f64) -> Result<f64, LonLatError> {
    if value.is_nan() || value.abs() > axis.limit() {
        return Err(LonLatError::invalid(axis, value.to_string()));
    }
    Ok(value)
}

/// Renders as `lon,lat`.
impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

/// Parses a longitude-first `lon,lat` string.
impl FromStr for LonLat {
    type Err = LonLatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize::from_string(s)
    }
}

impl TryFrom<serde_json::Value> for LonLat {
    type Error = LonLatError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        normalize::normalize(value)
    }
}

/// A screen-space point whose `x` carries longitude and `y` latitude.
///
/// Not to be confused with [`Pixel`](crate::Pixel), which lives in
/// projected pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
