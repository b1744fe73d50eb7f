//! Error types for normalization and projection.

use std::fmt;

use thiserror::Error;

/// Geographic axis a coordinate value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East/west position, valid within [-180, 180].
    Longitude,
    /// North/south position, valid within [-90, 90].
    Latitude,
}

impl Axis {
    /// Inclusive bound on the absolute value of this axis.
    pub fn limit(self) -> f64 {
        match self {
            Axis::Longitude => 180.0,
            Axis::Latitude => 90.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

/// Errors returned by the normalizer and projector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LonLatError {
    /// The input was null, undefined or empty.
    #[error("Value must not be null or undefined.")]
    InvalidInput,

    /// A resolved coordinate was missing, non-numeric or out of range.
    #[error("Invalid {axis} value: {value}")]
    InvalidCoordinate { axis: Axis, value: String },

    /// Latitude lies outside the range where Web Mercator is defined.
    #[error("Pixel conversion only works between {max}N and -{max}S (got {lat})")]
    Domain { lat: f64, max: f64 },

    /// Tile indices were requested beyond the supported zoom.
    #[error("Invalid zoom level: {zoom} (max: {max})")]
    InvalidZoom { zoom: u8, max: u8 },

    /// The external map toolkit bridge was used without a toolkit.
    #[error("{0} not found.")]
    Unavailable(String),
}

impl LonLatError {
    /// Shorthand for an [`LonLatError::InvalidCoordinate`] on `axis`.
    pub(crate) fn invalid(axis: Axis, value: impl Into<String>) -> Self {
        LonLatError::InvalidCoordinate {
            axis,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_names_axis_and_value() {
        let err = LonLatError::invalid(Axis::Longitude, "999");
        assert_eq!(err.to_string(), "Invalid longitude value: 999");

        let err = LonLatError::invalid(Axis::Latitude, "missing");
        assert_eq!(err.to_string(), "Invalid latitude value: missing");
    }

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(
            LonLatError::InvalidInput.to_string(),
            "Value must not be null or undefined."
        );
    }

    #[test]
    fn test_unavailable_message() {
        let err = LonLatError::Unavailable("Leaflet".to_string());
        assert_eq!(err.to_string(), "Leaflet not found.");
    }

    #[test]
    fn test_axis_limits() {
        assert_eq!(Axis::Longitude.limit(), 180.0);
        assert_eq!(Axis::Latitude.limit(), 90.0);
    }
}
