//! Bridge to an external mapping toolkit's point type.
//!
//! Mapping toolkits (Leaflet and friends) construct their own lat/lng
//! objects. [`MapBridge`] holds an optional [`MapToolkit`] and hands it
//! normalized coordinates in the `(lat, lon)` order such constructors
//! expect. A bridge built without a toolkit fails every conversion with
//! [`LonLatError::Unavailable`].

use crate::error::LonLatError;
use crate::input::Input;
use crate::normalize::normalize;

/// A mapping toolkit able to build its native point type.
pub trait MapToolkit {
    /// The toolkit's point type.
    type Point;

    /// Name used in "not found" errors.
    fn name(&self) -> &str;

    /// Build a point. Latitude comes first.
    fn lat_lng(&self, lat: f64, lon: f64) -> Self::Point;
}

/// Converts positions into a toolkit's point type, if one is configured.
#[derive(Debug, Clone)]
pub struct MapBridge<T> {
    toolkit: Option<T>,
    name: String,
}

impl<T: MapToolkit> MapBridge<T> {
    /// Create a bridge backed by `toolkit`.
    pub fn new(toolkit: T) -> Self {
        let name = toolkit.name().to_string();
        Self {
            toolkit: Some(toolkit),
            name,
        }
    }

    /// Create a bridge with no toolkit present.
    ///
    /// `name` identifies the missing toolkit in errors.
    pub fn unconfigured(name: impl Into<String>) -> Self {
        Self {
            toolkit: None,
            name: name.into(),
        }
    }

    /// Whether a toolkit is configured.
    pub fn is_available(&self) -> bool {
        self.toolkit.is_some()
    }

    /// Normalize `input` and build the toolkit's point from it.
    ///
    /// Toolkit availability is checked before the input is examined.
    pub fn to_map_point(&self, input: impl Into<Input>) -> Result<T::Point, LonLatError> {
        let toolkit = self
            .toolkit
            .as_ref()
            .ok_or_else(|| LonLatError::Unavailable(self.name.clone()))?;
        let position = normalize(input)?;
        Ok(toolkit.lat_lng(position.lat, position.lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct LatLng {
        lat: f64,
        lng: f64,
    }

    struct MockToolkit;

    impl MapToolkit for MockToolkit {
        type Point = LatLng;

        fn name(&self) -> &str {
            "Leaflet"
        }

        fn lat_lng(&self, lat: f64, lon: f64) -> LatLng {
            LatLng { lat, lng: lon }
        }
    }

    #[test]
    fn test_configured_bridge_passes_lat_first() {
        let bridge = MapBridge::new(MockToolkit);
        assert!(bridge.is_available());

        let point = bridge.to_map_point("12,34").unwrap();
        assert_eq!(point, LatLng { lat: 34.0, lng: 12.0 });
    }

    #[test]
    fn test_unconfigured_bridge_is_unavailable() {
        let bridge: MapBridge<MockToolkit> = MapBridge::unconfigured("Leaflet");
        assert!(!bridge.is_available());

        let err = bridge.to_map_point("12,34").unwrap_err();
        assert_eq!(err, LonLatError::Unavailable("Leaflet".to_string()));
        assert_eq!(err.to_string(), "Leaflet not found.");
    }

    #[test]
    fn test_unavailable_takes_precedence_over_bad_input() {
        let bridge: MapBridge<MockToolkit> = MapBridge::unconfigured("Leaflet");
        let err = bridge.to_map_point(None::<&str>).unwrap_err();
        assert!(matches!(err, LonLatError::Unavailable(_)));
    }

    #[test]
    fn test_configured_bridge_propagates_normalization_errors() {
        let bridge = MapBridge::new(MockToolkit);
        assert_eq!(
            bridge.to_map_point("0,999").unwrap_err().to_string(),
            "Invalid latitude value: 999"
        );
    }
}
