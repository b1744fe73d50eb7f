//! lonlat - Geographic position normalization and Web Mercator projection
//!
//! This library accepts positions in the loose shapes they turn up in
//! (coordinate arrays, `"lon,lat"` strings, `{x, y}` points, objects keyed
//! `lon`/`lng`/`longitude` and `lat`/`latitude`, GeoJSON points), reduces
//! them to a validated [`LonLat`], and converts to and from slippy-map
//! pixel coordinates.
//!
//! ```
//! use lonlat::{normalize, to_pixel, LonLat};
//! use serde_json::json;
//!
//! let position = normalize(json!({"lng": 70.01232, "lat": "38.13234"})).unwrap();
//! assert_eq!(position, LonLat { lon: 70.01232, lat: 38.13234 });
//!
//! let pixel = to_pixel(position, 9).unwrap();
//! assert!((pixel.x - 91026.70779).abs() < 1e-5);
//! ```
//!
//! All operations are pure functions over plain values and are safe to
//! call from any number of threads.

pub mod bridge;
pub mod error;
pub mod format;
pub mod input;
pub mod normalize;
pub mod position;
pub mod projection;

pub use bridge::{MapBridge, MapToolkit};
pub use error::{Axis, LonLatError};
pub use format::{
    is_equal, is_equal_within, print, to_coordinates, to_lat_first_string,
    to_lon_first_string, to_point, to_string, DEFAULT_PRECISION,
};
pub use input::{FieldObject, Input, RawValue};
pub use normalize::{
    from_coordinates, from_fields, from_lat_first_string, from_point, from_string, normalize,
    parse_float, LATITUDE_KEYS, LONGITUDE_KEYS,
};
pub use position::{LonLat, Point};
pub use projection::{
    from_pixel, latitude_to_pixel, longitude_to_pixel, pixel_to_latitude, pixel_to_longitude,
    tile_to_lon_lat, to_pixel, to_tile, zoom_scale, Pixel, TileCoord, MAX_LAT, MAX_TILE_ZOOM,
    MIN_LAT, PIXELS_PER_TILE,
};
