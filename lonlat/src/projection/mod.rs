//! Web Mercator pixel projection.
//!
//! Converts between geographic coordinates and the pixel space of the
//! standard slippy-map tile pyramid, where zoom `z` spans
//! `2^z * 256` pixels on each axis. Formulas follow the OpenStreetMap
//! slippy-map reference implementation and are evaluated exactly as
//! written there so results match published test vectors.

mod types;

pub use types::{Pixel, TileCoord, MAX_LAT, MAX_TILE_ZOOM, MIN_LAT, PIXELS_PER_TILE};

use std::f64::consts::PI;

use crate::error::LonLatError;
use crate::input::Input;
use crate::normalize::normalize;
use crate::position::LonLat;

/// Width and height of the pixel space at `zoom`.
#[inline]
pub fn zoom_scale(zoom: u8) -> f64 {
    2.0_f64.powi(i32::from(zoom)) * PIXELS_PER_TILE
}

#[inline]
fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[inline]
fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert a longitude to its pixel X at `zoom`.
///
/// ```
/// let x = lonlat::longitude_to_pixel(-70.0, 9);
/// assert!((x - 40049.77777777778).abs() < 1e-9);
/// ```
#[inline]
pub fn longitude_to_pixel(longitude: f64, zoom: u8) -> f64 {
    (longitude + 180.0) / 360.0 * zoom_scale(zoom)
}

/// Convert a latitude to its pixel Y at `zoom`.
///
/// The result is only meaningful within [`MIN_LAT`]..=[`MAX_LAT`];
/// [`to_pixel`] enforces that range.
#[inline]
pub fn latitude_to_pixel(latitude: f64, zoom: u8) -> f64 {
    let lat_rad = to_radians(latitude);
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * zoom_scale(zoom)
}

/// Convert a pixel X at `zoom` to longitude.
#[inline]
pub fn pixel_to_longitude(x: f64, zoom: u8) -> f64 {
    x / zoom_scale(zoom) * 360.0 - 180.0
}

/// Convert a pixel Y at `zoom` to latitude.
///
/// Any `y` within the pixel space maps into `[MIN_LAT, MAX_LAT]`, reaching
/// the bounds at the top and bottom edges.
#[inline]
pub fn pixel_to_latitude(y: f64, zoom: u8) -> f64 {
    let lat_rad = (PI * (1.0 - 2.0 * y / zoom_scale(zoom))).sinh().atan();
    to_degrees(lat_rad)
}

/// Project any supported input to pixel coordinates at `zoom`.
///
/// # Errors
///
/// Normalization errors are passed through. A latitude beyond
/// [`MAX_LAT`] in either hemisphere yields [`LonLatError::Domain`].
///
/// ```
/// let pixel = lonlat::to_pixel("-70,40", 9).unwrap();
/// assert!((pixel.x - 40049.77777777778).abs() < 1e-9);
/// assert!((pixel.y - 49621.12736343896).abs() < 1e-9);
/// ```
pub fn to_pixel(input: impl Into<Input>, zoom: u8) -> Result<Pixel, LonLatError> {
    let position = normalize(input)?;
    if position.lat > MAX_LAT || position.lat < MIN_LAT {
        return Err(LonLatError::Domain {
            lat: position.lat,
            max: MAX_LAT,
        });
    }

    Ok(Pixel {
        x: longitude_to_pixel(position.lon, zoom),
        y: latitude_to_pixel(position.lat, zoom),
    })
}

/// Convert pixel coordinates at `zoom` back to a position.
#[inline]
pub fn from_pixel(pixel: Pixel, zoom: u8) -> LonLat {
    LonLat {
        lon: pixel_to_longitude(pixel.x, zoom),
        lat: pixel_to_latitude(pixel.y, zoom),
    }
}

/// Find the tile containing a position.
///
/// Positions on the east edge (`lon = 180`) or south edge (`lat = MIN_LAT`)
/// belong to the last tile in that direction.
pub fn to_tile(input: impl Into<Input>, zoom: u8) -> Result<TileCoord, LonLatError> {
    if zoom > MAX_TILE_ZOOM {
        return Err(LonLatError::InvalidZoom {
            zoom,
            max: MAX_TILE_ZOOM,
        });
    }

    let pixel = to_pixel(input, zoom)?;
    let last = (1u32 << zoom) - 1;
    let index = |p: f64| ((p / PIXELS_PER_TILE).floor().max(0.0) as u32).min(last);

    Ok(TileCoord {
        row: index(pixel.y),
        col: index(pixel.x),
        zoom,
    })
}

/// Position of a tile's northwest corner.
#[inline]
pub fn tile_to_lon_lat(tile: &TileCoord) -> LonLat {
    from_pixel(tile.origin(), tile.zoom)
}
