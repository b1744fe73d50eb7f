//! Pixel and tile types for the Web Mercator projection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixels along one edge of a map tile.
pub const PIXELS_PER_TILE: f64 = 256.0;

/// Maximum latitude for a valid Mercator conversion, `atan(sinh(π))` in degrees.
///
/// Beyond this the projection diverges.
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Minimum latitude for a valid Mercator conversion.
pub const MIN_LAT: f64 = -MAX_LAT;

/// Highest zoom whose tile indices fit comfortably in a `u32`.
pub const MAX_TILE_ZOOM: u8 = 30;

/// A position in projected pixel space at some zoom level.
///
/// `x` grows eastward from the antimeridian and `y` grows southward from
/// [`MAX_LAT`]. At zoom `z` both range over `[0, 2^z * 256]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Slippy-map tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// Tile row (Y, 0 = north)
    pub row: u32,
    /// Tile column (X, 0 = west)
    pub col: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    pub fn new(row: u32, col: u32, zoom: u8) -> Self {
        Self { row, col, zoom }
    }

    /// Pixel position of this tile's northwest corner.
    pub fn origin(&self) -> Pixel {
        Pixel {
            x: f64::from(self.col) * PIXELS_PER_TILE,
            y: f64::from(self.row) * PIXELS_PER_TILE,
        }
    }
}

/// Renders as the slippy-map path `zoom/col/row`.
impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}
