//! Loosely-structured position input.
//!
//! [`Input`] is the tagged union every normalizer entry point accepts.
//! Typed Rust values convert into it directly; dynamic JSON values are
//! classified by shape in a fixed priority order:
//!
//! 1. `null`, `false`, `0` and `""` are [`Input::Empty`]
//! 2. arrays are [`Input::Coordinates`]
//! 3. strings are [`Input::Text`]
//! 4. objects with a `coordinates` member (GeoJSON points) are
//!    [`Input::Coordinates`]
//! 5. objects with both `x` and `y` present are [`Input::Point`]
//! 6. any other object is [`Input::Fields`]
//!
//! "Present" for `x`/`y` means non-null and truthy, or exactly zero, so
//! `{"x": 0, "y": 0}` is still a point.

mod types;

pub use types::{FieldObject, RawValue};

use serde_json::Value;

use crate::position::{LonLat, Point};

/// Position input in one of the recognized shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Null, undefined or empty input.
    Empty,
    /// Ordered pair: index 0 is longitude, index 1 latitude.
    Coordinates(Vec<RawValue>),
    /// Comma-delimited `lon,lat` string.
    Text(String),
    /// Screen point: `x` is longitude, `y` latitude.
    Point { x: RawValue, y: RawValue },
    /// Object with longitude/latitude under alias keys.
    Fields(FieldObject),
}

impl Input {
    /// Short name of the shape, used in trace output.
    pub fn shape(&self) -> &'static str {
        match self {
            Input::Empty => "empty",
            Input::Coordinates(_) => "coordinates",
            Input::Text(_) => "text",
            Input::Point { .. } => "point",
            Input::Fields(_) => "fields",
        }
    }

    /// Wrap a string, treating the empty string as empty input.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Input::Empty
        } else {
            Input::Text(s)
        }
    }

    /// Classify a dynamic JSON value.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Input::Empty,
            Value::Number(n) if n.as_f64() == Some(0.0) => Input::Empty,
            // Non-zero scalars carry no coordinate fields.
            Value::Bool(true) | Value::Number(_) => Input::Fields(FieldObject::new()),
            Value::Array(items) => Input::Coordinates(coordinate_values(items)),
            Value::String(s) => Input::text(s.as_str()),
            Value::Object(map) => {
                if let Some(coordinates) = map.get("coordinates") {
                    let items = coordinates.as_array().map(Vec::as_slice).unwrap_or(&[]);
                    return Input::Coordinates(coordinate_values(items));
                }
                let x = map.get("x").and_then(RawValue::from_json);
                let y = map.get("y").and_then(RawValue::from_json);
                match (x, y) {
                    (Some(x), Some(y)) if x.is_present() && y.is_present() => {
                        Input::Point { x, y }
                    }
                    _ => Input::Fields(FieldObject::from_json(map)),
                }
            }
        }
    }
}

fn coordinate_values(items: &[Value]) -> Vec<RawValue> {
    items
        .iter()
        .map(|item| RawValue::from_json(item).unwrap_or_else(|| RawValue::Other("null".into())))
        .collect()
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::from_json(&value)
    }
}

impl From<&Value> for Input {
    fn from(value: &Value) -> Self {
        Input::from_json(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::text(value)
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::text(value.as_str())
    }
}

impl From<[f64; 2]> for Input {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Input::Coordinates(vec![lon.into(), lat.into()])
    }
}

impl From<(f64, f64)> for Input {
    fn from((lon, lat): (f64, f64)) -> Self {
        Input::Coordinates(vec![lon.into(), lat.into()])
    }
}

impl From<Vec<f64>> for Input {
    fn from(values: Vec<f64>) -> Self {
        Input::Coordinates(values.into_iter().map(RawValue::Number).collect())
    }
}

impl From<&[f64]> for Input {
    fn from(values: &[f64]) -> Self {
        Input::Coordinates(values.iter().copied().map(RawValue::Number).collect())
    }
}

impl From<Point> for Input {
    fn from(point: Point) -> Self {
        Input::Point {
            x: point.x.into(),
            y: point.y.into(),
        }
    }
}

impl From<LonLat> for Input {
    fn from(position: LonLat) -> Self {
        Input::Fields(
            FieldObject::new()
                .with("lon", position.lon)
                .with("lat", position.lat),
        )
    }
}

impl From<&LonLat> for Input {
    fn from(position: &LonLat) -> Self {
        Input::from(*position)
    }
}

impl From<FieldObject> for Input {
    fn from(fields: FieldObject) -> Self {
        Input::Fields(fields)
    }
}

/// `None` is treated as undefined input.
impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Empty, Into::into)
    }
}
