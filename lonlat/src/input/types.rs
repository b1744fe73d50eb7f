//! Raw value and field-object types carried by [`Input`](super::Input).

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// A coordinate value before numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A numeric value.
    Number(f64),
    /// Text that may carry a leading number (`"12.5"`, `" -3 deg"`).
    Text(String),
    /// A value that never coerces to a number (booleans, arrays, objects).
    ///
    /// Holds the JSON rendering for error messages.
    Other(String),
}

impl RawValue {
    /// Whether this value counts as "present" for point detection.
    ///
    /// Mirrors a truthiness test with an explicit exception for zero:
    /// empty text and `false` are absent, while `0` is present.
    pub(crate) fn is_present(&self) -> bool {
        match self {
            RawValue::Number(n) => !n.is_nan(),
            RawValue::Text(s) => !s.is_empty(),
            RawValue::Other(s) => s != "false",
        }
    }

    /// Convert a JSON member. `null` has no raw value.
    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => n.as_f64().map(RawValue::Number),
            Value::String(s) => Some(RawValue::Text(s.clone())),
            other => Some(RawValue::Other(other.to_string())),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) | RawValue::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// A string-keyed object whose coordinates live under alias keys.
///
/// Keys are stored verbatim; alias lookup happens during normalization.
///
/// ```
/// use lonlat::FieldObject;
///
/// let fields = FieldObject::new().with("lng", 12.0).with("latitude", "34");
/// assert_eq!(lonlat::from_fields(&fields).unwrap().lon, 12.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldObject {
    fields: BTreeMap<String, RawValue>,
}

impl FieldObject {
    /// Create an empty field object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field by exact key.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build from a JSON object, dropping `null` members.
    pub(crate) fn from_json(map: &serde_json::Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .filter_map(|(key, value)| RawValue::from_json(value).map(|raw| (key.clone(), raw)))
            .collect();
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_is_present() {
        assert!(RawValue::Number(0.0).is_present());
        assert!(RawValue::Text("0".to_string()).is_present());
    }

    #[test]
    fn test_empty_and_false_are_absent() {
        assert!(!RawValue::Text(String::new()).is_present());
        assert!(!RawValue::Other("false".to_string()).is_present());
        assert!(!RawValue::Number(f64::NAN).is_present());
        assert!(RawValue::Other("true".to_string()).is_present());
    }

    #[test]
    fn test_from_json_members() {
        assert_eq!(RawValue::from_json(&json!(null)), None);
        assert_eq!(
            RawValue::from_json(&json!(12.5)),
            Some(RawValue::Number(12.5))
        );
        assert_eq!(
            RawValue::from_json(&json!("12.5")),
            Some(RawValue::Text("12.5".to_string()))
        );
        assert_eq!(
            RawValue::from_json(&json!([1, 2])),
            Some(RawValue::Other("[1,2]".to_string()))
        );
    }

    #[test]
    fn test_field_object_drops_null_members() {
        let value = json!({"lon": null, "lng": 4, "lat": "5"});
        let fields = FieldObject::from_json(value.as_object().unwrap());

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("lon"), None);
        assert_eq!(fields.get("lng"), Some(&RawValue::Number(4.0)));
    }

    #[test]
    fn test_builder_replaces_existing_key() {
        let fields = FieldObject::new().with("lat", 1.0).with("lat", 2.0);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("lat"), Some(&RawValue::Number(2.0)));
    }
}
