//! Numeric coercion and range validation of raw coordinate values.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Axis, LonLatError};
use crate::input::RawValue;

/// Longitude aliases, in lookup priority.
pub const LONGITUDE_KEYS: [&str; 3] = ["lon", "lng", "longitude"];

/// Latitude aliases, in lookup priority.
pub const LATITUDE_KEYS: [&str; 2] = ["lat", "latitude"];

/// Leading-number pattern.
///
/// Matches an optional sign followed by `Infinity` or a decimal literal
/// with optional fraction and exponent, after leading whitespace. Trailing
/// text is ignored, so `"12.5deg"` reads as `12.5`.
fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?)(Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("leading number pattern is valid")
    })
}

/// Parse the leading number of `text`, or `None` if it has none.
pub fn parse_float(text: &str) -> Option<f64> {
    let captures = leading_number().captures(text)?;
    let negative = &captures[1] == "-";
    let magnitude = match &captures[2] {
        "Infinity" => f64::INFINITY,
        digits => digits.parse::<f64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a raw value to a float. `NaN` counts as no value.
pub fn coerce(value: &RawValue) -> Option<f64> {
    let parsed = match value {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) => parse_float(s),
        RawValue::Other(_) => None,
    };
    parsed.filter(|n| !n.is_nan())
}

/// Outcome of probing a candidate list for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    /// First candidate that coerced to a number.
    pub value: Option<f64>,
    /// Raw form reported if validation fails.
    pub raw: Option<&'a RawValue>,
}

/// Return the first candidate that coerces to a number.
///
/// Unparseable candidates are skipped rather than rejected, so
/// `{"lon": "", "lng": 12}` resolves to `12`. Zero stops the search like
/// any other number.
pub fn resolve<'a, I>(candidates: I) -> Resolved<'a>
where
    I: IntoIterator<Item = Option<&'a RawValue>>,
{
    let mut first_present = None;
    for raw in candidates.into_iter().flatten() {
        if let Some(value) = coerce(raw) {
            return Resolved {
                value: Some(value),
                raw: Some(raw),
            };
        }
        if first_present.is_none() && raw.is_present() {
            first_present = Some(raw);
        }
    }
    Resolved {
        value: None,
        raw: first_present,
    }
}

/// Check a resolved value against the range of `axis`.
///
/// Zero is accepted on both axes; only a missing value, `NaN` or a value
/// beyond the axis limit is rejected.
pub fn validate(axis: Axis, resolved: Resolved<'_>) -> Result<f64, LonLatError> {
    match resolved.value {
        Some(value) if value.abs() <= axis.limit() => Ok(value),
        _ => {
            let raw = resolved
                .raw
                .map_or_else(|| "missing".to_string(), ToString::to_string);
            Err(LonLatError::invalid(axis, raw))
        }
    }
}

/// Resolve and validate one axis from its candidates.
pub fn floatize<'a, I>(axis: Axis, candidates: I) -> Result<f64, LonLatError>
where
    I: IntoIterator<Item = Option<&'a RawValue>>,
{
    validate(axis, resolve(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_float_plain_numbers() {
        assert_eq!(parse_float("12"), Some(12.0));
        assert_eq!(parse_float("-12.5"), Some(-12.5));
        assert_eq!(parse_float("+0.25"), Some(0.25));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("0"), Some(0.0));
    }

    #[test]
    fn test_parse_float_leading_prefix() {
        assert_eq!(parse_float("  70.01232"), Some(70.01232));
        assert_eq!(parse_float("38.13234 "), Some(38.13234));
        assert_eq!(parse_float("12.5deg"), Some(12.5));
        assert_eq!(parse_float("5e"), Some(5.0));
        assert_eq!(parse_float("2,3"), Some(2.0));
    }

    #[test]
    fn test_parse_float_stops_at_non_ascii_digits() {
        assert_eq!(parse_float("12\u{663}"), Some(12.0));
        assert_eq!(parse_float("\u{663}12"), None);
        assert_eq!(parse_float("1.5\u{664}e2"), Some(1.5));
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_float_rejects_non_numbers() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("N12"), None);
    }

    #[test]
    fn test_coerce_skips_nan_and_other() {
        assert_eq!(coerce(&RawValue::Number(f64::NAN)), None);
        assert_eq!(coerce(&RawValue::Other("true".into())), None);
        assert_eq!(coerce(&text("7")), Some(7.0));
    }

    #[test]
    fn test_resolve_takes_first_parseable() {
        let lon = text("abc");
        let lng = RawValue::Number(12.0);
        let longitude = RawValue::Number(99.0);

        let resolved = resolve([Some(&lon), Some(&lng), Some(&longitude)]);
        assert_eq!(resolved.value, Some(12.0));
        assert_eq!(resolved.raw, Some(&lng));
    }

    #[test]
    fn test_resolve_stops_at_zero() {
        let zero = RawValue::Number(0.0);
        let other = RawValue::Number(5.0);

        let resolved = resolve([Some(&zero), Some(&other)]);
        assert_eq!(resolved.value, Some(0.0));
    }

    #[test]
    fn test_resolve_reports_first_present_when_nothing_parses() {
        let empty = text("");
        let junk = text("north");

        let resolved = resolve([None, Some(&empty), Some(&junk)]);
        assert_eq!(resolved.value, None);
        assert_eq!(resolved.raw, Some(&junk));
    }

    #[test]
    fn test_validate_accepts_zero_and_bounds() {
        let zero = RawValue::Number(0.0);
        assert_eq!(floatize(Axis::Longitude, [Some(&zero)]), Ok(0.0));
        assert_eq!(floatize(Axis::Latitude, [Some(&zero)]), Ok(0.0));

        let edge = RawValue::Number(-180.0);
        assert_eq!(floatize(Axis::Longitude, [Some(&edge)]), Ok(-180.0));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let value = text("999");
        let err = floatize(Axis::Latitude, [Some(&value)]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid latitude value: 999");
    }

    #[test]
    fn test_validate_rejects_infinity() {
        let value = text("Infinity");
        assert!(floatize(Axis::Longitude, [Some(&value)]).is_err());
    }

    #[test]
    fn test_validate_reports_missing() {
        let err = floatize(Axis::Longitude, [None, None]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid longitude value: missing");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_parse_float_reads_formatted_numbers(value in -1.0e6..1.0e6_f64) {
                let parsed = parse_float(&value.to_string());
                prop_assert_eq!(parsed, Some(value));
            }

            #[test]
            fn test_parse_float_ignores_suffix(
                value in -180.0..180.0_f64,
                suffix in "[a-zA-Z ,;]{0,8}"
            ) {
                let parsed = parse_float(&format!("{}{}", value, suffix));
                prop_assert_eq!(parsed, Some(value));
            }

            #[test]
            fn test_longitude_range_enforced(value in -1000.0..1000.0_f64) {
                let raw = RawValue::Number(value);
                let result = floatize(Axis::Longitude, [Some(&raw)]);
                prop_assert_eq!(result.is_ok(), value.abs() <= 180.0);
            }

            #[test]
            fn test_latitude_range_enforced(value in -1000.0..1000.0_f64) {
                let raw = RawValue::Number(value);
                let result = floatize(Axis::Latitude, [Some(&raw)]);
                prop_assert_eq!(result.is_ok(), value.abs() <= 90.0);
            }
        }
    }
}
