//! JSON:API envelope types and lenient number decoding.
//!
//! The explorer wraps every entity in a `{type, attributes}` object and
//! serializes large integers as strings, so numeric fields accept both forms.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

// ============================================================================
// Envelope Types
// ============================================================================

/// The `{type, attributes}` envelope for a single resolved entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wrapper<T> {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub attributes: T,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total: u64,
}

/// Top-level response document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<Meta>,
}

// ============================================================================
// Lenient Number Decoding
// ============================================================================

/// Reads an unsigned integer from a JSON number, a decimal string or a
/// `0x`-prefixed hex string. `null` decodes as zero.
///
/// Float numbers are accepted only when whole and within `u64`; they are
/// never truncated or saturated.
pub fn u64_from_value(value: &Value) -> Result<u64, String> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                // `u64::MAX as f64` rounds up to 2^64, hence the strict bound.
                n.as_f64()
                    .filter(|f| *f >= 0.0 && *f < u64::MAX as f64 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .ok_or_else(|| format!("expected unsigned integer, got {n}")),
        Value::String(s) => {
            let s = s.trim();
            if let Some(hex) = s.strip_prefix("0x") {
                u64::from_str_radix(hex, 16).map_err(|e| format!("invalid hex '{s}': {e}"))
            } else {
                s.parse::<u64>()
                    .map_err(|e| format!("invalid integer '{s}': {e}"))
            }
        }
        other => Err(format!("expected integer, got {other}")),
    }
}

/// Reads a float from a JSON number or a decimal string.
pub fn f64_from_value(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("expected number, got {n}")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{s}': {e}")),
        other => Err(format!("expected number, got {other}")),
    }
}

pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    u64_from_value(&value).map_err(de::Error::custom)
}

pub fn option_u64_lenient<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => u64_from_value(&v).map(Some).map_err(de::Error::custom),
    }
}

pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    f64_from_value(&value).map_err(de::Error::custom)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::number(json!(42), 42)]
    #[case::decimal_string(json!("100000000000"), 100_000_000_000)]
    #[case::hex_string(json!("0x1f"), 31)]
    #[case::null(json!(null), 0)]
    #[case::whole_float(json!(2.0), 2)]
    fn test_u64_from_value(#[case] value: Value, #[case] expected: u64) {
        assert_eq!(u64_from_value(&value).unwrap(), expected);
    }

    #[rstest]
    #[case::fraction(json!(1.9))]
    #[case::negative_fraction(json!(-0.5))]
    #[case::beyond_u64(json!(1e30))]
    fn test_u64_from_value_rejects_non_integers(#[case] value: Value) {
        assert!(u64_from_value(&value).is_err(), "{value} decoded");
    }

    #[test]
    fn test_u64_from_value_rejects_garbage() {
        assert!(u64_from_value(&json!("abc")).is_err());
        assert!(u64_from_value(&json!(-1)).is_err());
        assert!(u64_from_value(&json!([1])).is_err());
    }

    #[test]
    fn test_f64_from_value_accepts_strings_and_numbers() {
        assert_eq!(f64_from_value(&json!("0.001")).unwrap(), 0.001);
        assert_eq!(f64_from_value(&json!(2.5)).unwrap(), 2.5);
        assert!(f64_from_value(&json!("fast")).is_err());
        assert!(f64_from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_document_with_meta() {
        let doc: Document<Vec<Wrapper<Value>>> = serde_json::from_value(json!({
            "data": [{"id": "1", "type": "ckb_transactions", "attributes": {}}],
            "meta": {"total": "25"}
        }))
        .unwrap();
        assert_eq!(doc.data.len(), 1);
        assert_eq!(doc.data[0].kind, "ckb_transactions");
        assert_eq!(doc.meta, Some(Meta { total: 25 }));
    }
}
