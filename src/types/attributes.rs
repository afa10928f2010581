//! Dynamic attribute maps attached to graph nodes and edges.

use serde_json::Value;

/// Attribute name → JSON value, exactly as received from the analytics service.
pub type Attributes = serde_json::Map<String, Value>;

/// Numeric view of an attribute value.
///
/// Integers and floats map to `f64`. Strings, booleans, null, arrays and objects all map to 0.0.
pub fn numeric_or_zero(value: &Value) -> f64 {
  match value {
    Value::Number(n) => n.as_f64().unwrap_or(0.0),
    _ => 0.0,
  }
}

/// Reads an `[x, y, ..]` JSON array as a 2D point.
pub(crate) fn as_point(value: &Value) -> Option<(f64, f64)> {
  match value.as_array()?.as_slice() {
    [x, y, ..] => Some((x.as_f64()?, y.as_f64()?)),
    _ => None,
  }
}
