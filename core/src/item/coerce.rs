// bookstore_orders/src/item/coerce.rs

//! Numeric and text coercion for loosely typed record fields.
//!
//! Records come from several endpoints that disagree on types (`"12.50"` vs
//! `12.5`, ids as numbers or strings). These helpers follow the usual
//! browser `Number()` rules and then clamp, so a NaN can never reach a total.

use serde_json::Value;

/// `Number(value)` semantics. Returns NaN for values with no numeric reading.
pub(crate) fn to_number(value: &Value) -> f64 {
  match value {
    Value::Null => 0.0,
    Value::Bool(b) => {
      if *b {
        1.0
      } else {
        0.0
      }
    }
    Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
    Value::String(s) => {
      let trimmed = s.trim();
      if trimmed.is_empty() {
        0.0
      } else {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
      }
    }
    Value::Array(_) | Value::Object(_) => f64::NAN,
  }
}

/// A price-like field: absent or unreadable values become 0.
pub(crate) fn price_or_zero(value: Option<&Value>) -> f64 {
  match value {
    Some(v) => {
      let n = to_number(v);
      if n.is_finite() {
        n
      } else {
        0.0
      }
    }
    None => 0.0,
  }
}

/// A server-committed number. Only a finite reading of a number or numeric
/// string counts as committed; blank strings and booleans count as absent.
pub(crate) fn committed_number(value: Option<&Value>) -> Option<f64> {
  let value = value?;
  match value {
    Value::Bool(_) => None,
    Value::String(s) if s.trim().is_empty() => None,
    _ => {
      let n = to_number(value);
      n.is_finite().then_some(n)
    }
  }
}

/// Raw quantity as entered, fractions included. Unreadable becomes 0.
pub(crate) fn quantity(value: Option<&Value>) -> f64 {
  let n = value.map(to_number).unwrap_or(0.0);
  if n.is_finite() {
    n
  } else {
    0.0
  }
}

/// Display text. Numbers are rendered, everything else non-string is dropped.
pub(crate) fn text(value: Option<&Value>) -> Option<String> {
  match value? {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

/// First alias that is present and not `null`, mirroring `a ?? b ?? c`.
pub(crate) fn first_present<'a>(candidates: &[Option<&'a Value>]) -> Option<&'a Value> {
  candidates
    .iter()
    .flatten()
    .copied()
    .find(|v| !v.is_null())
}
