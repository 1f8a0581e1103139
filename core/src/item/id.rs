// bookstore_orders/src/item/id.rs

//! Identifier newtypes for records owned by the order service.
//!
//! The service hands out ids as JSON numbers on some endpoints and as strings
//! on others, so all of them are normalized to their decimal text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Normalizes a JSON id value to text. `3`, `3.0` and `"3"` all become `"3"`.
pub(crate) fn id_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => {
      let trimmed = s.trim();
      if trimmed.is_empty() {
        None
      } else {
        Some(trimmed.to_string())
      }
    }
    Value::Number(n) => {
      if let Some(i) = n.as_i64() {
        Some(i.to_string())
      } else if let Some(u) = n.as_u64() {
        Some(u.to_string())
      } else {
        let f = n.as_f64()?;
        if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
          Some(format!("{}", f as i64))
        } else {
          Some(f.to_string())
        }
      }
    }
    _ => None,
  }
}

macro_rules! record_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      pub fn new(id: impl Into<String>) -> Self {
        $name(id.into())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }

      pub(crate) fn from_value(value: &Value) -> Option<Self> {
        id_text(value).map($name)
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self {
        $name(s.to_string())
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        $name(s)
      }
    }

    impl From<u64> for $name {
      fn from(n: u64) -> Self {
        $name(n.to_string())
      }
    }

    impl<'de> Deserialize<'de> for $name {
      fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
      where
        D: Deserializer<'de>,
      {
        let value = Value::deserialize(deserializer)?;
        $name::from_value(&value).ok_or_else(|| {
          serde::de::Error::custom(format!("{} must be a number or a non-empty string, got {}", stringify!($name), value))
        })
      }
    }
  };
}

record_id!(
  /// Server-assigned id of one line item. Used as the reconciliation merge key.
  ItemId
);
record_id!(
  /// Catalog id of a book.
  BookId
);
record_id!(
  /// Server-assigned id of a draft or finalized order.
  DraftId
);
