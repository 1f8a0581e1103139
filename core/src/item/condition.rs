// bookstore_orders/src/item/condition.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical condition of a book on an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
  #[default]
  New,
  Used,
}

impl Condition {
  /// Case-insensitive. Anything other than `used` reads as `New`.
  pub fn parse(raw: &str) -> Self {
    if raw.trim().eq_ignore_ascii_case("USED") {
      Condition::Used
    } else {
      Condition::New
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Condition::New => "NEW",
      Condition::Used => "USED",
    }
  }

  pub fn is_used(&self) -> bool {
    matches!(self, Condition::Used)
  }
}

impl fmt::Display for Condition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
