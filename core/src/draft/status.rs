// bookstore_orders/src/draft/status.rs

//! Draft lifecycle states and the actions that can be taken on them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle of a customer order. Transitions only move forward:
/// `Draft -> Submitted -> Approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DraftStatus {
  Draft,
  Submitted,
  Approved,
}

impl DraftStatus {
  /// Case-insensitive parse of the service's status strings.
  pub fn parse(raw: &str) -> Option<Self> {
    match raw.trim().to_ascii_uppercase().as_str() {
      "DRAFT" => Some(DraftStatus::Draft),
      "SUBMITTED" => Some(DraftStatus::Submitted),
      "APPROVED" => Some(DraftStatus::Approved),
      _ => None,
    }
  }

  /// Status of records that carry none: finalized customer orders.
  pub fn finalized() -> Self {
    DraftStatus::Approved
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DraftStatus::Draft => "DRAFT",
      DraftStatus::Submitted => "SUBMITTED",
      DraftStatus::Approved => "APPROVED",
    }
  }

  /// Lowercase wording for user-facing messages.
  pub fn label(&self) -> &'static str {
    match self {
      DraftStatus::Draft => "a draft",
      DraftStatus::Submitted => "submitted",
      DraftStatus::Approved => "approved",
    }
  }

  /// Status after `action` succeeds. Item edits leave the status alone.
  pub fn after(&self, action: DraftAction) -> Self {
    match (self, action) {
      (DraftStatus::Draft, DraftAction::Submit) => DraftStatus::Submitted,
      (DraftStatus::Submitted, DraftAction::Approve) => DraftStatus::Approved,
      (status, _) => *status,
    }
  }
}

impl fmt::Display for DraftStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for DraftStatus {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    match Option::<String>::deserialize(deserializer)? {
      None => Ok(DraftStatus::finalized()),
      Some(raw) => DraftStatus::parse(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown draft status '{}'", raw))),
    }
  }
}

/// Something a user can ask the order service to do with a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftAction {
  AddItems,
  EditItem,
  RemoveItem,
  Submit,
  Delete,
  Approve,
}

impl DraftAction {
  pub fn as_str(&self) -> &'static str {
    match self {
      DraftAction::AddItems => "add_items",
      DraftAction::EditItem => "edit_item",
      DraftAction::RemoveItem => "remove_item",
      DraftAction::Submit => "submit",
      DraftAction::Delete => "delete",
      DraftAction::Approve => "approve",
    }
  }

  pub fn verb(&self) -> &'static str {
    match self {
      DraftAction::AddItems => "add books to",
      DraftAction::EditItem => "edit",
      DraftAction::RemoveItem => "remove books from",
      DraftAction::Submit => "submit",
      DraftAction::Delete => "delete",
      DraftAction::Approve => "approve",
    }
  }

  pub fn is_admin_only(&self) -> bool {
    matches!(self, DraftAction::Approve)
  }
}

impl fmt::Display for DraftAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
