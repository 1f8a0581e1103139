// bookstore_orders/src/item/payload.rs

//! Request bodies sent to the order service when editing a draft.

use super::condition::Condition;
use super::id::BookId;
use serde::Serialize;

/// A book to add to a draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDraftItem {
  pub book_id: BookId,
  pub quantity: u32,
  pub condition_type: Condition,
}

impl NewDraftItem {
  pub fn new(book_id: impl Into<BookId>, quantity: u32, condition_type: Condition) -> Self {
    Self {
      book_id: book_id.into(),
      quantity,
      condition_type,
    }
  }
}

/// Partial update of one line. Unset fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub quantity: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub condition_type: Option<Condition>,
}

impl ItemPatch {
  pub fn quantity(quantity: u32) -> Self {
    Self {
      quantity: Some(quantity),
      ..Self::default()
    }
  }

  pub fn condition(condition: Condition) -> Self {
    Self {
      condition_type: Some(condition),
      ..Self::default()
    }
  }

  pub fn is_empty(&self) -> bool {
    self.quantity.is_none() && self.condition_type.is_none()
  }
}
