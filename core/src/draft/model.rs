// bookstore_orders/src/draft/model.rs

use super::status::DraftStatus;
use crate::error::OrderResult;
use crate::item::coerce::text;
use crate::item::{DraftId, ItemId, OrderItem};
use crate::pricing::compute_order_total;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `null` reads as an empty item list.
fn items_or_empty<'de, D>(deserializer: D) -> Result<Vec<OrderItem>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<OrderItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Display names: numbers are rendered, anything else unreadable is dropped.
fn display_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(text(value.as_ref()))
}

/// A customer order as returned by the order service.
///
/// The client only ever holds a transient copy; the service owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
  pub id: DraftId,
  #[serde(default = "DraftStatus::finalized")]
  pub status: DraftStatus,
  #[serde(default, deserialize_with = "items_or_empty")]
  pub items: Vec<OrderItem>,
  #[serde(default, deserialize_with = "display_name", skip_serializing_if = "Option::is_none")]
  pub customer_name: Option<String>,
  #[serde(default, deserialize_with = "display_name", skip_serializing_if = "Option::is_none")]
  pub school_name: Option<String>,
  #[serde(default, deserialize_with = "display_name", skip_serializing_if = "Option::is_none")]
  pub class_name: Option<String>,
}

impl Draft {
  pub fn new(id: impl Into<DraftId>, status: DraftStatus, items: Vec<OrderItem>) -> Self {
    Self {
      id: id.into(),
      status,
      items,
      customer_name: None,
      school_name: None,
      class_name: None,
    }
  }

  pub fn from_json(value: Value) -> OrderResult<Self> {
    Ok(serde_json::from_value(value)?)
  }

  pub fn total(&self) -> f64 {
    compute_order_total(&self.items)
  }

  pub fn item(&self, id: &ItemId) -> Option<&OrderItem> {
    self.items.iter().find(|item| item.id.as_ref() == Some(id))
  }

  /// Ids of the items in display order. Items without an id are skipped.
  pub fn item_ids(&self) -> Vec<ItemId> {
    self.items.iter().filter_map(|item| item.id.clone()).collect()
  }
}
