// bookstore_orders/src/item/record.rs

//! The normalized `OrderItem` and the raw wire shape it is decoded from.
//!
//! Line items reach the client from the draft endpoints, the order history
//! endpoints and the admin review queue, and each of them names fields a
//! little differently (`price` vs `bookPrice`, `conditionType` vs
//! `bookCondition`, ...). `RawOrderItem` accepts every known alias and
//! `OrderItem::from` resolves them once, so pricing only ever sees one shape.

use super::coerce::{committed_number, first_present, price_or_zero, quantity, text};
use super::condition::Condition;
use super::id::{BookId, ItemId};
use crate::error::OrderResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every field an item record may carry, in any of its aliases, undecoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderItem {
  #[serde(default)]
  pub id: Option<Value>,
  #[serde(default)]
  pub book_id: Option<Value>,
  #[serde(default)]
  pub book_title: Option<Value>,
  #[serde(default)]
  pub title: Option<Value>,
  #[serde(default)]
  pub book_author: Option<Value>,
  #[serde(default)]
  pub author: Option<Value>,
  #[serde(default)]
  pub price: Option<Value>,
  #[serde(default)]
  pub book_price: Option<Value>,
  #[serde(default)]
  pub condition_type: Option<Value>,
  #[serde(default)]
  pub condition: Option<Value>,
  #[serde(default)]
  pub book_condition: Option<Value>,
  #[serde(default)]
  pub quantity: Option<Value>,
  #[serde(default)]
  pub unit_price: Option<Value>,
  #[serde(default)]
  pub subtotal: Option<Value>,
}

/// One book line on a draft or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOrderItem", rename_all = "camelCase")]
pub struct OrderItem {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<ItemId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub book_id: Option<BookId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  /// Catalog list price, before any condition discount.
  #[serde(rename = "price")]
  pub base_price: f64,
  #[serde(rename = "conditionType")]
  pub condition: Condition,
  /// Quantity as the server or the editor last reported it. May be 0,
  /// negative or fractional while a line is being edited; pricing floors it to 1.
  pub quantity: f64,
  /// Unit price committed by the server. Authoritative when present.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub unit_price: Option<f64>,
  /// Line subtotal committed by the server. Authoritative when present.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subtotal: Option<f64>,
}

impl From<RawOrderItem> for OrderItem {
  fn from(raw: RawOrderItem) -> Self {
    let id = raw.id.as_ref().and_then(ItemId::from_value);
    let book_id = raw.book_id.as_ref().and_then(BookId::from_value);
    let title = text(first_present(&[raw.book_title.as_ref(), raw.title.as_ref()]));
    let author = text(first_present(&[raw.book_author.as_ref(), raw.author.as_ref()]));
    let base_price = price_or_zero(first_present(&[raw.price.as_ref(), raw.book_price.as_ref()]));
    let condition = match first_present(&[
      raw.condition_type.as_ref(),
      raw.condition.as_ref(),
      raw.book_condition.as_ref(),
    ]) {
      Some(Value::String(s)) => Condition::parse(s),
      _ => Condition::New,
    };

    OrderItem {
      id,
      book_id,
      title,
      author,
      base_price,
      condition,
      quantity: quantity(raw.quantity.as_ref()),
      unit_price: committed_number(raw.unit_price.as_ref()),
      subtotal: committed_number(raw.subtotal.as_ref()),
    }
  }
}

impl OrderItem {
  /// A NEW, quantity 1 line at `base_price` with nothing committed.
  pub fn new(base_price: f64) -> Self {
    Self {
      id: None,
      book_id: None,
      title: None,
      author: None,
      base_price,
      condition: Condition::New,
      quantity: 1.0,
      unit_price: None,
      subtotal: None,
    }
  }

  pub fn from_json(value: Value) -> OrderResult<Self> {
    Ok(serde_json::from_value(value)?)
  }

  pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn with_book(mut self, book_id: impl Into<BookId>, title: &str, author: &str) -> Self {
    self.book_id = Some(book_id.into());
    self.title = Some(title.to_string());
    self.author = Some(author.to_string());
    self
  }

  pub fn with_condition(mut self, condition: Condition) -> Self {
    self.condition = condition;
    self
  }

  pub fn with_quantity(mut self, quantity: f64) -> Self {
    self.quantity = quantity;
    self
  }

  pub fn with_unit_price(mut self, unit_price: f64) -> Self {
    self.unit_price = Some(unit_price);
    self
  }

  pub fn with_subtotal(mut self, subtotal: f64) -> Self {
    self.subtotal = Some(subtotal);
    self
  }

  /// Quantity used for pricing: never below 1.
  pub fn billable_quantity(&self) -> f64 {
    self.quantity.max(1.0)
  }
}
