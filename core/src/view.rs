// bookstore_orders/src/view.rs

//! Display-ready projections of a draft.
//!
//! The order builder, order history and both admin screens render lines from
//! `LineView`, so prices, placeholders and the struck-through original price
//! come out the same everywhere.

use crate::draft::{Draft, DraftAction, DraftId, DraftStatus};
use crate::item::{Condition, ItemId, OrderItem};
use crate::pricing::{compute_order_total, format_currency, is_discounted, resolve_display_base_price, resolve_subtotal, resolve_unit_price};
use serde::Serialize;

const PLACEHOLDER: &str = "-";

fn display_text(value: Option<&str>) -> String {
  match value.map(str::trim) {
    Some(text) if !text.is_empty() => text.to_string(),
    _ => PLACEHOLDER.to_string(),
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
  pub item_id: Option<ItemId>,
  pub title: String,
  pub author: String,
  pub condition: Condition,
  /// Quantity as stored; may be 0 while the line is being edited.
  pub quantity: f64,
  pub unit_price: f64,
  pub subtotal: f64,
  pub display_base_price: f64,
  pub discounted: bool,
  pub unit_price_text: String,
  pub subtotal_text: String,
  pub base_price_text: String,
}

impl LineView {
  pub fn from_item(item: &OrderItem) -> Self {
    let unit_price = resolve_unit_price(item);
    let subtotal = resolve_subtotal(item);
    let display_base_price = resolve_display_base_price(item);
    Self {
      item_id: item.id.clone(),
      title: display_text(item.title.as_deref()),
      author: display_text(item.author.as_deref()),
      condition: item.condition,
      quantity: item.quantity,
      unit_price,
      subtotal,
      display_base_price,
      discounted: is_discounted(item),
      unit_price_text: format_currency(unit_price),
      subtotal_text: format_currency(subtotal),
      base_price_text: format_currency(display_base_price),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
  pub id: DraftId,
  pub status: DraftStatus,
  pub school: String,
  pub class: String,
  pub lines: Vec<LineView>,
  pub total: f64,
  pub total_text: String,
  pub editable: bool,
  pub deletable: bool,
  pub submittable: bool,
}

impl DraftView {
  pub fn from_draft(draft: &Draft) -> Self {
    let lines: Vec<LineView> = draft.items.iter().map(LineView::from_item).collect();
    let total = compute_order_total(&draft.items);
    Self {
      id: draft.id.clone(),
      status: draft.status,
      school: display_text(draft.school_name.as_deref()),
      class: display_text(draft.class_name.as_deref()),
      lines,
      total,
      total_text: format_currency(total),
      editable: draft.status.permits(DraftAction::EditItem),
      deletable: draft.status.permits(DraftAction::Delete),
      submittable: draft.status.permits(DraftAction::Submit),
    }
  }
}
