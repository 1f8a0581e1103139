// bookstore_orders/src/pricing/resolve.rs

use crate::item::OrderItem;

/// Share of the list price charged for a USED copy.
pub const USED_PRICE_FACTOR: f64 = 0.5;

/// Price of a single copy on this line.
///
/// A unit price committed by the server is returned untouched, including any
/// rounding the server applied. Otherwise the list price is used, halved for
/// USED copies.
pub fn resolve_unit_price(item: &OrderItem) -> f64 {
  if let Some(committed) = item.unit_price {
    return committed;
  }
  if item.condition.is_used() {
    item.base_price * USED_PRICE_FACTOR
  } else {
    item.base_price
  }
}

/// Line subtotal: the committed subtotal if there is one, otherwise unit
/// price times quantity with the quantity floored to 1.
pub fn resolve_subtotal(item: &OrderItem) -> f64 {
  if let Some(committed) = item.subtotal {
    return committed;
  }
  resolve_unit_price(item) * item.billable_quantity()
}

/// The "original" price shown struck through next to a discounted USED line.
///
/// When the server committed the unit price, the list price on the record may
/// be stale, so the original is back-computed from what was actually charged.
pub fn resolve_display_base_price(item: &OrderItem) -> f64 {
  match (item.condition.is_used(), item.unit_price) {
    (true, Some(committed)) => committed / USED_PRICE_FACTOR,
    _ => item.base_price,
  }
}

/// Whether a struck-through original price should be rendered for this line.
pub fn is_discounted(item: &OrderItem) -> bool {
  item.condition.is_used() && resolve_display_base_price(item) != resolve_unit_price(item)
}
