// bookstore_orders/src/pricing/total.rs

use super::resolve::resolve_subtotal;
use crate::item::OrderItem;

/// Order total as the sum of resolved line subtotals. Empty orders total 0.
///
/// Always equal to adding up the subtotals shown on each line.
pub fn compute_order_total(items: &[OrderItem]) -> f64 {
  items.iter().map(resolve_subtotal).fold(0.0, |acc, subtotal| acc + subtotal)
}
