// bookstore_app/src/flows/mod.rs

//! Scripted screen flows driven against the mock order service.

pub mod admin_flow;
pub mod customer_flow;

use bookstore_orders::{Draft, DraftView};
use tracing::info;

/// Logs a draft the way the order screens lay it out.
pub fn render(draft: &Draft) {
  let view = DraftView::from_draft(draft);
  info!(draft_id = %view.id, status = %view.status, school = %view.school, class = %view.class, "Order");
  for line in &view.lines {
    if line.discounted {
      info!(
        "  {} by {} [{}] x{}  {} (was {})  = {}",
        line.title, line.author, line.condition, line.quantity, line.unit_price_text, line.base_price_text, line.subtotal_text
      );
    } else {
      info!(
        "  {} by {} [{}] x{}  {}  = {}",
        line.title, line.author, line.condition, line.quantity, line.unit_price_text, line.subtotal_text
      );
    }
  }
  info!(total = %view.total_text, editable = view.editable, "  Total");
}
