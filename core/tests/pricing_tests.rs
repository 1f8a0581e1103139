// tests/pricing_tests.rs
mod common;

use bookstore_orders::{
  compute_order_total, format_currency, resolve_display_base_price, resolve_subtotal, resolve_unit_price, Condition,
  Draft, DraftView, OrderItem,
};
use common::*;
use serde_json::json;

#[test]
fn test_committed_unit_price_wins_over_condition_and_base() {
  setup_tracing();
  for condition in [Condition::New, Condition::Used] {
    for base in [0.0, 19.99, 100.0] {
      let item = OrderItem::new(base).with_condition(condition).with_unit_price(13.37);
      assert_eq!(resolve_unit_price(&item), 13.37);
    }
  }
}

#[test]
fn test_used_default_is_half_of_base() {
  let item = OrderItem::from_json(json!({"price": 100, "conditionType": "USED"})).unwrap();
  assert_eq!(resolve_unit_price(&item), 50.0);
}

#[test]
fn test_new_or_missing_condition_is_full_price() {
  let explicit = OrderItem::from_json(json!({"price": 75, "conditionType": "NEW"})).unwrap();
  let absent = OrderItem::from_json(json!({"price": 75})).unwrap();
  assert_eq!(resolve_unit_price(&explicit), 75.0);
  assert_eq!(resolve_unit_price(&absent), 75.0);
}

#[test]
fn test_quantity_is_floored_to_one() {
  for quantity in [json!(0), json!(-3), json!(null), json!("abc")] {
    let item = OrderItem::from_json(json!({"price": 8, "quantity": quantity})).unwrap();
    assert_eq!(resolve_subtotal(&item), 8.0, "quantity {:?}", item.quantity);
  }
}

#[test]
fn test_fractional_quantity_is_priced_as_is() {
  let item = OrderItem::from_json(json!({"price": 10, "quantity": 2.5})).unwrap();
  assert_eq!(resolve_subtotal(&item), 25.0);

  let item = OrderItem::from_json(json!({"price": 10, "quantity": "0.5"})).unwrap();
  assert_eq!(resolve_subtotal(&item), 10.0);
}

#[test]
fn test_boolean_committed_price_is_ignored() {
  let item = OrderItem::from_json(json!({"price": 40, "unitPrice": false, "subtotal": true})).unwrap();
  assert_eq!(resolve_unit_price(&item), 40.0);
  assert_eq!(resolve_subtotal(&item), 40.0);
}

#[test]
fn test_committed_subtotal_wins_over_quantity() {
  let item = OrderItem::from_json(json!({
    "price": 10, "unitPrice": 9, "subtotal": 17.5, "quantity": 2
  }))
  .unwrap();
  assert_eq!(resolve_subtotal(&item), 17.5);
}

#[test]
fn test_invalid_numbers_never_produce_nan() {
  let item = OrderItem::from_json(json!({
    "price": "twelve", "unitPrice": "n/a", "subtotal": {}, "quantity": "x"
  }))
  .unwrap();
  assert_eq!(resolve_unit_price(&item), 0.0);
  assert_eq!(resolve_subtotal(&item), 0.0);
  assert_eq!(format_currency(compute_order_total(&[item])), "$0.00");
}

#[test]
fn test_total_is_the_sum_of_resolved_subtotals() {
  let items = vec![
    line("1", 0.1, Condition::New, 3.0),
    line("2", 33.33, Condition::Used, 1.0),
    line("3", 7.0, Condition::New, 0.0).with_subtotal(6.3),
    line("4", 19.99, Condition::Used, 2.0).with_unit_price(9.99),
  ];
  let expected = items.iter().map(resolve_subtotal).fold(0.0, |acc, s| acc + s);
  assert_eq!(compute_order_total(&items), expected);
  assert_eq!(compute_order_total(&[]), 0.0);
}

#[test]
fn test_resolution_is_idempotent() {
  let item = line("1", 41.25, Condition::Used, 3.0);
  let snapshot = item.clone();
  assert_eq!(resolve_unit_price(&item), resolve_unit_price(&item));
  assert_eq!(resolve_subtotal(&item), resolve_subtotal(&item));
  assert_eq!(resolve_display_base_price(&item), resolve_display_base_price(&item));
  assert_eq!(item, snapshot);
}

#[test]
fn test_used_book_end_to_end() {
  let draft = Draft::from_json(json!({
    "id": 5,
    "status": "DRAFT",
    "items": [{"id": 1, "price": 40, "conditionType": "USED", "quantity": 3}]
  }))
  .unwrap();

  let item = &draft.items[0];
  assert_eq!(format_currency(resolve_unit_price(item)), "$20.00");
  assert_eq!(format_currency(resolve_subtotal(item)), "$60.00");
  assert_eq!(format_currency(draft.total()), "$60.00");

  let view = DraftView::from_draft(&draft);
  assert_eq!(view.total_text, "$60.00");
  assert_eq!(view.lines[0].base_price_text, "$40.00");
  assert!(view.lines[0].discounted);
}

#[test]
fn test_history_and_review_shapes_price_identically() {
  // The same line as sent by the draft endpoint and by the order history endpoint.
  let draft_shape = OrderItem::from_json(json!({
    "id": 9, "bookId": 3, "title": "Chemistry", "price": 30, "conditionType": "used", "quantity": 2
  }))
  .unwrap();
  let history_shape = OrderItem::from_json(json!({
    "id": "9", "bookId": "3", "bookTitle": "Chemistry", "bookPrice": "30.00", "bookCondition": "USED", "quantity": "2"
  }))
  .unwrap();
  assert_eq!(draft_shape, history_shape);
  assert_eq!(resolve_subtotal(&draft_shape), 30.0);
}
