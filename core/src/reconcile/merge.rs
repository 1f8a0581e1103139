// bookstore_orders/src/reconcile/merge.rs

//! Order-stable merge of a freshly fetched draft into the sequence the user
//! was last shown.

use crate::draft::Draft;
use crate::item::{ItemId, OrderItem};
use std::collections::{HashMap, HashSet};
use tracing::{event, Level};

/// Reorders `fresh.items` so lines the user already saw keep their relative
/// positions.
///
/// - Ids from `previous` that still exist come first, in `previous` order.
/// - Items not in `previous` follow, in the order the service returned them.
/// - Ids from `previous` that no longer exist are dropped.
///
/// If the service returns an id twice, only its first occurrence is kept.
/// Items without an id cannot be tracked and are always placed with the new
/// items.
pub fn reconcile(previous: &[ItemId], fresh: Draft) -> Draft {
  let Draft {
    id,
    status,
    items,
    customer_name,
    school_name,
    class_name,
  } = fresh;

  let fresh_count = items.len();
  let mut by_id: HashMap<ItemId, OrderItem> = HashMap::with_capacity(fresh_count);
  // Server order of every item, with `None` marking the slot of an id-keyed entry.
  let mut arrival: Vec<Option<OrderItem>> = Vec::with_capacity(fresh_count);
  let mut arrival_ids: Vec<Option<ItemId>> = Vec::with_capacity(fresh_count);

  for item in items {
    match item.id.clone() {
      Some(item_id) => {
        if by_id.contains_key(&item_id) {
          event!(Level::DEBUG, item_id = %item_id, "Dropping duplicate item id in fresh draft.");
          continue;
        }
        by_id.insert(item_id.clone(), item);
        arrival.push(None);
        arrival_ids.push(Some(item_id));
      }
      None => {
        arrival.push(Some(item));
        arrival_ids.push(None);
      }
    }
  }

  let remembered: HashSet<&ItemId> = previous.iter().collect();
  let mut merged = Vec::with_capacity(fresh_count);

  let mut seen: HashSet<&ItemId> = HashSet::with_capacity(previous.len());
  for item_id in previous {
    if !seen.insert(item_id) {
      continue;
    }
    if let Some(item) = by_id.remove(item_id) {
      merged.push(item);
    }
  }
  let kept = merged.len();

  for (slot, slot_id) in arrival.into_iter().zip(arrival_ids) {
    match (slot, slot_id) {
      (Some(untracked), _) => merged.push(untracked),
      (None, Some(item_id)) if !remembered.contains(&item_id) => {
        if let Some(item) = by_id.remove(&item_id) {
          merged.push(item);
        }
      }
      _ => {}
    }
  }

  event!(
    Level::TRACE,
    draft_id = %id,
    kept,
    appended = merged.len() - kept,
    dropped = previous.len().saturating_sub(kept),
    "Reconciled draft items."
  );

  Draft {
    id,
    status,
    items: merged,
    customer_name,
    school_name,
    class_name,
  }
}
