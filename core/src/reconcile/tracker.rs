// bookstore_orders/src/reconcile/tracker.rs

//! Per-draft memory of the item order last shown to the user.

use super::merge::reconcile;
use crate::draft::{Draft, DraftId};
use crate::item::ItemId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{event, Level};

/// Identifies one opening of a draft view. A response captured under an
/// older generation is stale once the view is closed or opened again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug)]
struct TrackedOrder {
  generation: Generation,
  order: Vec<ItemId>,
  /// Set while a view of the draft is open. Closed entries only live as
  /// long as the draft keeps showing up in listings.
  open: bool,
}

/// Keyed map `DraftId -> ordered item ids`.
///
/// Each draft is reconciled against its own remembered order only, so several
/// drafts can be open at once without disturbing each other. The map is
/// process-local and never persisted.
///
/// Entries are released by [`OrderTracker::forget`] when a view closes, and by
/// [`OrderTracker::release_unlisted`] for drafts that were only seen in a
/// listing and have dropped out of it.
#[derive(Debug)]
pub struct OrderTracker {
  orders: RwLock<HashMap<DraftId, TrackedOrder>>,
  next_generation: AtomicU64,
}

impl OrderTracker {
  pub fn new() -> Self {
    Self {
      orders: RwLock::new(HashMap::new()),
      next_generation: AtomicU64::new(1),
    }
  }

  fn fresh_generation(&self) -> Generation {
    Generation(self.next_generation.fetch_add(1, Ordering::Relaxed))
  }

  /// Starts tracking `draft_id` if it is not tracked yet and returns the
  /// generation of the current opening. An already tracked draft keeps both
  /// its order and its generation.
  pub fn track(&self, draft_id: &DraftId) -> Generation {
    if let Some(tracked) = self.orders.read().get(draft_id) {
      return tracked.generation;
    }
    self.entry(draft_id, false)
  }

  /// Like [`OrderTracker::track`], and marks the draft as shown in an open
  /// view so listings never release it. Only `forget` does.
  pub fn open(&self, draft_id: &DraftId) -> Generation {
    self.entry(draft_id, true)
  }

  fn entry(&self, draft_id: &DraftId, open: bool) -> Generation {
    let mut orders = self.orders.write();
    let tracked = orders.entry(draft_id.clone()).or_insert_with(|| {
      event!(Level::DEBUG, %draft_id, "Tracking draft item order.");
      TrackedOrder {
        generation: self.fresh_generation(),
        order: Vec::new(),
        open: false,
      }
    });
    tracked.open |= open;
    tracked.generation
  }

  /// Generation of the current opening, if the draft is tracked.
  pub fn generation(&self, draft_id: &DraftId) -> Option<Generation> {
    self.orders.read().get(draft_id).map(|tracked| tracked.generation)
  }

  /// Stops tracking `draft_id`. Responses captured under its generation
  /// will no longer be applied.
  pub fn forget(&self, draft_id: &DraftId) -> bool {
    let removed = self.orders.write().remove(draft_id).is_some();
    if removed {
      event!(Level::DEBUG, %draft_id, "Forgot draft item order.");
    }
    removed
  }

  /// Drops drafts that are neither open nor in `listed`. Returns how many
  /// entries were released.
  pub fn release_unlisted(&self, listed: &[DraftId]) -> usize {
    let mut orders = self.orders.write();
    let before = orders.len();
    orders.retain(|draft_id, tracked| tracked.open || listed.contains(draft_id));
    let released = before - orders.len();
    if released > 0 {
      event!(Level::DEBUG, released, "Released draft orders no longer listed.");
    }
    released
  }

  /// Remembered order for `draft_id`, if any.
  pub fn order_of(&self, draft_id: &DraftId) -> Option<Vec<ItemId>> {
    self.orders.read().get(draft_id).map(|tracked| tracked.order.clone())
  }

  pub fn tracked_drafts(&self) -> usize {
    self.orders.read().len()
  }

  /// Reconciles `fresh` against the remembered order for its id, starting
  /// to track the draft if needed, and remembers the resulting order.
  pub fn reconcile(&self, fresh: Draft) -> Draft {
    let mut orders = self.orders.write();
    let tracked = orders.entry(fresh.id.clone()).or_insert_with(|| TrackedOrder {
      generation: self.fresh_generation(),
      order: Vec::new(),
      open: false,
    });
    let merged = reconcile(&tracked.order, fresh);
    tracked.order = merged.item_ids();
    merged
  }

  /// Like [`OrderTracker::reconcile`], but only while the draft is still
  /// tracked under `generation`. Returns `None` for a stale response and
  /// leaves the remembered order untouched.
  pub fn reconcile_if_current(&self, generation: Generation, fresh: Draft) -> Option<Draft> {
    let mut orders = self.orders.write();
    match orders.get_mut(&fresh.id) {
      Some(tracked) if tracked.generation == generation => {
        let merged = reconcile(&tracked.order, fresh);
        tracked.order = merged.item_ids();
        Some(merged)
      }
      _ => {
        event!(Level::DEBUG, draft_id = %fresh.id, ?generation, "Discarding stale draft response.");
        None
      }
    }
  }
}

impl Default for OrderTracker {
  fn default() -> Self {
    Self::new()
  }
}
