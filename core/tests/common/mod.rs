// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use anyhow::anyhow;
use async_trait::async_trait;
use bookstore_orders::{
  BookId, BusyIndicator, Condition, CurrentUser, Draft, DraftId, DraftService, DraftStatus, ItemId, ItemPatch,
  NewDraftItem, OrderItem, StaticSession,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
  atomic::{AtomicU64, AtomicUsize, Ordering},
  Arc,
};
use tokio::sync::Notify;
use tracing::Level;

// --- How the mock hands items back ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerOrdering {
  /// Items in the order they were added.
  Insertion,
  /// Items newest first, so every refresh disagrees with the previous one.
  Reversed,
}

/// In-memory stand-in for the remote order service.
///
/// Records every call, enforces the same lifecycle rules as the real service,
/// and can be told to fail the next call or to hold a fetch until released.
pub struct MockDraftService {
  drafts: Mutex<Vec<Draft>>,
  catalog: HashMap<BookId, (String, String, f64)>,
  calls: Mutex<Vec<String>>,
  fail_next: Mutex<Option<String>>,
  fetch_gate: Mutex<Option<Arc<Notify>>>,
  next_item_id: AtomicU64,
  ordering: ServerOrdering,
  return_updated: bool,
}

impl MockDraftService {
  pub fn new(ordering: ServerOrdering) -> Self {
    let mut catalog = HashMap::new();
    catalog.insert(BookId::new("b-alg"), ("Algebra I".to_string(), "M. Noether".to_string(), 40.0));
    catalog.insert(BookId::new("b-bio"), ("Biology".to_string(), "C. Darwin".to_string(), 25.5));
    catalog.insert(BookId::new("b-lit"), ("Poetry".to_string(), "E. Dickinson".to_string(), 12.0));
    Self {
      drafts: Mutex::new(Vec::new()),
      catalog,
      calls: Mutex::new(Vec::new()),
      fail_next: Mutex::new(None),
      fetch_gate: Mutex::new(None),
      next_item_id: AtomicU64::new(100),
      ordering,
      return_updated: true,
    }
  }

  /// Mutations return nothing, forcing a follow-up fetch.
  pub fn without_updated_drafts(mut self) -> Self {
    self.return_updated = false;
    self
  }

  pub fn insert(&self, draft: Draft) {
    self.drafts.lock().push(draft);
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().clone()
  }

  pub fn call_count(&self) -> usize {
    self.calls.lock().len()
  }

  pub fn fail_next(&self, message: &str) {
    *self.fail_next.lock() = Some(message.to_string());
  }

  /// The next fetch waits until the returned `Notify` is signalled.
  pub fn hold_next_fetch(&self) -> Arc<Notify> {
    let gate = Arc::new(Notify::new());
    *self.fetch_gate.lock() = Some(gate.clone());
    gate
  }

  pub fn stored(&self, draft_id: &DraftId) -> Option<Draft> {
    self.drafts.lock().iter().find(|d| &d.id == draft_id).cloned()
  }

  fn record(&self, call: String) -> anyhow::Result<()> {
    self.calls.lock().push(call);
    match self.fail_next.lock().take() {
      Some(message) => Err(anyhow!(message)),
      None => Ok(()),
    }
  }

  fn present(&self, draft: &Draft) -> Draft {
    let mut out = draft.clone();
    if self.ordering == ServerOrdering::Reversed {
      out.items.reverse();
    }
    out
  }

  fn with_draft<T>(&self, draft_id: &DraftId, f: impl FnOnce(&mut Draft) -> anyhow::Result<T>) -> anyhow::Result<T> {
    let mut drafts = self.drafts.lock();
    let draft = drafts
      .iter_mut()
      .find(|d| &d.id == draft_id)
      .ok_or_else(|| anyhow!("draft {} not found", draft_id))?;
    f(draft)
  }

  fn reply(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>> {
    if !self.return_updated {
      return Ok(None);
    }
    self.with_draft(draft_id, |d| Ok(Some(self.present(d))))
  }

  fn ensure_open(draft: &Draft) -> anyhow::Result<()> {
    if draft.status == DraftStatus::Approved {
      return Err(anyhow!("draft {} is approved", draft.id));
    }
    Ok(())
  }
}

#[async_trait]
impl DraftService for MockDraftService {
  async fn fetch_draft(&self, draft_id: &DraftId) -> anyhow::Result<Draft> {
    self.record(format!("fetch_draft:{}", draft_id))?;
    let gate = self.fetch_gate.lock().take();
    if let Some(gate) = gate {
      gate.notified().await;
    }
    self.with_draft(draft_id, |d| Ok(self.present(d)))
  }

  async fn list_my_drafts(&self) -> anyhow::Result<Vec<Draft>> {
    self.record("list_my_drafts".to_string())?;
    Ok(self.drafts.lock().iter().map(|d| self.present(d)).collect())
  }

  async fn list_submitted(&self) -> anyhow::Result<Vec<Draft>> {
    self.record("list_submitted".to_string())?;
    Ok(
      self
        .drafts
        .lock()
        .iter()
        .filter(|d| d.status == DraftStatus::Submitted)
        .map(|d| self.present(d))
        .collect(),
    )
  }

  async fn add_items(&self, draft_id: &DraftId, items: &[NewDraftItem]) -> anyhow::Result<Option<Draft>> {
    self.record(format!("add_items:{}:{}", draft_id, items.len()))?;
    self.with_draft(draft_id, |draft| {
      Self::ensure_open(draft)?;
      for new_item in items {
        let (title, author, price) = self
          .catalog
          .get(&new_item.book_id)
          .cloned()
          .ok_or_else(|| anyhow!("book {} not in catalog", new_item.book_id))?;
        let id = self.next_item_id.fetch_add(1, Ordering::SeqCst);
        draft.items.push(
          OrderItem::new(price)
            .with_id(ItemId::from(id))
            .with_book(new_item.book_id.clone(), &title, &author)
            .with_condition(new_item.condition_type)
            .with_quantity(f64::from(new_item.quantity)),
        );
      }
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn update_item(&self, draft_id: &DraftId, item_id: &ItemId, patch: &ItemPatch) -> anyhow::Result<Option<Draft>> {
    self.record(format!("update_item:{}:{}", draft_id, item_id))?;
    self.with_draft(draft_id, |draft| {
      Self::ensure_open(draft)?;
      let item = draft
        .items
        .iter_mut()
        .find(|i| i.id.as_ref() == Some(item_id))
        .ok_or_else(|| anyhow!("item {} not found", item_id))?;
      if let Some(quantity) = patch.quantity {
        item.quantity = f64::from(quantity);
      }
      if let Some(condition) = patch.condition_type {
        item.condition = condition;
        // The service re-prices the line and commits the result.
        item.unit_price = None;
        item.subtotal = None;
      }
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn remove_item(&self, draft_id: &DraftId, item_id: &ItemId) -> anyhow::Result<Option<Draft>> {
    self.record(format!("remove_item:{}:{}", draft_id, item_id))?;
    self.with_draft(draft_id, |draft| {
      Self::ensure_open(draft)?;
      draft.items.retain(|i| i.id.as_ref() != Some(item_id));
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn submit(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>> {
    self.record(format!("submit:{}", draft_id))?;
    self.with_draft(draft_id, |draft| {
      if draft.status != DraftStatus::Draft {
        return Err(anyhow!("draft {} is not a draft", draft.id));
      }
      draft.status = DraftStatus::Submitted;
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn cancel(&self, draft_id: &DraftId) -> anyhow::Result<()> {
    self.record(format!("cancel:{}", draft_id))?;
    let mut drafts = self.drafts.lock();
    let before = drafts.len();
    drafts.retain(|d| &d.id != draft_id);
    if drafts.len() == before {
      return Err(anyhow!("draft {} not found", draft_id));
    }
    Ok(())
  }

  async fn approve(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>> {
    self.record(format!("approve:{}", draft_id))?;
    self.with_draft(draft_id, |draft| {
      if draft.status != DraftStatus::Submitted {
        return Err(anyhow!("draft {} is not submitted", draft.id));
      }
      draft.status = DraftStatus::Approved;
      Ok(())
    })?;
    self.reply(draft_id)
  }
}

// --- Busy indicator that counts begin/end pairs ---
#[derive(Default)]
pub struct CountingBusy {
  pub begun: AtomicUsize,
  pub ended: AtomicUsize,
}

impl BusyIndicator for CountingBusy {
  fn begin(&self, _operation: &'static str) {
    self.begun.fetch_add(1, Ordering::SeqCst);
  }

  fn end(&self, _operation: &'static str) {
    self.ended.fetch_add(1, Ordering::SeqCst);
  }
}

// --- Fixtures ---
pub fn customer() -> Arc<StaticSession> {
  Arc::new(StaticSession::signed_in(CurrentUser::customer("parent-1")))
}

pub fn admin() -> Arc<StaticSession> {
  Arc::new(StaticSession::signed_in(CurrentUser::admin("office-1")))
}

pub fn line(id: &str, price: f64, condition: Condition, quantity: f64) -> OrderItem {
  OrderItem::new(price)
    .with_id(id)
    .with_condition(condition)
    .with_quantity(quantity)
}

pub fn draft(id: &str, status: DraftStatus, item_ids: &[&str]) -> Draft {
  let items = item_ids
    .iter()
    .map(|item_id| line(item_id, 10.0, Condition::New, 1.0))
    .collect();
  Draft::new(id, status, items)
}

pub fn item_ids(draft: &Draft) -> Vec<String> {
  draft
    .items
    .iter()
    .map(|i| i.id.as_ref().map_or_else(|| "-".to_string(), |id| id.to_string()))
    .collect()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
