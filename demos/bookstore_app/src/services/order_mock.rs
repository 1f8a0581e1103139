// bookstore_app/src/services/order_mock.rs

//! In-memory order service that stores raw JSON records the way the real
//! endpoints return them: mixed field names, prices as strings, and items
//! sorted by title rather than by when they were added.

use super::catalog::CatalogBook;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use bookstore_orders::{
  BookId, Condition, Draft, DraftId, DraftService, DraftStatus, ItemId, ItemPatch, NewDraftItem,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{info, warn};

pub struct MockOrderService {
  records: Mutex<Vec<Value>>,
  catalog: Vec<CatalogBook>,
  next_id: AtomicU64,
  latency: Duration,
}

impl MockOrderService {
  pub fn new(catalog: Vec<CatalogBook>, latency_ms: u64) -> Self {
    Self {
      records: Mutex::new(Vec::new()),
      catalog,
      next_id: AtomicU64::new(500),
      latency: Duration::from_millis(latency_ms),
    }
  }

  /// Sample data: one open draft and one finalized order from the history endpoint.
  pub fn seed(&self) {
    let mut records = self.records.lock();
    records.push(json!({
      "id": 1,
      "status": "draft",
      "customerName": "R. Alvarez",
      "schoolName": "Northside Middle",
      "className": "7B",
      "items": [
        {"id": 101, "bookId": 12, "title": "World History", "author": "H. Zinn", "price": "35.50", "conditionType": "NEW", "quantity": 1},
        {"id": 102, "bookId": 11, "bookTitle": "Algebra I", "bookAuthor": "M. Noether", "bookPrice": 42, "bookCondition": "used", "quantity": 2}
      ]
    }));
    // Finalized orders carry no status and committed prices.
    records.push(json!({
      "id": "2",
      "schoolName": "Northside Middle",
      "items": [
        {"id": 201, "bookTitle": "Biology", "bookPrice": 30.00, "condition": "USED", "unitPrice": 14.37, "subtotal": 14.37, "quantity": 1}
      ]
    }));
    info!(count = records.len(), "Seeded mock order service.");
  }

  async fn network(&self) {
    tokio::time::sleep(self.latency).await;
  }

  fn next_id(&self) -> u64 {
    self.next_id.fetch_add(1, Ordering::SeqCst)
  }

  /// Decodes a stored record the way a client would receive it.
  fn present(record: &Value) -> anyhow::Result<Draft> {
    let mut record = record.clone();
    if let Some(items) = record.get_mut("items").and_then(Value::as_array_mut) {
      items.sort_by(|a, b| title_of(a).cmp(&title_of(b)));
    }
    Draft::from_json(record).context("stored draft record is malformed")
  }

  fn with_record<T>(&self, draft_id: &DraftId, f: impl FnOnce(&mut Value) -> anyhow::Result<T>) -> anyhow::Result<T> {
    let mut records = self.records.lock();
    let record = records
      .iter_mut()
      .find(|r| record_id(r).as_ref() == Some(draft_id))
      .ok_or_else(|| anyhow!("draft {} not found", draft_id))?;
    f(record)
  }

  fn status_of(record: &Value) -> DraftStatus {
    record
      .get("status")
      .and_then(Value::as_str)
      .and_then(DraftStatus::parse)
      .unwrap_or_else(DraftStatus::finalized)
  }

  fn require_open(record: &Value) -> anyhow::Result<()> {
    match Self::status_of(record) {
      DraftStatus::Approved => Err(anyhow!("order is already approved")),
      _ => Ok(()),
    }
  }

  fn items_mut(record: &mut Value) -> anyhow::Result<&mut Vec<Value>> {
    record
      .get_mut("items")
      .and_then(Value::as_array_mut)
      .ok_or_else(|| anyhow!("draft record has no items"))
  }

  fn book(&self, book_id: &BookId) -> anyhow::Result<&CatalogBook> {
    self
      .catalog
      .iter()
      .find(|b| &b.id == book_id)
      .ok_or_else(|| anyhow!("book {} is not in the catalog", book_id))
  }

  fn reply(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>> {
    self.with_record(draft_id, |r| Self::present(r).map(Some))
  }
}

fn record_id(record: &Value) -> Option<DraftId> {
  record.get("id").cloned().and_then(|v| serde_json::from_value(v).ok())
}

fn title_of(item: &Value) -> String {
  item
    .get("bookTitle")
    .or_else(|| item.get("title"))
    .and_then(Value::as_str)
    .unwrap_or_default()
    .to_string()
}

fn price_for(base: f64, condition: Condition) -> f64 {
  let unit = if condition.is_used() { base * 0.5 } else { base };
  // The service stores prices in whole cents.
  (unit * 100.0).round() / 100.0
}

#[async_trait]
impl DraftService for MockOrderService {
  async fn fetch_draft(&self, draft_id: &DraftId) -> anyhow::Result<Draft> {
    self.network().await;
    self.with_record(draft_id, |r| Self::present(r))
  }

  async fn list_my_drafts(&self) -> anyhow::Result<Vec<Draft>> {
    self.network().await;
    self.records.lock().iter().map(Self::present).collect()
  }

  async fn list_submitted(&self) -> anyhow::Result<Vec<Draft>> {
    self.network().await;
    self
      .records
      .lock()
      .iter()
      .filter(|r| Self::status_of(r) == DraftStatus::Submitted)
      .map(Self::present)
      .collect()
  }

  async fn add_items(&self, draft_id: &DraftId, items: &[NewDraftItem]) -> anyhow::Result<Option<Draft>> {
    self.network().await;
    let mut new_records = Vec::with_capacity(items.len());
    for item in items {
      let book = self.book(&item.book_id)?;
      let unit_price = price_for(book.price, item.condition_type);
      new_records.push(json!({
        "id": self.next_id(),
        "bookId": book.id,
        "bookTitle": book.title,
        "bookAuthor": book.author,
        "bookPrice": book.price,
        "conditionType": item.condition_type,
        "quantity": item.quantity,
        "unitPrice": unit_price,
        "subtotal": unit_price * f64::from(item.quantity),
      }));
    }
    self.with_record(draft_id, |r| {
      Self::require_open(r)?;
      Self::items_mut(r)?.extend(new_records);
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn update_item(&self, draft_id: &DraftId, item_id: &ItemId, patch: &ItemPatch) -> anyhow::Result<Option<Draft>> {
    self.network().await;
    self.with_record(draft_id, |r| {
      Self::require_open(r)?;
      let item = Self::items_mut(r)?
        .iter_mut()
        .find(|i| i.get("id").and_then(|v| serde_json::from_value::<ItemId>(v.clone()).ok()).as_ref() == Some(item_id))
        .ok_or_else(|| anyhow!("item {} not found", item_id))?;
      if let Some(quantity) = patch.quantity {
        item["quantity"] = json!(quantity);
      }
      if let Some(condition) = patch.condition_type {
        item["conditionType"] = json!(condition);
      }
      // Committed prices are recomputed server-side on the next write.
      if let Some(obj) = item.as_object_mut() {
        obj.remove("unitPrice");
        obj.remove("subtotal");
      }
      Ok(())
    })?;
    // This endpoint answers with no body; the client must re-fetch.
    Ok(None)
  }

  async fn remove_item(&self, draft_id: &DraftId, item_id: &ItemId) -> anyhow::Result<Option<Draft>> {
    self.network().await;
    self.with_record(draft_id, |r| {
      Self::require_open(r)?;
      Self::items_mut(r)?
        .retain(|i| i.get("id").and_then(|v| serde_json::from_value::<ItemId>(v.clone()).ok()).as_ref() != Some(item_id));
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn submit(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>> {
    self.network().await;
    self.with_record(draft_id, |r| {
      if Self::status_of(r) != DraftStatus::Draft {
        return Err(anyhow!("only drafts can be submitted"));
      }
      r["status"] = json!("SUBMITTED");
      Ok(())
    })?;
    self.reply(draft_id)
  }

  async fn cancel(&self, draft_id: &DraftId) -> anyhow::Result<()> {
    self.network().await;
    let mut records = self.records.lock();
    let position = records
      .iter()
      .position(|r| record_id(r).as_ref() == Some(draft_id))
      .ok_or_else(|| anyhow!("draft {} not found", draft_id))?;
    Self::require_open(&records[position])?;
    records.remove(position);
    Ok(())
  }

  async fn approve(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>> {
    self.network().await;
    self.with_record(draft_id, |r| {
      if Self::status_of(r) != DraftStatus::Submitted {
        warn!(%draft_id, "Approve requested for a draft that is not submitted.");
        return Err(anyhow!("only submitted drafts can be approved"));
      }
      r["status"] = json!("APPROVED");
      Ok(())
    })?;
    self.reply(draft_id)
  }
}
