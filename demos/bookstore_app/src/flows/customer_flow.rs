// bookstore_app/src/flows/customer_flow.rs

//! Parent building, editing and submitting an order.

use super::render;
use crate::errors::{AppError, Result};
use crate::services::catalog::load_catalog;
use crate::state::Session;
use bookstore_orders::{Condition, Draft, DraftId, DraftStatus, ItemPatch, NewDraftItem};
use tracing::{info, warn};

pub async fn run(session: &Session) -> Result<()> {
  let drafts = session.list_my_drafts().await?;
  info!(count = drafts.len(), "Loaded order history.");
  for draft in &drafts {
    render(draft);
  }

  let draft_id = drafts
    .iter()
    .find(|d| d.status == DraftStatus::Draft)
    .map(|d| d.id.clone())
    .ok_or_else(|| AppError::NotFound("no open draft for this customer".to_string()))?;
  let draft = session.open(&draft_id).await?;
  render(&draft);

  // Add two books from the catalog, one of them second-hand.
  let catalog = load_catalog()?;
  let additions: Vec<NewDraftItem> = catalog
    .iter()
    .skip(2)
    .zip([Condition::New, Condition::Used])
    .map(|(book, condition)| NewDraftItem::new(book.id.clone(), 1, condition))
    .collect();
  let draft = session.add_items(&draft, &additions).await?;
  render(&draft);

  // Bump the first line; the service answers without a body here.
  let first = draft
    .items
    .first()
    .and_then(|item| item.id.clone())
    .ok_or_else(|| AppError::Internal("draft has no addressable lines".to_string()))?;
  let draft = session.update_item(&draft, &first, &ItemPatch::quantity(3)).await?;
  render(&draft);

  if let Some(last) = draft.items.last().and_then(|item| item.id.clone()) {
    let draft = session.remove_item(&draft, &last).await?;
    render(&draft);
  }

  let draft = session.refresh(&draft_id).await?;
  let submitted = session.submit(&draft).await?;
  info!(draft_id = %submitted.id, status = %submitted.status, "Order submitted.");

  // A second submit is rejected before any request is sent.
  if let Err(e) = session.submit(&submitted).await {
    warn!(reason = %AppError::from(e).user_message(), "Second submit rejected.");
  }

  session.close(&draft_id);
  try_delete_finalized(session, &finalized_ids(&drafts)).await;
  Ok(())
}

fn finalized_ids(drafts: &[Draft]) -> Vec<DraftId> {
  drafts
    .iter()
    .filter(|d| d.status == DraftStatus::Approved)
    .map(|d| d.id.clone())
    .collect()
}

/// Finalized orders stay in the history; the delete is refused locally.
async fn try_delete_finalized(session: &Session, ids: &[DraftId]) {
  let drafts = match session.list_my_drafts().await {
    Ok(drafts) => drafts,
    Err(e) => {
      warn!(error = %e, "Could not reload order history.");
      return;
    }
  };
  for draft in drafts.iter().filter(|d| ids.contains(&d.id)) {
    match session.delete(draft).await {
      Ok(()) => info!(draft_id = %draft.id, "Deleted."),
      Err(e) => warn!(draft_id = %draft.id, reason = %AppError::from(e).user_message(), "Delete rejected."),
    }
  }
}
