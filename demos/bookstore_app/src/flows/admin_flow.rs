// bookstore_app/src/flows/admin_flow.rs

//! Office staff working through the approval queue.

use super::render;
use crate::errors::{AppError, Result};
use crate::state::Session;
use tracing::{info, warn};

pub async fn run(session: &Session) -> Result<()> {
  let queue = session.list_submitted().await?;
  if queue.is_empty() {
    info!("Approval queue is empty.");
    return Ok(());
  }
  info!(count = queue.len(), "Approval queue loaded.");

  for draft in &queue {
    render(draft);
    match session.approve(draft).await {
      Ok(approved) => {
        info!(draft_id = %approved.id, status = %approved.status, total = approved.total(), "Approved.");
        if let Err(e) = session.delete(&approved).await {
          warn!(draft_id = %approved.id, reason = %AppError::from(e).user_message(), "Delete rejected.");
        }
      }
      Err(e) => warn!(draft_id = %draft.id, error = %e, "Approval failed."),
    }
  }
  Ok(())
}
