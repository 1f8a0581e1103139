// bookstore_orders/src/draft/guard.rs

//! Client-side lifecycle checks, run before any request leaves the client.
//! The service enforces the same rules; checking here fails fast.

use super::status::{DraftAction, DraftStatus};
use crate::error::{OrderError, OrderResult};
use tracing::warn;

/// Who is acting on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  Customer,
  Admin,
}

impl DraftStatus {
  /// Whether `action` is allowed in this state, ignoring who performs it.
  pub fn permits(&self, action: DraftAction) -> bool {
    match action {
      DraftAction::AddItems | DraftAction::EditItem | DraftAction::RemoveItem | DraftAction::Delete => {
        matches!(self, DraftStatus::Draft | DraftStatus::Submitted)
      }
      DraftAction::Submit => matches!(self, DraftStatus::Draft),
      DraftAction::Approve => matches!(self, DraftStatus::Submitted),
    }
  }

  pub fn is_editable(&self) -> bool {
    self.permits(DraftAction::EditItem)
  }
}

/// Checks role first, then state.
pub fn ensure_permitted(status: DraftStatus, action: DraftAction, role: Role) -> OrderResult<()> {
  if action.is_admin_only() && role != Role::Admin {
    warn!(%action, ?role, "Rejected admin-only draft action.");
    return Err(OrderError::Forbidden { action });
  }
  if !status.permits(action) {
    warn!(%action, %status, "Rejected draft action for current status.");
    return Err(OrderError::ActionNotAllowed { action, status });
  }
  Ok(())
}
