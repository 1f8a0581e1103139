// bookstore_orders/src/service.rs

//! Seams to the outside world: the remote order service and the capabilities
//! a host application injects (who is signed in, where to show a spinner).

use crate::draft::{Draft, DraftId, Role};
use crate::item::{ItemId, ItemPatch, NewDraftItem};
use async_trait::async_trait;

/// The remote order/draft service.
///
/// Mutations return the updated draft when the endpoint sends one back, or
/// `None` when the caller has to fetch it again. Failures are reported as
/// `anyhow::Error` and wrapped into `OrderError::Service` by the session.
#[async_trait]
pub trait DraftService: Send + Sync + 'static {
  async fn fetch_draft(&self, draft_id: &DraftId) -> anyhow::Result<Draft>;

  /// Drafts and orders belonging to the signed-in customer.
  async fn list_my_drafts(&self) -> anyhow::Result<Vec<Draft>>;

  /// Admin approval queue: drafts in SUBMITTED state.
  async fn list_submitted(&self) -> anyhow::Result<Vec<Draft>>;

  async fn add_items(&self, draft_id: &DraftId, items: &[NewDraftItem]) -> anyhow::Result<Option<Draft>>;

  async fn update_item(&self, draft_id: &DraftId, item_id: &ItemId, patch: &ItemPatch) -> anyhow::Result<Option<Draft>>;

  async fn remove_item(&self, draft_id: &DraftId, item_id: &ItemId) -> anyhow::Result<Option<Draft>>;

  async fn submit(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>>;

  /// Deletes the whole draft.
  async fn cancel(&self, draft_id: &DraftId) -> anyhow::Result<()>;

  async fn approve(&self, draft_id: &DraftId) -> anyhow::Result<Option<Draft>>;
}

/// The signed-in user as far as the order engine cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
  pub id: String,
  pub role: Role,
}

impl CurrentUser {
  pub fn customer(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      role: Role::Customer,
    }
  }

  pub fn admin(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      role: Role::Admin,
    }
  }
}

/// Supplies the current user. Token storage and sign-in live with the host.
pub trait SessionProvider: Send + Sync {
  fn current_user(&self) -> Option<CurrentUser>;
}

/// A provider that always reports the same user (or nobody).
#[derive(Debug, Clone)]
pub struct StaticSession(Option<CurrentUser>);

impl StaticSession {
  pub fn signed_in(user: CurrentUser) -> Self {
    StaticSession(Some(user))
  }

  pub fn signed_out() -> Self {
    StaticSession(None)
  }
}

impl SessionProvider for StaticSession {
  fn current_user(&self) -> Option<CurrentUser> {
    self.0.clone()
  }
}

/// Sink for the host's loading indicator.
pub trait BusyIndicator: Send + Sync {
  fn begin(&self, operation: &'static str);
  fn end(&self, operation: &'static str);
}

/// Ignores busy notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBusyIndicator;

impl BusyIndicator for NoBusyIndicator {
  fn begin(&self, _operation: &'static str) {}
  fn end(&self, _operation: &'static str) {}
}

/// Calls `begin` on creation and `end` on drop, so the indicator is cleared
/// on every exit path including errors.
pub struct BusyGuard<'a> {
  indicator: &'a dyn BusyIndicator,
  operation: &'static str,
}

impl<'a> BusyGuard<'a> {
  pub fn new(indicator: &'a dyn BusyIndicator, operation: &'static str) -> Self {
    indicator.begin(operation);
    Self { indicator, operation }
  }
}

impl Drop for BusyGuard<'_> {
  fn drop(&mut self) {
    self.indicator.end(self.operation);
  }
}
