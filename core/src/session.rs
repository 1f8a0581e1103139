// bookstore_orders/src/session.rs

//! `DraftSession` sequences every draft operation the same way:
//! lifecycle check, service call, refresh, reconcile.
//!
//! A failed call returns before the tracker is touched, so the order the user
//! sees only advances on success. Responses for a draft whose view was closed
//! (or re-opened) in the meantime are discarded with `OrderError::StaleResponse`.

use crate::draft::{ensure_permitted, Draft, DraftAction, DraftId, Role};
use crate::error::{OrderError, OrderResult};
use crate::item::{ItemId, ItemPatch, NewDraftItem};
use crate::reconcile::{Generation, OrderTracker};
use crate::service::{BusyGuard, BusyIndicator, CurrentUser, DraftService, NoBusyIndicator, SessionProvider};
use std::future::Future;
use std::sync::Arc;
use tracing::{event, instrument, Level};

pub struct DraftSession<S: DraftService> {
  service: Arc<S>,
  session: Arc<dyn SessionProvider>,
  busy: Arc<dyn BusyIndicator>,
  tracker: OrderTracker,
}

impl<S: DraftService> DraftSession<S> {
  pub fn new(service: Arc<S>, session: Arc<dyn SessionProvider>) -> Self {
    Self {
      service,
      session,
      busy: Arc::new(NoBusyIndicator),
      tracker: OrderTracker::new(),
    }
  }

  pub fn with_busy_indicator(mut self, busy: Arc<dyn BusyIndicator>) -> Self {
    self.busy = busy;
    self
  }

  pub fn tracker(&self) -> &OrderTracker {
    &self.tracker
  }

  pub fn service(&self) -> &Arc<S> {
    &self.service
  }

  fn current_user(&self) -> OrderResult<CurrentUser> {
    self.session.current_user().ok_or(OrderError::NotSignedIn)
  }

  fn apply(&self, generation: Generation, fresh: Draft) -> OrderResult<Draft> {
    let draft_id = fresh.id.clone();
    self
      .tracker
      .reconcile_if_current(generation, fresh)
      .ok_or(OrderError::StaleResponse { draft_id })
  }

  async fn fetch(&self, draft_id: &DraftId) -> OrderResult<Draft> {
    let _busy = BusyGuard::new(self.busy.as_ref(), "fetch_draft");
    self
      .service
      .fetch_draft(draft_id)
      .await
      .map_err(|e| OrderError::service("fetch_draft", e))
  }

  /// Opens a draft view: starts tracking it and returns it reconciled.
  #[instrument(name = "DraftSession::open", skip_all, fields(draft_id = %draft_id), err(Display))]
  pub async fn open(&self, draft_id: &DraftId) -> OrderResult<Draft> {
    self.current_user()?;
    let generation = self.tracker.open(draft_id);
    let fresh = self.fetch(draft_id).await?;
    self.apply(generation, fresh)
  }

  /// Re-fetches an open draft, keeping the user's item order.
  #[instrument(name = "DraftSession::refresh", skip_all, fields(draft_id = %draft_id), err(Display))]
  pub async fn refresh(&self, draft_id: &DraftId) -> OrderResult<Draft> {
    self.open(draft_id).await
  }

  /// Closes a draft view. Responses still in flight for it are dropped.
  /// Drafts only seen in listings are released when a later listing no
  /// longer contains them.
  pub fn close(&self, draft_id: &DraftId) -> bool {
    self.tracker.forget(draft_id)
  }

  /// The signed-in customer's drafts and finalized orders.
  #[instrument(name = "DraftSession::list_my_drafts", skip_all, err(Display))]
  pub async fn list_my_drafts(&self) -> OrderResult<Vec<Draft>> {
    self.current_user()?;
    let drafts = {
      let _busy = BusyGuard::new(self.busy.as_ref(), "list_my_drafts");
      self
        .service
        .list_my_drafts()
        .await
        .map_err(|e| OrderError::service("list_my_drafts", e))?
    };
    event!(Level::DEBUG, count = drafts.len(), "Fetched customer drafts.");
    Ok(self.reconcile_listing(drafts))
  }

  /// Admin approval queue.
  #[instrument(name = "DraftSession::list_submitted", skip_all, err(Display))]
  pub async fn list_submitted(&self) -> OrderResult<Vec<Draft>> {
    let user = self.current_user()?;
    if user.role != Role::Admin {
      return Err(OrderError::Forbidden {
        action: DraftAction::Approve,
      });
    }
    let drafts = {
      let _busy = BusyGuard::new(self.busy.as_ref(), "list_submitted");
      self
        .service
        .list_submitted()
        .await
        .map_err(|e| OrderError::service("list_submitted", e))?
    };
    event!(Level::DEBUG, count = drafts.len(), "Fetched approval queue.");
    Ok(self.reconcile_listing(drafts))
  }

  fn reconcile_listing(&self, drafts: Vec<Draft>) -> Vec<Draft> {
    let listed: Vec<DraftId> = drafts.iter().map(|draft| draft.id.clone()).collect();
    let drafts: Vec<Draft> = drafts.into_iter().map(|draft| self.tracker.reconcile(draft)).collect();
    self.tracker.release_unlisted(&listed);
    drafts
  }

  async fn mutate<F, Fut>(&self, draft: &Draft, action: DraftAction, call: F) -> OrderResult<Draft>
  where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<Draft>>>,
  {
    let user = self.current_user()?;
    ensure_permitted(draft.status, action, user.role)?;

    let generation = self.tracker.track(&draft.id);
    let operation = action.as_str();
    let returned = {
      let _busy = BusyGuard::new(self.busy.as_ref(), operation);
      call().await.map_err(|e| OrderError::service(operation, e))?
    };

    let fresh = match returned {
      Some(updated) => updated,
      None => {
        event!(Level::TRACE, %action, "Service returned no draft, fetching it.");
        self.fetch(&draft.id).await?
      }
    };
    self.apply(generation, fresh)
  }

  #[instrument(name = "DraftSession::add_items", skip_all, fields(draft_id = %draft.id, count = items.len()), err(Display))]
  pub async fn add_items(&self, draft: &Draft, items: &[NewDraftItem]) -> OrderResult<Draft> {
    self
      .mutate(draft, DraftAction::AddItems, || self.service.add_items(&draft.id, items))
      .await
  }

  #[instrument(name = "DraftSession::update_item", skip_all, fields(draft_id = %draft.id, item_id = %item_id), err(Display))]
  pub async fn update_item(&self, draft: &Draft, item_id: &ItemId, patch: &ItemPatch) -> OrderResult<Draft> {
    self
      .mutate(draft, DraftAction::EditItem, || self.service.update_item(&draft.id, item_id, patch))
      .await
  }

  #[instrument(name = "DraftSession::remove_item", skip_all, fields(draft_id = %draft.id, item_id = %item_id), err(Display))]
  pub async fn remove_item(&self, draft: &Draft, item_id: &ItemId) -> OrderResult<Draft> {
    self
      .mutate(draft, DraftAction::RemoveItem, || self.service.remove_item(&draft.id, item_id))
      .await
  }

  #[instrument(name = "DraftSession::submit", skip_all, fields(draft_id = %draft.id), err(Display))]
  pub async fn submit(&self, draft: &Draft) -> OrderResult<Draft> {
    self
      .mutate(draft, DraftAction::Submit, || self.service.submit(&draft.id))
      .await
  }

  #[instrument(name = "DraftSession::approve", skip_all, fields(draft_id = %draft.id), err(Display))]
  pub async fn approve(&self, draft: &Draft) -> OrderResult<Draft> {
    self
      .mutate(draft, DraftAction::Approve, || self.service.approve(&draft.id))
      .await
  }

  /// Deletes the whole draft. Approved drafts are rejected before any
  /// request is made.
  #[instrument(name = "DraftSession::delete", skip_all, fields(draft_id = %draft.id), err(Display))]
  pub async fn delete(&self, draft: &Draft) -> OrderResult<()> {
    let user = self.current_user()?;
    ensure_permitted(draft.status, DraftAction::Delete, user.role)?;
    {
      let _busy = BusyGuard::new(self.busy.as_ref(), "delete");
      self
        .service
        .cancel(&draft.id)
        .await
        .map_err(|e| OrderError::service("delete", e))?;
    }
    self.tracker.forget(&draft.id);
    event!(Level::INFO, draft_id = %draft.id, "Draft deleted.");
    Ok(())
  }
}
