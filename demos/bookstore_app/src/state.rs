// bookstore_app/src/state.rs
use crate::config::AppConfig;
use crate::services::busy_log::LoggingBusyIndicator;
use crate::services::order_mock::MockOrderService;
use bookstore_orders::{CurrentUser, DraftSession, StaticSession};
use std::sync::Arc;

pub type Session = DraftSession<MockOrderService>;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub service: Arc<MockOrderService>,
  pub busy: Arc<LoggingBusyIndicator>,
}

impl AppState {
  /// A session for `user` against the shared order service.
  pub fn session_for(&self, user: CurrentUser) -> Session {
    DraftSession::new(self.service.clone(), Arc::new(StaticSession::signed_in(user)))
      .with_busy_indicator(self.busy.clone())
  }
}
