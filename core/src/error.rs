// bookstore_orders/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::draft::{DraftAction, DraftId, DraftStatus};

#[derive(Debug, Error)]
pub enum OrderError {
  #[error("Action '{action}' is not allowed while the draft is {status}")]
  ActionNotAllowed { action: DraftAction, status: DraftStatus },

  #[error("Action '{action}' requires an administrator")]
  Forbidden { action: DraftAction },

  #[error("No signed-in user for this session")]
  NotSignedIn,

  #[error("Order service call '{operation}' failed. Source: {source}")]
  Service {
    operation: &'static str,
    #[source]
    source: AnyhowError,
  },

  #[error("Order record could not be decoded. Source: {source}")]
  InvalidRecord {
    #[source]
    source: serde_json::Error,
  },

  #[error("Response for draft {draft_id} arrived after its view was closed")]
  StaleResponse { draft_id: DraftId },

  #[error("Internal order engine error: {0}")]
  Internal(String),
}

impl OrderError {
  /// Wraps a failure coming back from the external order service.
  pub fn service(operation: &'static str, source: AnyhowError) -> Self {
    OrderError::Service { operation, source }
  }

  /// Text suitable for showing to the person who triggered the action.
  pub fn user_message(&self) -> String {
    match self {
      OrderError::ActionNotAllowed { action: DraftAction::Delete, status } => {
        format!("This order is {} and can no longer be deleted.", status.label())
      }
      OrderError::ActionNotAllowed { action, status } => {
        format!("Cannot {} an order that is {}.", action.verb(), status.label())
      }
      OrderError::Forbidden { action } => format!("Only an administrator can {} orders.", action.verb()),
      OrderError::NotSignedIn => "Please sign in again.".to_string(),
      OrderError::Service { source, .. } => format!("The request failed: {}", source),
      OrderError::InvalidRecord { .. } => "The server returned an order we could not read.".to_string(),
      // Nobody is looking at the draft anymore.
      OrderError::StaleResponse { .. } => String::new(),
      OrderError::Internal(m) => format!("Something went wrong: {}", m),
    }
  }
}

impl From<AnyhowError> for OrderError {
  fn from(err: AnyhowError) -> Self {
    OrderError::Service {
      operation: "unknown",
      source: err,
    }
  }
}

impl From<serde_json::Error> for OrderError {
  fn from(source: serde_json::Error) -> Self {
    OrderError::InvalidRecord { source }
  }
}

pub type OrderResult<T, E = OrderError> = std::result::Result<T, E>;
