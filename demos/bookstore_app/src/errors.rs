// bookstore_app/src/errors.rs

use bookstore_orders::OrderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Order Error: {source}")]
  Order {
    #[from] // Allows conversion from OrderError
    source: OrderError,
  },

  #[error("Internal Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl AppError {
  /// What the person at the screen is told.
  pub fn user_message(&self) -> String {
    match self {
      AppError::Order { source } => source.user_message(),
      AppError::NotFound(m) => format!("Not found: {}", m),
      other => other.to_string(),
    }
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
