// bookstore_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use bookstore_orders::{CurrentUser, Role};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub user_id: String,
  pub role: Role,
  /// Emit logs as JSON lines instead of the human-readable format.
  pub log_json: bool,
  /// Populate the mock order service with sample drafts on startup.
  pub seed_drafts: bool,
  /// Simulated network latency of the mock order service.
  pub service_latency_ms: u64,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let user_id = get_env("BOOKSTORE_USER_ID").unwrap_or_else(|_| "parent-1".to_string());
    let role = match get_env("BOOKSTORE_ROLE")
      .unwrap_or_else(|_| "customer".to_string())
      .to_ascii_lowercase()
      .as_str()
    {
      "customer" => Role::Customer,
      "admin" => Role::Admin,
      other => return Err(AppError::Config(format!("Invalid BOOKSTORE_ROLE: {}", other))),
    };
    let log_json = get_env("BOOKSTORE_LOG_JSON")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid BOOKSTORE_LOG_JSON value: {}", e)))?;
    let seed_drafts = get_env("BOOKSTORE_SEED_DRAFTS")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid BOOKSTORE_SEED_DRAFTS value: {}", e)))?;
    let service_latency_ms = get_env("BOOKSTORE_SERVICE_LATENCY_MS")
      .unwrap_or_else(|_| "15".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid BOOKSTORE_SERVICE_LATENCY_MS: {}", e)))?;

    Ok(Self {
      user_id,
      role,
      log_json,
      seed_drafts,
      service_latency_ms,
    })
  }

  pub fn current_user(&self) -> CurrentUser {
    CurrentUser {
      id: self.user_id.clone(),
      role: self.role,
    }
  }
}
