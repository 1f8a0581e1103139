// bookstore_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod flows;
mod services;
mod state;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::services::busy_log::LoggingBusyIndicator;
use crate::services::catalog::load_catalog;
use crate::services::order_mock::MockOrderService;
use crate::state::AppState;

use bookstore_orders::{CurrentUser, Role};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy(); // Allow RUST_LOG override
  let builder = tracing_subscriber::fmt().with_env_filter(filter);
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

async fn run(state: &AppState) -> AppResult<()> {
  let user = state.config.current_user();
  if user.role == Role::Customer {
    flows::customer_flow::run(&state.session_for(user)).await?;
    // Hand the submitted order over to the office.
    flows::admin_flow::run(&state.session_for(CurrentUser::admin("office-1"))).await?;
  } else {
    flows::admin_flow::run(&state.session_for(user)).await?;
  }
  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      eprintln!("{}", e);
      return ExitCode::FAILURE;
    }
  };
  init_tracing(app_config.log_json);
  tracing::info!(user = %app_config.user_id, role = ?app_config.role, "Starting bookstore order demo...");

  let catalog = match load_catalog() {
    Ok(catalog) => catalog,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load the catalog.");
      return ExitCode::FAILURE;
    }
  };
  let service = Arc::new(MockOrderService::new(catalog, app_config.service_latency_ms));
  if app_config.seed_drafts {
    service.seed();
  }

  let state = AppState {
    config: app_config.clone(),
    service,
    busy: Arc::new(LoggingBusyIndicator::default()),
  };

  match run(&state).await {
    Ok(()) => {
      tracing::info!("Demo finished.");
      ExitCode::SUCCESS
    }
    Err(e) => {
      tracing::error!(error = %e, reason = %e.user_message(), "Demo stopped.");
      ExitCode::FAILURE
    }
  }
}
