// bookstore_app/src/services/busy_log.rs

use bookstore_orders::BusyIndicator;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Spinner stand-in: logs when the first request starts and the last one ends.
#[derive(Debug, Default)]
pub struct LoggingBusyIndicator {
  in_flight: AtomicUsize,
}

impl BusyIndicator for LoggingBusyIndicator {
  fn begin(&self, operation: &'static str) {
    if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
      debug!(operation, "Spinner on.");
    }
  }

  fn end(&self, operation: &'static str) {
    if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
      debug!(operation, "Spinner off.");
    }
  }
}
