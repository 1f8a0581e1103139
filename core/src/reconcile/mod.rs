// bookstore_orders/src/reconcile/mod.rs

//! Merging server responses back into the item order the user is looking at.

pub mod merge;
pub mod tracker;

pub use merge::reconcile;
pub use tracker::{Generation, OrderTracker};
