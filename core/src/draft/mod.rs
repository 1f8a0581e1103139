// bookstore_orders/src/draft/mod.rs

//! Drafts (customer orders awaiting approval), their lifecycle and the
//! client-side checks that guard it.

pub mod guard;
pub mod model;
pub mod status;

pub use crate::item::DraftId;
pub use guard::{ensure_permitted, Role};
pub use model::Draft;
pub use status::{DraftAction, DraftStatus};
