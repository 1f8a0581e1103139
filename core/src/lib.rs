// bookstore_orders/src/lib.rs

//! Order pricing and reconciliation for the school bookstore.
//!
//! Customers build draft orders from yearly book lists, submit them, and an
//! administrator approves them. The order service owns every record; this
//! crate holds the client-side rules:
//!  - Lenient decoding of line items that arrive in several shapes.
//!  - Unit price, subtotal and total resolution, trusting committed server values.
//!  - The struck-through original price for discounted USED copies.
//!  - Order-stable reconciliation of refreshed drafts, keyed per draft id.
//!  - Lifecycle checks that reject invalid actions before a request is made.
//!  - A `DraftSession` that wires the above to an async `DraftService`.

pub mod draft;
pub mod error;
pub mod item;
pub mod pricing;
pub mod reconcile;
pub mod service;
pub mod session;
pub mod view;

// --- Re-exports for the Public API ---

pub use crate::item::{BookId, Condition, DraftId, ItemId, ItemPatch, NewDraftItem, OrderItem, RawOrderItem};

pub use crate::pricing::{
  compute_order_total,
  format_currency,
  is_discounted,
  resolve_display_base_price,
  resolve_subtotal,
  resolve_unit_price,
};

pub use crate::draft::{ensure_permitted, Draft, DraftAction, DraftStatus, Role};

pub use crate::reconcile::{reconcile, Generation, OrderTracker};

pub use crate::service::{BusyGuard, BusyIndicator, CurrentUser, DraftService, NoBusyIndicator, SessionProvider, StaticSession};

pub use crate::session::DraftSession;

pub use crate::view::{DraftView, LineView};

pub use crate::error::{OrderError, OrderResult};

/*
    Typical flow for an editing screen:
    1. Build a `DraftSession` from an `Arc<impl DraftService>` and a `SessionProvider`.
    2. `session.open(&draft_id)` when the screen mounts; render `DraftView::from_draft`.
    3. Call `add_items` / `update_item` / `remove_item` / `submit` with the draft
       currently shown; each returns the refreshed draft in stable item order.
    4. `session.close(&draft_id)` when the screen unmounts so late responses are dropped.
*/
