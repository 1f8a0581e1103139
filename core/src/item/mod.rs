// bookstore_orders/src/item/mod.rs

//! Line item model: identifiers, condition, lenient record decoding and
//! the request payloads used to edit drafts.

pub(crate) mod coerce;
pub mod condition;
pub mod id;
pub mod payload;
pub mod record;

pub use condition::Condition;
pub use id::{BookId, DraftId, ItemId};
pub use payload::{ItemPatch, NewDraftItem};
pub use record::{OrderItem, RawOrderItem};
