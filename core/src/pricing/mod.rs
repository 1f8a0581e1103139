// bookstore_orders/src/pricing/mod.rs

//! Line and order pricing.
//!
//! Every screen that shows a price goes through these functions: the customer
//! order builder, the customer's order history, the admin draft review and the
//! admin order history. Amounts stay `f64` throughout and are rounded only by
//! [`format_currency`] when turned into text.

pub mod currency;
pub mod resolve;
pub mod total;

pub use currency::format_currency;
pub use resolve::{is_discounted, resolve_display_base_price, resolve_subtotal, resolve_unit_price, USED_PRICE_FACTOR};
pub use total::compute_order_total;
