// bookstore_app/src/services/mod.rs

//! Stand-ins for the remote services and host capabilities.

pub mod busy_log;
pub mod catalog;
pub mod order_mock;
