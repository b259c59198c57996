//! Shared identifier types for the sales analytics workspace.

pub mod types;

pub use types::{RunId, SellerId, Sku};
