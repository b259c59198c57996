//! Domain layer for sales performance analysis.
//!
//! This crate provides:
//! - Input records: sellers, products, and purchase records with line items
//! - Report types produced by the aggregation engine
//! - [`RevenueStrategy`] and [`BonusStrategy`] with their default implementations
//! - The cents rounding rule applied to reported amounts

pub mod error;
pub mod sales;
pub mod strategy;

pub use common::{SellerId, Sku};
pub use error::{DomainError, Result};
pub use sales::{
    BonusByProfit, Product, PurchaseItem, PurchaseRecord, SalesData, Seller, SellerReport,
    SellerStanding, SimpleRevenue, TopProduct, round_to_cents,
};
pub use strategy::{BonusStrategy, RevenueStrategy};
