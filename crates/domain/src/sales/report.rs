//! Output types of an analysis run.

use common::{SellerId, Sku};
use serde::{Deserialize, Serialize};

/// A product in a seller's top-sold list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: f64,
}

impl TopProduct {
    /// Creates a new top product entry.
    pub fn new(sku: impl Into<Sku>, quantity: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

/// Final performance figures for one seller.
///
/// Monetary fields are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

/// Unrounded running totals of a seller, as seen by a bonus strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SellerStanding {
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
}

impl SellerStanding {
    /// Creates a standing with the given profit and no other activity.
    pub fn with_profit(profit: f64) -> Self {
        Self {
            profit,
            ..Self::default()
        }
    }
}
