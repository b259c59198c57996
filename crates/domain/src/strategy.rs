//! Pluggable scoring strategies.
//!
//! The aggregation engine never hardcodes a revenue or bonus formula; it is
//! handed implementations of these traits. Plain closures with the matching
//! signature implement them too:
//!
//! ```
//! use domain::{BonusStrategy, SellerStanding};
//!
//! let flat = |_rank: usize, _total: usize, _seller: &SellerStanding| 100.0;
//! assert_eq!(flat.bonus(0, 3, &SellerStanding::with_profit(1.0)), 100.0);
//! ```

use crate::error::Result;
use crate::sales::{Product, PurchaseItem, SellerStanding};

/// Computes the revenue of one purchased line item.
pub trait RevenueStrategy: Send + Sync {
    /// Returns the monetary revenue of `item`, or an error if the item is
    /// not acceptable to this strategy.
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> Result<f64>;
}

/// Computes a seller's bonus from their position in the profit ranking.
pub trait BonusStrategy: Send + Sync {
    /// `rank` is zero-based in profit-descending order; `total` is the number
    /// of sellers in the run.
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStanding) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseItem, &Product) -> Result<f64> + Send + Sync,
{
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> Result<f64> {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStanding) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStanding) -> f64 {
        self(rank, total, seller)
    }
}
