//! Default revenue strategy.

use crate::error::{DomainError, Result};
use crate::strategy::RevenueStrategy;

use super::{Product, PurchaseItem};

/// Revenue of a line item after its percentage discount:
/// `sale_price * (1 - discount / 100) * quantity`.
///
/// The product is not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    /// Validates the item and computes its discounted revenue.
    pub fn calculate(item: &PurchaseItem) -> Result<f64> {
        if !(0.0..=100.0).contains(&item.discount) {
            return Err(DomainError::InvalidInput {
                field: "discount",
                value: format!("{}%", item.discount),
            });
        }
        if item.sale_price.is_nan() || item.sale_price <= 0.0 {
            return Err(DomainError::InvalidInput {
                field: "price",
                value: item.sale_price.to_string(),
            });
        }
        if item.quantity.is_nan() || item.quantity <= 0.0 {
            return Err(DomainError::InvalidInput {
                field: "quantity",
                value: item.quantity.to_string(),
            });
        }

        Ok(item.sale_price * (1.0 - item.discount / 100.0) * item.quantity)
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &PurchaseItem, _product: &Product) -> Result<f64> {
        Self::calculate(item)
    }
}
