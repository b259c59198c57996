//! Per-seller running totals.

use std::collections::HashMap;

use common::{SellerId, Sku};
use domain::{Seller, SellerReport, SellerStanding, TopProduct, round_to_cents};

/// Mutable running totals for one seller during one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    seller_id: SellerId,
    name: String,
    revenue: f64,
    profit: f64,
    sales_count: u64,
    products_sold: HashMap<Sku, f64>,
}

impl SellerAccumulator {
    /// Creates an empty accumulator for a seller.
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
        }
    }

    pub fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    /// Accumulated quantity sold per SKU.
    pub fn products_sold(&self) -> &HashMap<Sku, f64> {
        &self.products_sold
    }

    /// Counts one receipt and adds its total to revenue.
    pub fn record_sale(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Adds the profit and quantity of one processed line item.
    pub fn record_item(&mut self, sku: &Sku, quantity: f64, profit: f64) {
        self.profit += profit;
        *self.products_sold.entry(sku.clone()).or_insert(0.0) += quantity;
    }

    /// Folds another accumulator for the same seller into this one.
    ///
    /// Revenue, profit, and sales count are summed; per-SKU quantities are
    /// summed key by key.
    pub fn merge(&mut self, other: SellerAccumulator) {
        debug_assert_eq!(self.seller_id, other.seller_id);
        self.revenue += other.revenue;
        self.profit += other.profit;
        self.sales_count += other.sales_count;
        for (sku, quantity) in other.products_sold {
            *self.products_sold.entry(sku).or_insert(0.0) += quantity;
        }
    }

    /// Read-only view handed to bonus strategies.
    pub fn standing(&self) -> SellerStanding {
        SellerStanding {
            revenue: self.revenue,
            profit: self.profit,
            sales_count: self.sales_count,
        }
    }

    /// Best-selling products by quantity, highest first, at most `limit`.
    ///
    /// Equal quantities are ordered by SKU.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut products: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, quantity)| TopProduct::new(sku.clone(), *quantity))
            .collect();
        products.sort_by(|a, b| {
            b.quantity
                .total_cmp(&a.quantity)
                .then_with(|| a.sku.cmp(&b.sku))
        });
        products.truncate(limit);
        products
    }

    /// Consumes the accumulator into its final, rounded report.
    pub fn into_report(self, bonus: f64, top_products_limit: usize) -> SellerReport {
        let top_products = self.top_products(top_products_limit);
        SellerReport {
            seller_id: self.seller_id,
            name: self.name,
            revenue: round_to_cents(self.revenue),
            profit: round_to_cents(self.profit),
            sales_count: self.sales_count,
            top_products,
            bonus: round_to_cents(bonus),
        }
    }
}
