//! Sales data model, report types, and default strategies.

mod bonus;
mod data;
mod money;
mod report;
mod revenue;
mod value_objects;

pub use bonus::BonusByProfit;
pub use data::SalesData;
pub use money::round_to_cents;
pub use report::{SellerReport, SellerStanding, TopProduct};
pub use revenue::SimpleRevenue;
pub use value_objects::{Product, PurchaseItem, PurchaseRecord, Seller};
