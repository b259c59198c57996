//! Input records for the sales domain.

use common::{SellerId, Sku};
use serde::{Deserialize, Deserializer, Serialize};

/// A seller taking part in the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Creates a new seller.
    pub fn new(
        id: impl Into<SellerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns `"<first_name> <last_name>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog product with its purchase (cost) price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub purchase_price: f64,
}

impl Product {
    /// Creates a new product.
    pub fn new(sku: impl Into<Sku>, purchase_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
        }
    }

    /// Cost of `quantity` units at the purchase price.
    pub fn cost_of(&self, quantity: f64) -> f64 {
        self.purchase_price * quantity
    }
}

/// One line of a purchase record.
///
/// Numeric fields that are absent, `null`, or not a number deserialize as
/// `NaN`, which the default revenue strategy rejects as invalid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: Sku,

    /// Units sold. Fractional quantities are accepted.
    #[serde(default = "not_a_number", deserialize_with = "lenient_number")]
    pub quantity: f64,

    /// Price per unit before discount.
    #[serde(default = "not_a_number", deserialize_with = "lenient_number")]
    pub sale_price: f64,

    /// Discount percentage, expected within `0..=100`.
    #[serde(default = "not_a_number", deserialize_with = "lenient_number")]
    pub discount: f64,
}

impl PurchaseItem {
    /// Creates a new purchase item.
    pub fn new(sku: impl Into<Sku>, quantity: f64, sale_price: f64, discount: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }
}

/// A receipt issued by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    pub receipt_id: String,

    /// Receipt total, taken as given.
    pub total_amount: f64,

    /// Line items. `None` when the field is absent, `null`, or not an array.
    ///
    /// An element without a string `sku` rejects the whole document; bad
    /// numeric fields are left to the revenue strategy.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Option<Vec<PurchaseItem>>,
}

impl PurchaseRecord {
    /// Creates a record with line items.
    pub fn new(
        seller_id: impl Into<SellerId>,
        receipt_id: impl Into<String>,
        total_amount: f64,
        items: Vec<PurchaseItem>,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            receipt_id: receipt_id.into(),
            total_amount,
            items: Some(items),
        }
    }

    /// Creates a record whose item sequence is missing.
    pub fn without_items(
        seller_id: impl Into<SellerId>,
        receipt_id: impl Into<String>,
        total_amount: f64,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            receipt_id: receipt_id.into(),
            total_amount,
            items: None,
        }
    }
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<PurchaseItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if !value.is_array() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

fn not_a_number() -> f64 {
    f64::NAN
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_first_and_last() {
        let seller = Seller::new("seller_1", "Alexey", "Petrov");
        assert_eq!(seller.display_name(), "Alexey Petrov");
    }

    #[test]
    fn test_product_cost_of() {
        let product = Product::new("SKU_001", 12.5);
        assert_eq!(product.cost_of(4.0), 50.0);
        assert_eq!(product.cost_of(1.5), 18.75);
    }

    #[test]
    fn test_record_items_parsed_from_array() {
        let json = r#"{
            "seller_id": "seller_1",
            "receipt_id": "receipt_1",
            "total_amount": 40.0,
            "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 20.0, "discount": 0}]
        }"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        let items = record.items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku.as_str(), "SKU_001");
        assert_eq!(items[0].quantity, 2.0);
    }

    #[test]
    fn test_fractional_quantity_parsed() {
        let json = r#"{
            "seller_id": "seller_1",
            "receipt_id": "receipt_1",
            "total_amount": 30.0,
            "items": [
                {"sku": "SKU_001", "quantity": 1.5, "sale_price": 20.0, "discount": 0},
                {"sku": "SKU_002", "quantity": 2.0, "sale_price": 5.0, "discount": 0}
            ]
        }"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        let items = record.items.unwrap();
        assert_eq!(items[0].quantity, 1.5);
        assert_eq!(items[1].quantity, 2.0);
    }

    #[test]
    fn test_bad_numeric_fields_become_nan() {
        let json = r#"{
            "seller_id": "seller_1",
            "receipt_id": "receipt_1",
            "total_amount": 30.0,
            "items": [
                {"sku": "SKU_001", "quantity": "two", "discount": null},
                {"sku": "SKU_002", "quantity": 1, "sale_price": 5.0, "discount": 0}
            ]
        }"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        let items = record.items.unwrap();
        assert!(items[0].quantity.is_nan());
        assert!(items[0].sale_price.is_nan());
        assert!(items[0].discount.is_nan());
        assert_eq!(items[1].sale_price, 5.0);
    }

    #[test]
    fn test_item_without_sku_rejects_record() {
        let json = r#"{
            "seller_id": "seller_1",
            "receipt_id": "receipt_1",
            "total_amount": 30.0,
            "items": [{"quantity": 1, "sale_price": 5.0, "discount": 0}]
        }"#;
        assert!(serde_json::from_str::<PurchaseRecord>(json).is_err());
    }

    #[test]
    fn test_record_items_null_is_none() {
        let json = r#"{"seller_id": "s", "receipt_id": "r", "total_amount": 1.0, "items": null}"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert!(record.items.is_none());
    }

    #[test]
    fn test_record_items_missing_is_none() {
        let json = r#"{"seller_id": "s", "receipt_id": "r", "total_amount": 1.0}"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert!(record.items.is_none());
    }

    #[test]
    fn test_record_items_not_an_array_is_none() {
        let json = r#"{"seller_id": "s", "receipt_id": "r", "total_amount": 1.0, "items": "oops"}"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert!(record.items.is_none());

        let json = r#"{"seller_id": "s", "receipt_id": "r", "total_amount": 1.0, "items": {"sku": "x"}}"#;
        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert!(record.items.is_none());
    }

    #[test]
    fn test_product_ignores_extra_fields() {
        let json = r#"{"sku": "SKU_001", "purchase_price": 3.5, "name": "Tea", "category": "Food"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.purchase_price, 3.5);
    }
}
