//! The three input collections of one analysis run.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{Product, PurchaseRecord, Seller};
use crate::error::{DomainError, Result};

/// Sellers, products, and purchase records supplied by the caller.
///
/// Absent collections deserialize as empty and are rejected by
/// [`SalesData::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Creates a data set from the three collections.
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Parses a JSON document.
    ///
    /// Shape errors (a collection that is not an array, a document that is
    /// not an object) are reported as [`DomainError::InvalidData`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidData(e.to_string()))
    }

    /// Parses a JSON document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| DomainError::InvalidData(e.to_string()))
    }

    /// Rejects data sets where any of the three collections is empty.
    pub fn validate(&self) -> Result<()> {
        let empty = [
            ("sellers", self.sellers.is_empty()),
            ("products", self.products.is_empty()),
            ("purchase_records", self.purchase_records.is_empty()),
        ];
        match empty.iter().find(|(_, is_empty)| *is_empty) {
            Some((name, _)) => Err(DomainError::InvalidData(format!(
                "{name} collection is missing or empty"
            ))),
            None => Ok(()),
        }
    }
}
