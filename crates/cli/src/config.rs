//! Report configuration loaded from environment variables.

use std::path::PathBuf;

use analytics::{DEFAULT_TOP_PRODUCTS_LIMIT, ItemErrorPolicy};

use crate::error::{CliError, Result};

/// Report configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SALES_DATA_PATH`: input JSON document (default: `"data/sales.json"`)
/// - `SALES_TOP_PRODUCTS`: length of each seller's top-sold list (default: `10`)
/// - `SALES_ITEM_ERRORS`: `"abort"` or `"skip"` (default: `"abort"`)
///
/// Logging is controlled separately through `RUST_LOG`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub top_products: usize,
    pub item_errors: ItemErrorPolicy,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let top_products = match lookup("SALES_TOP_PRODUCTS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CliError::InvalidConfig(format!("SALES_TOP_PRODUCTS must be a number, got {raw:?}"))
            })?,
            None => defaults.top_products,
        };

        let item_errors = match lookup("SALES_ITEM_ERRORS") {
            Some(raw) => raw.parse::<ItemErrorPolicy>()?,
            None => defaults.item_errors,
        };

        Ok(Self {
            data_path: lookup("SALES_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            top_products,
            item_errors,
        })
    }

    /// Replaces the data path, e.g. with a positional argument.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/sales.json"),
            top_products: DEFAULT_TOP_PRODUCTS_LIMIT,
            item_errors: ItemErrorPolicy::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("data/sales.json"));
        assert_eq!(config.top_products, 10);
        assert_eq!(config.item_errors, ItemErrorPolicy::Abort);
    }

    #[test]
    fn test_empty_lookup_yields_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("SALES_DATA_PATH", "/tmp/q3.json"),
            ("SALES_TOP_PRODUCTS", "5"),
            ("SALES_ITEM_ERRORS", "skip"),
        ]))
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("/tmp/q3.json"));
        assert_eq!(config.top_products, 5);
        assert_eq!(config.item_errors, ItemErrorPolicy::SkipItem);
    }

    #[test]
    fn test_invalid_top_products() {
        let err = Config::from_lookup(lookup_from(&[("SALES_TOP_PRODUCTS", "ten")])).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_item_error_policy() {
        let err = Config::from_lookup(lookup_from(&[("SALES_ITEM_ERRORS", "ignore")])).unwrap_err();
        assert!(matches!(err, CliError::Analytics(_)));
    }

    #[test]
    fn test_with_data_path_overrides() {
        let config = Config::default().with_data_path("other.json");
        assert_eq!(config.data_path, PathBuf::from("other.json"));
    }
}
