//! Integration tests: JSON file → cli::run → rendered report.

use std::path::PathBuf;

use analytics::ItemErrorPolicy;
use cli::config::Config;
use cli::error::CliError;
use common::RunId;

const SALES_JSON: &str = r#"{
    "sellers": [
        {"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov"},
        {"id": "seller_2", "first_name": "Maria", "last_name": "Ivanova"}
    ],
    "products": [
        {"sku": "SKU_001", "purchase_price": 10.0, "name": "Mug"},
        {"sku": "SKU_002", "purchase_price": 2.5, "name": "Spoon"}
    ],
    "purchase_records": [
        {"seller_id": "seller_1", "receipt_id": "receipt_1", "total_amount": 60.0,
         "items": [{"sku": "SKU_001", "quantity": 3, "sale_price": 20.0, "discount": 0}]},
        {"seller_id": "seller_2", "receipt_id": "receipt_2", "total_amount": 20.0,
         "items": [{"sku": "SKU_002", "quantity": 4, "sale_price": 5.0, "discount": 0}]},
        {"seller_id": "seller_2", "receipt_id": "receipt_3", "total_amount": 7.0,
         "items": null}
    ]
}"#;

/// Writes `contents` to a fresh file under the system temp dir.
fn write_fixture(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sales-report-{}.json", RunId::new()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_run_renders_ranked_report() {
    let path = write_fixture(SALES_JSON);
    let config = Config::default().with_data_path(&path);

    let output = cli::run(&config).unwrap();
    std::fs::remove_file(&path).ok();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value["run_id"].is_string());
    assert!(value["generated_at"].is_string());

    let sellers = value["sellers"].as_array().unwrap();
    assert_eq!(sellers.len(), 2);

    assert_eq!(sellers[0]["seller_id"], "seller_1");
    assert_eq!(sellers[0]["name"], "Alexey Petrov");
    assert_eq!(sellers[0]["profit"], 30.0);
    assert_eq!(sellers[0]["bonus"], 5.0);
    assert_eq!(sellers[0]["top_products"][0]["sku"], "SKU_001");
    assert_eq!(sellers[0]["top_products"][0]["quantity"], 3.0);

    assert_eq!(sellers[1]["seller_id"], "seller_2");
    assert_eq!(sellers[1]["sales_count"], 2);
    assert_eq!(sellers[1]["revenue"], 27.0);
    assert_eq!(sellers[1]["profit"], 10.0);
    assert_eq!(sellers[1]["bonus"], 0.0);

    assert_eq!(value["summary"]["records_without_items"], 1);
    assert_eq!(value["summary"]["run_id"], value["run_id"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let config = Config::default().with_data_path("/definitely/not/here/sales.json");
    let err = cli::run(&config).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here/sales.json"));
}

#[test]
fn test_malformed_document_is_invalid_data() {
    let path = write_fixture(r#"{"sellers": {"id": "x"}, "products": [], "purchase_records": []}"#);
    let config = Config::default().with_data_path(&path);

    let err = cli::run(&config).unwrap_err();
    std::fs::remove_file(&path).ok();

    match err {
        CliError::Analytics(inner) => assert!(inner.is_invalid_data()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_skip_policy_from_config() {
    let json = SALES_JSON.replace(r#""quantity": 4"#, r#""quantity": -4"#);
    let data = domain::SalesData::from_json_str(&json).unwrap();

    let aborting = Config::default();
    let err = cli::build_report(&data, &aborting).unwrap_err();
    assert!(matches!(err, CliError::Analytics(ref inner) if inner.is_invalid_input()));

    let skipping = Config {
        item_errors: ItemErrorPolicy::SkipItem,
        ..Config::default()
    };
    let envelope = cli::build_report(&data, &skipping).unwrap();
    assert_eq!(envelope.summary.items_skipped_invalid, 1);
    assert!(envelope.sellers[1].top_products.is_empty());
}

#[test]
fn test_top_products_limit_from_config() {
    let data = domain::SalesData::from_json_str(SALES_JSON).unwrap();
    let config = Config {
        top_products: 0,
        ..Config::default()
    };
    let envelope = cli::build_report(&data, &config).unwrap();
    assert!(envelope.sellers.iter().all(|s| s.top_products.is_empty()));
}
