//! Command-line front end for the sales analytics engine.
//!
//! Reads a JSON document with `sellers`, `products`, and `purchase_records`,
//! runs the aggregation with the standard strategies, and renders the ranked
//! seller reports as JSON.

pub mod config;
pub mod error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use analytics::{AnalysisOptions, AnalysisSummary, analyze_with_summary};
use chrono::{DateTime, Utc};
use common::RunId;
use domain::{BonusByProfit, SalesData, SellerReport, SimpleRevenue};
use serde::Serialize;

use config::Config;
use error::{CliError, Result};

/// The document written to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub sellers: Vec<SellerReport>,
    pub summary: AnalysisSummary,
}

/// Reads and parses the sales data document at `path`.
pub fn load_sales_data(path: &Path) -> Result<SalesData> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SalesData::from_reader(BufReader::new(file))?)
}

/// Builds analysis options with the standard strategies and the configured knobs.
pub fn options_from_config(config: &Config) -> AnalysisOptions {
    AnalysisOptions::builder()
        .revenue(SimpleRevenue)
        .bonus(BonusByProfit)
        .top_products_limit(config.top_products)
        .item_error_policy(config.item_errors)
        .build()
}

/// Runs the analysis and wraps the result for output.
#[tracing::instrument(skip_all, fields(sellers = data.sellers.len(), records = data.purchase_records.len()))]
pub fn build_report(data: &SalesData, config: &Config) -> Result<ReportEnvelope> {
    let analysis = analyze_with_summary(data, &options_from_config(config))?;
    Ok(ReportEnvelope {
        run_id: analysis.summary.run_id,
        generated_at: Utc::now(),
        sellers: analysis.reports,
        summary: analysis.summary,
    })
}

/// Loads the configured document and renders the report as pretty JSON.
pub fn run(config: &Config) -> Result<String> {
    tracing::info!(path = %config.data_path.display(), "loading sales data");
    let data = load_sales_data(&config.data_path)?;
    let envelope = build_report(&data, config)?;
    Ok(serde_json::to_string_pretty(&envelope)?)
}
