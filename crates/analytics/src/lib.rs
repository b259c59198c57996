//! Aggregation engine for per-seller sales performance reports.
//!
//! This crate turns the three input collections of a [`domain::SalesData`]
//! into a ranked list of [`domain::SellerReport`]s:
//! - [`analyze`] runs the single-pass pipeline with injected strategies
//! - [`AnalysisOptions`] carries the revenue and bonus strategies, the
//!   diagnostics sink, and the item error policy
//! - [`SellerAccumulator`] holds the running totals of one seller
//! - [`Diagnostics`] receives non-fatal warnings about skipped input

pub mod accumulator;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod options;

pub use accumulator::SellerAccumulator;
pub use diagnostics::{CollectingDiagnostics, Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use engine::{Analysis, AnalysisSummary, analyze, analyze_sharded, analyze_with_summary};
pub use error::{AnalyticsError, Result};
pub use options::{
    AnalysisOptions, AnalysisOptionsBuilder, DEFAULT_TOP_PRODUCTS_LIMIT, ItemErrorPolicy,
};
