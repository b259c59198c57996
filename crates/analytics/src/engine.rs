//! The aggregation engine.
//!
//! One run goes through four phases:
//! 1. validate the input collections and the options
//! 2. seed one [`SellerAccumulator`] per seller and index products by SKU
//! 3. fold every purchase record into its seller's accumulator
//! 4. rank sellers by profit, assign bonuses, and emit rounded reports
//!
//! All state lives in the run; nothing is shared between calls.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use common::{RunId, SellerId, Sku};
use domain::{DomainError, Product, PurchaseRecord, SalesData, Seller, SellerReport};
use serde::Serialize;

use crate::accumulator::SellerAccumulator;
use crate::error::Result;
use crate::options::{AnalysisOptions, ItemErrorPolicy};

/// Counters describing what a run did with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub run_id: RunId,
    pub records_total: u64,
    pub records_skipped_unknown_seller: u64,
    pub records_without_items: u64,
    pub items_processed: u64,
    pub items_skipped_unknown_sku: u64,
    pub items_skipped_invalid: u64,
}

impl AnalysisSummary {
    fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            records_total: 0,
            records_skipped_unknown_seller: 0,
            records_without_items: 0,
            items_processed: 0,
            items_skipped_unknown_sku: 0,
            items_skipped_invalid: 0,
        }
    }

    fn absorb(&mut self, other: AnalysisSummary) {
        self.records_total += other.records_total;
        self.records_skipped_unknown_seller += other.records_skipped_unknown_seller;
        self.records_without_items += other.records_without_items;
        self.items_processed += other.items_processed;
        self.items_skipped_unknown_sku += other.items_skipped_unknown_sku;
        self.items_skipped_invalid += other.items_skipped_invalid;
    }
}

/// Reports in profit-descending order together with the run summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub reports: Vec<SellerReport>,
    pub summary: AnalysisSummary,
}

/// Aggregates sales data into one report per seller, ordered by profit.
pub fn analyze(data: &SalesData, options: &AnalysisOptions) -> Result<Vec<SellerReport>> {
    analyze_with_summary(data, options).map(|analysis| analysis.reports)
}

/// Like [`analyze`], also returning the run summary.
pub fn analyze_with_summary(data: &SalesData, options: &AnalysisOptions) -> Result<Analysis> {
    run(data, options, None)
}

/// Processes purchase records in chunks of `shard_size`, each into its own
/// accumulator set, then merges the shards per seller.
///
/// Sales counts and top products match [`analyze`]. Money totals are summed
/// in a different order, so they can differ from the single pass in the last
/// bits before rounding.
pub fn analyze_sharded(
    data: &SalesData,
    options: &AnalysisOptions,
    shard_size: usize,
) -> Result<Vec<SellerReport>> {
    run(data, options, Some(shard_size.max(1))).map(|analysis| analysis.reports)
}

fn run(data: &SalesData, options: &AnalysisOptions, shard_size: Option<usize>) -> Result<Analysis> {
    let run_id = RunId::new();
    let span = tracing::info_span!("analyze_sales", %run_id);
    let _guard = span.enter();
    let started = Instant::now();
    metrics::counter!("sales_analysis_runs_total").increment(1);

    data.validate()?;
    options.strategies()?;
    ensure_unique_sellers(&data.sellers)?;

    let catalog = index_products(&data.products);
    let mut summary = AnalysisSummary::new(run_id);

    let ledger = match shard_size {
        None => {
            let mut ledger = seed_ledger(&data.sellers);
            accumulate(&data.purchase_records, &mut ledger, &catalog, options, &mut summary)?;
            ledger
        }
        Some(size) => {
            let mut ledger = seed_ledger(&data.sellers);
            for (shard_index, shard) in data.purchase_records.chunks(size).enumerate() {
                let mut shard_ledger = seed_ledger(&data.sellers);
                let mut shard_summary = AnalysisSummary::new(run_id);
                accumulate(shard, &mut shard_ledger, &catalog, options, &mut shard_summary)?;
                tracing::debug!(shard_index, records = shard.len(), "shard accumulated");
                merge_ledger(&mut ledger, shard_ledger);
                summary.absorb(shard_summary);
            }
            ledger
        }
    };

    let reports = rank(ledger, options)?;

    let duration = started.elapsed().as_secs_f64();
    metrics::counter!("sales_analysis_records_processed")
        .increment(summary.records_total - summary.records_skipped_unknown_seller);
    metrics::counter!("sales_analysis_records_skipped")
        .increment(summary.records_skipped_unknown_seller);
    metrics::histogram!("sales_analysis_duration_seconds").record(duration);
    tracing::info!(
        sellers = reports.len(),
        records = summary.records_total,
        records_skipped_unknown_seller = summary.records_skipped_unknown_seller,
        records_without_items = summary.records_without_items,
        items_processed = summary.items_processed,
        items_skipped_unknown_sku = summary.items_skipped_unknown_sku,
        items_skipped_invalid = summary.items_skipped_invalid,
        duration,
        "sales analysis complete"
    );

    Ok(Analysis { reports, summary })
}

fn ensure_unique_sellers(sellers: &[Seller]) -> Result<()> {
    let mut seen = HashSet::with_capacity(sellers.len());
    for seller in sellers {
        if !seen.insert(&seller.id) {
            return Err(
                DomainError::InvalidData(format!("duplicate seller id: {}", seller.id)).into(),
            );
        }
    }
    Ok(())
}

/// Later entries win when a SKU appears twice.
fn index_products(products: &[Product]) -> HashMap<&Sku, &Product> {
    products.iter().map(|product| (&product.sku, product)).collect()
}

fn seed_ledger(sellers: &[Seller]) -> HashMap<SellerId, SellerAccumulator> {
    sellers
        .iter()
        .map(|seller| (seller.id.clone(), SellerAccumulator::new(seller)))
        .collect()
}

fn merge_ledger(
    into: &mut HashMap<SellerId, SellerAccumulator>,
    from: HashMap<SellerId, SellerAccumulator>,
) {
    for (seller_id, shard) in from {
        match into.get_mut(&seller_id) {
            Some(acc) => acc.merge(shard),
            None => {
                into.insert(seller_id, shard);
            }
        }
    }
}

fn accumulate(
    records: &[PurchaseRecord],
    ledger: &mut HashMap<SellerId, SellerAccumulator>,
    catalog: &HashMap<&Sku, &Product>,
    options: &AnalysisOptions,
    summary: &mut AnalysisSummary,
) -> Result<()> {
    let (revenue_strategy, _) = options.strategies()?;
    let diagnostics = options.diagnostics();

    for record in records {
        summary.records_total += 1;

        let Some(acc) = ledger.get_mut(&record.seller_id) else {
            summary.records_skipped_unknown_seller += 1;
            continue;
        };

        acc.record_sale(record.total_amount);

        let Some(items) = record.items.as_deref() else {
            summary.records_without_items += 1;
            diagnostics.warn(&format!("record without items: {}", record.receipt_id));
            continue;
        };

        for item in items {
            let Some(product) = catalog.get(&item.sku) else {
                summary.items_skipped_unknown_sku += 1;
                continue;
            };

            let item_revenue = match revenue_strategy.revenue(item, product) {
                Ok(revenue) => revenue,
                Err(err) => match options.item_error_policy() {
                    ItemErrorPolicy::Abort => return Err(err.into()),
                    ItemErrorPolicy::SkipItem => {
                        summary.items_skipped_invalid += 1;
                        diagnostics.warn(&format!(
                            "skipping invalid item {} in receipt {}: {err}",
                            item.sku, record.receipt_id
                        ));
                        continue;
                    }
                },
            };

            let item_cost = product.cost_of(item.quantity);
            acc.record_item(&item.sku, item.quantity, item_revenue - item_cost);
            summary.items_processed += 1;
        }
    }

    Ok(())
}

/// Sorts by profit descending (ties by seller id) and derives reports.
fn rank(
    ledger: HashMap<SellerId, SellerAccumulator>,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>> {
    let (_, bonus_strategy) = options.strategies()?;

    let mut ranked: Vec<SellerAccumulator> = ledger.into_values().collect();
    ranked.sort_by(|a, b| {
        b.profit()
            .total_cmp(&a.profit())
            .then_with(|| a.seller_id().cmp(b.seller_id()))
    });

    let total = ranked.len();
    let limit = options.top_products_limit();
    Ok(ranked
        .into_iter()
        .enumerate()
        .map(|(rank, acc)| {
            let bonus = bonus_strategy.bonus(rank, total, &acc.standing());
            acc.into_report(bonus, limit)
        })
        .collect())
}
