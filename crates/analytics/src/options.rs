//! Strategies and knobs for one analysis run.

use std::str::FromStr;
use std::sync::Arc;

use domain::{BonusByProfit, BonusStrategy, DomainError, RevenueStrategy, SimpleRevenue};

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{AnalyticsError, Result};

/// Number of products kept in each seller's top-sold list by default.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// What to do when the revenue strategy rejects a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemErrorPolicy {
    /// Propagate the error and abort the whole run.
    #[default]
    Abort,

    /// Emit a diagnostic and skip only the offending item.
    SkipItem,
}

impl FromStr for ItemErrorPolicy {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(ItemErrorPolicy::Abort),
            "skip" | "skip_item" => Ok(ItemErrorPolicy::SkipItem),
            other => Err(AnalyticsError::UnknownItemErrorPolicy(other.to_string())),
        }
    }
}

/// Configuration of an analysis run.
///
/// Strategies are optional at construction time so that a missing one is
/// reported by the engine as an invalid-options error rather than being
/// impossible to express.
#[derive(Clone)]
pub struct AnalysisOptions {
    revenue: Option<Arc<dyn RevenueStrategy>>,
    bonus: Option<Arc<dyn BonusStrategy>>,
    diagnostics: Arc<dyn Diagnostics>,
    top_products_limit: usize,
    item_error_policy: ItemErrorPolicy,
}

impl AnalysisOptions {
    /// Creates a builder with no strategies set.
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::default()
    }

    /// Options using [`SimpleRevenue`] and [`BonusByProfit`].
    pub fn standard() -> Self {
        Self::builder()
            .revenue(SimpleRevenue)
            .bonus(BonusByProfit)
            .build()
    }

    /// Returns both strategies, or an invalid-options error naming the
    /// first one that is missing.
    pub fn strategies(&self) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy)> {
        let revenue = self.revenue.as_deref().ok_or_else(|| {
            DomainError::InvalidOptions("revenue strategy is required".to_string())
        })?;
        let bonus = self.bonus.as_deref().ok_or_else(|| {
            DomainError::InvalidOptions("bonus strategy is required".to_string())
        })?;
        Ok((revenue, bonus))
    }

    /// Returns the diagnostics sink.
    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }

    /// Returns the maximum length of each seller's top-sold list.
    pub fn top_products_limit(&self) -> usize {
        self.top_products_limit
    }

    /// Returns the item error policy.
    pub fn item_error_policy(&self) -> ItemErrorPolicy {
        self.item_error_policy
    }
}

impl std::fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("revenue", &self.revenue.is_some())
            .field("bonus", &self.bonus.is_some())
            .field("top_products_limit", &self.top_products_limit)
            .field("item_error_policy", &self.item_error_policy)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AnalysisOptions`].
pub struct AnalysisOptionsBuilder {
    revenue: Option<Arc<dyn RevenueStrategy>>,
    bonus: Option<Arc<dyn BonusStrategy>>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
    top_products_limit: usize,
    item_error_policy: ItemErrorPolicy,
}

impl Default for AnalysisOptionsBuilder {
    fn default() -> Self {
        Self {
            revenue: None,
            bonus: None,
            diagnostics: None,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            item_error_policy: ItemErrorPolicy::default(),
        }
    }
}

impl AnalysisOptionsBuilder {
    /// Sets the revenue strategy.
    pub fn revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Arc::new(strategy));
        self
    }

    /// Sets the bonus strategy.
    pub fn bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Arc::new(strategy));
        self
    }

    /// Sets the diagnostics sink. Defaults to [`TracingDiagnostics`].
    pub fn diagnostics(mut self, sink: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Some(Arc::new(sink));
        self
    }

    /// Sets the maximum length of each seller's top-sold list.
    pub fn top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    /// Sets the item error policy.
    pub fn item_error_policy(mut self, policy: ItemErrorPolicy) -> Self {
        self.item_error_policy = policy;
        self
    }

    /// Builds the options. Missing strategies are reported when the options
    /// are used, not here.
    pub fn build(self) -> AnalysisOptions {
        AnalysisOptions {
            revenue: self.revenue,
            bonus: self.bonus,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(TracingDiagnostics)),
            top_products_limit: self.top_products_limit,
            item_error_policy: self.item_error_policy,
        }
    }
}
