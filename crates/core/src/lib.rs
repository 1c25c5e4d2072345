pub mod errors;
pub mod models;
pub mod parsing;
pub mod services;
pub mod sources;

use std::path::Path;
use std::sync::Arc;

use models::{
    allocation::AllocationResult, holding::Holding, performance::PerformanceResult,
    summary::SummaryResult,
};
use services::{
    allocation_service::AllocationService, holdings_loader::HoldingsLoader,
    performance_service::PerformanceService, summary_service::SummaryService,
};
use sources::traits::RowSource;

use errors::CoreError;

/// Main entry point for the Portfolio Insights core library.
///
/// Owns an immutable snapshot of the loaded holdings and answers the four
/// read-only portfolio queries. Nothing mutates the snapshot after
/// construction; clones share it, so one instance can serve any number of
/// concurrent readers without locking.
#[must_use]
#[derive(Clone)]
pub struct PortfolioInsights {
    holdings: Arc<[Holding]>,
}

impl std::fmt::Debug for PortfolioInsights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioInsights")
            .field("holdings", &self.holdings.len())
            .finish()
    }
}

impl PortfolioInsights {
    // ── Loading ─────────────────────────────────────────────────────

    /// Build from raw spreadsheet rows (row 0 is the header).
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, CoreError> {
        let holdings = HoldingsLoader::new().load(rows)?;
        Ok(Self::from_holdings(holdings))
    }

    /// Build from any [`RowSource`].
    pub fn from_source(source: &dyn RowSource) -> Result<Self, CoreError> {
        let holdings = HoldingsLoader::new().load_from_source(source)?;
        Ok(Self::from_holdings(holdings))
    }

    /// Load the portfolio sheet from disk: `.xlsx`/`.xlsm` workbooks (first
    /// worksheet) or a CSV export.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let source = sources::for_path(path.as_ref());
        Self::from_source(&*source)
    }

    /// Wrap holdings that were normalized elsewhere.
    pub fn from_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: holdings.into(),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All holdings, in source row order.
    #[must_use]
    pub fn get_holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Value breakdown by sector and by market-cap tier.
    #[must_use]
    pub fn get_allocation(&self) -> AllocationResult {
        AllocationService::new().allocate(&self.holdings)
    }

    /// Portfolio totals, best/worst performer, diversification and risk.
    #[must_use]
    pub fn get_summary(&self) -> SummaryResult {
        SummaryService::new().summarize(&self.holdings)
    }

    /// Synthetic timeline and horizon returns (placeholder projection).
    #[must_use]
    pub fn get_performance(&self) -> PerformanceResult {
        PerformanceService::new().project(&self.holdings)
    }

    // ── Convenience Helpers ─────────────────────────────────────────

    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
