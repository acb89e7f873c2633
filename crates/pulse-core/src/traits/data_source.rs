//! Data source trait definition.

use crate::types::BarSeries;
use async_trait::async_trait;

/// Trait for daily bar sources.
///
/// Absence of data is a valid, non-error outcome: a source that cannot
/// produce a series for any reason (unknown symbol, network failure,
/// malformed vendor payload) logs what happened and returns `None`. Callers
/// never see a source's internal failure as an error.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the daily series for a symbol, oldest bar first.
    ///
    /// # Returns
    /// * `Some(series)` when the source produced usable data
    /// * `None` when no data is available
    async fn fetch(&self, symbol: &str) -> Option<BarSeries>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
