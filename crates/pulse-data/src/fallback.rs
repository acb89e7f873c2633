//! Fallback chaining of data sources.

use async_trait::async_trait;
use pulse_core::{BarSeries, DataSource};
use tracing::info;

/// Wraps a primary and a fallback source.
///
/// The primary is tried first; the fallback is consulted only when the
/// primary yields nothing usable, so at most two fetches happen per call.
/// This decouples "is the vendor feed reachable" from "can the pipeline
/// still produce a result."
pub struct FallbackSource {
    primary: Box<dyn DataSource>,
    fallback: Box<dyn DataSource>,
}

impl FallbackSource {
    pub fn new(primary: Box<dyn DataSource>, fallback: Box<dyn DataSource>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl DataSource for FallbackSource {
    async fn fetch(&self, symbol: &str) -> Option<BarSeries> {
        match self.primary.fetch(symbol).await {
            Some(series) if !series.is_empty() => Some(series),
            _ => {
                info!(
                    symbol,
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    "primary source empty, trying fallback"
                );
                self.fallback.fetch(symbol).await
            }
        }
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
