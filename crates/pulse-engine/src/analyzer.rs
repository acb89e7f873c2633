//! Per-instrument analysis.

use chrono::Utc;
use pulse_config::{AppConfig, DataSourceSettings};
use pulse_core::{AnalysisResult, DataSource, Strategy};
use pulse_data::{CsvDataSource, FallbackSource, HttpDataSource, SyntheticSource};
use pulse_strategies::StrategyRegistry;
use tracing::{debug, info, warn};

/// Orchestrates one data source and the configured strategies for a single
/// instrument at a time.
///
/// Every fallible step below the analyzer is already expressed as an
/// `Option`, so one bad instrument can only ever mean "no result here" and
/// the surrounding batch keeps going.
pub struct Analyzer {
    source: Box<dyn DataSource>,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Analyzer {
    pub fn new(source: Box<dyn DataSource>, strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { source, strategies }
    }

    /// Build an analyzer from configuration: select the data source, then
    /// instantiate every enabled strategy via the registry in config order.
    /// Unknown or misconfigured strategies are skipped with a warning.
    pub fn from_config(config: &AppConfig, registry: &StrategyRegistry) -> Self {
        let source = build_source(&config.data_source);

        let strategies = config
            .strategies
            .iter()
            .filter(|s| s.enabled)
            .filter_map(|s| registry.create(&s.id, &s.params))
            .collect();

        Self { source, strategies }
    }

    /// Number of active strategies.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Analyze a single instrument.
    ///
    /// Fetches the series, evaluates every strategy in order, and builds a
    /// result from the latest bar when at least one signal fired. Absent or
    /// empty data, and runs where nothing triggered, yield `None`.
    pub async fn analyze(&self, symbol: &str) -> Option<AnalysisResult> {
        info!(symbol, "analyzing instrument");

        let series = match self.source.fetch(symbol).await {
            Some(series) if !series.is_empty() => series,
            _ => {
                warn!(symbol, "no data available");
                return None;
            }
        };

        // Signals concatenate in strategy order, window order within a
        // strategy.
        let mut signals = Vec::new();
        for strategy in &self.strategies {
            if let Some(mut fired) = strategy.evaluate(&series) {
                debug!(symbol, strategy = strategy.name(), count = fired.len(), "signals fired");
                signals.append(&mut fired);
            }
        }

        if signals.is_empty() {
            info!(symbol, "no signals triggered");
            return None;
        }

        let latest = series.last()?;
        Some(AnalysisResult {
            symbol: symbol.to_string(),
            date: latest.date,
            price: latest.close,
            signals,
            generated_at: Utc::now(),
        })
    }

    /// Analyze each symbol in order, omitting those without a result.
    /// Repeated symbols are analyzed repeatedly; no deduplication happens
    /// here.
    pub async fn analyze_batch(&self, symbols: &[String]) -> Vec<AnalysisResult> {
        let mut results = Vec::new();

        for symbol in symbols {
            if let Some(result) = self.analyze(symbol).await {
                results.push(result);
            }
        }

        results
    }
}

fn build_source(settings: &DataSourceSettings) -> Box<dyn DataSource> {
    match settings.primary.as_str() {
        "http" => Box::new(FallbackSource::new(
            Box::new(HttpDataSource::new(&settings.base_url, settings.timeout_secs)),
            Box::new(SyntheticSource::new()),
        )),
        "csv" => {
            let dir = settings.data_dir.clone().unwrap_or_else(|| "data".to_string());
            Box::new(FallbackSource::new(
                Box::new(CsvDataSource::new(dir)),
                Box::new(SyntheticSource::new()),
            ))
        }
        "synthetic" => Box::new(SyntheticSource::new()),
        other => {
            warn!(primary = other, "unknown data source, using synthetic");
            Box::new(SyntheticSource::new())
        }
    }
}
