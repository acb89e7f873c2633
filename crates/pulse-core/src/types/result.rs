//! Analysis results and run summaries.

use super::Signal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of analyzing one instrument, built only when at least one
/// signal fired. "No trigger" is the absence of a result, never an empty
/// signal list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Instrument code
    pub symbol: String,
    /// Trade date of the evaluated bar
    pub date: NaiveDate,
    /// Close price of the evaluated bar
    pub price: f64,
    /// Signals in strategy order, window order within a strategy
    pub signals: Vec<Signal>,
    /// When this result was generated
    pub generated_at: DateTime<Utc>,
}

/// Aggregate outcome of one watchlist run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Watchlist size
    pub total: usize,
    /// Number of instruments whose strategies fired. Counts firings, not
    /// delivery outcomes.
    pub triggered: usize,
    /// Triggering results in watchlist order
    pub results: Vec<AnalysisResult>,
    /// When the run completed
    pub timestamp: DateTime<Utc>,
}

impl RunSummary {
    /// Summary for a run with nothing to do.
    pub fn empty() -> Self {
        Self {
            total: 0,
            triggered: 0,
            results: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}
