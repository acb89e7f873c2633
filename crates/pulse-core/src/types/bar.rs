//! Daily bar data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily price observation.
///
/// Only the close is mandatory; vendor feeds frequently omit the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trade date
    pub date: NaiveDate,
    /// Opening price
    pub open: Option<f64>,
    /// Highest price
    pub high: Option<f64>,
    /// Lowest price
    pub low: Option<f64>,
    /// Closing price
    pub close: f64,
}

impl Bar {
    /// Create a bar with only a close price.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
        }
    }

    /// Attach open/high/low prices.
    pub fn with_ohl(mut self, open: f64, high: f64, low: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self
    }
}

/// Time-series container for one instrument's bars, ordered oldest first.
///
/// A series is an immutable snapshot once a source hands it out; strategies
/// only ever borrow it, so derived values computed during evaluation cannot
/// leak between strategies sharing the same fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Instrument code
    pub symbol: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Create a new empty series.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Create a series from pre-sorted bars.
    pub fn from_bars(symbol: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// Append a bar.
    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series holds no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The most recent bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Iterate over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Sort bars ascending by date. Sources call this before handing the
    /// series out; vendors do not always return rows in order.
    pub fn sort_by_date(&mut self) {
        self.bars.sort_by_key(|b| b.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_bar_construction() {
        let bar = Bar::new(d(15), 10.5).with_ohl(10.0, 11.0, 9.8);

        assert_eq!(bar.close, 10.5);
        assert_eq!(bar.open, Some(10.0));
        assert_eq!(bar.high, Some(11.0));
        assert_eq!(bar.low, Some(9.8));
    }

    #[test]
    fn test_series_closes_and_last() {
        let mut series = BarSeries::new("600519");
        series.push(Bar::new(d(1), 100.5));
        series.push(Bar::new(d(2), 101.5));

        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.last().unwrap().date, d(2));
    }

    #[test]
    fn test_series_sort_by_date() {
        let mut series = BarSeries::from_bars(
            "600519",
            vec![Bar::new(d(3), 3.0), Bar::new(d(1), 1.0), Bar::new(d(2), 2.0)],
        );
        series.sort_by_date();

        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = BarSeries::new("000001");
        assert!(series.is_empty());
        assert!(series.last().is_none());
    }
}
