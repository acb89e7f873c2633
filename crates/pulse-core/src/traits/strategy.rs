//! Strategy trait definition.

use crate::types::{BarSeries, Signal};

/// Core strategy trait.
///
/// A strategy inspects a bar series and reports which of its trigger
/// conditions held at the latest bar. Evaluation must be deterministic given
/// the series and the strategy's configuration, and it borrows the series
/// immutably, so strategies sharing one fetch cannot observe each other's
/// intermediate values.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Evaluate the series at its latest bar.
    ///
    /// # Returns
    /// * `Some(signals)` with at least one entry when conditions triggered
    /// * `None` when nothing fired, including when the series is shorter
    ///   than [`min_bars`](Self::min_bars)
    fn evaluate(&self, series: &BarSeries) -> Option<Vec<Signal>>;

    /// Minimum number of bars required before this strategy can produce any
    /// signal. Shorter series make [`evaluate`](Self::evaluate) decline
    /// rather than error.
    fn min_bars(&self) -> usize;

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bar;
    use chrono::NaiveDate;

    struct AlwaysFires;

    impl Strategy for AlwaysFires {
        fn name(&self) -> &str {
            "always_fires"
        }

        fn evaluate(&self, series: &BarSeries) -> Option<Vec<Signal>> {
            if series.len() < self.min_bars() {
                return None;
            }
            Some(vec![Signal::new("fired")])
        }

        fn min_bars(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_declines_below_min_bars() {
        let strategy = AlwaysFires;
        let empty = BarSeries::new("TEST");
        assert!(strategy.evaluate(&empty).is_none());

        let mut series = BarSeries::new("TEST");
        series.push(Bar::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 1.0));
        assert_eq!(strategy.evaluate(&series).unwrap().len(), 1);
    }
}
