//! Moving-average breakdown strategy.
//!
//! Flags instruments whose latest close fell below one or more trailing
//! simple moving averages. Each configured window is checked independently,
//! so a sharp drop can fire the 5-, 10-, and 20-day signals at once.

use pulse_core::{error::StrategyError, BarSeries, Signal, Strategy};
use pulse_indicators::Sma;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_periods() -> Vec<usize> {
    vec![5, 10, 20]
}

/// Configuration for the MA breakdown strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaBreakdownConfig {
    /// Window lengths to check, each evaluated independently
    #[serde(default = "default_periods")]
    pub periods: Vec<usize>,
    /// Optional per-window message templates keyed `break_ma{n}`;
    /// `{price}` and `{ma}` are interpolated with two-decimal values
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Default for MaBreakdownConfig {
    fn default() -> Self {
        Self {
            periods: default_periods(),
            messages: HashMap::new(),
        }
    }
}

impl MaBreakdownConfig {
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.periods.is_empty() {
            return Err(StrategyError::InvalidConfig(
                "At least one period required".into(),
            ));
        }
        if self.periods.contains(&0) {
            return Err(StrategyError::InvalidConfig(
                "Periods must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Moving-average breakdown strategy.
pub struct MaBreakdownStrategy {
    config: MaBreakdownConfig,
}

impl MaBreakdownStrategy {
    pub fn new(config: MaBreakdownConfig) -> Self {
        Self { config }
    }

    fn message_for(&self, period: usize, price: f64, ma: f64) -> String {
        match self.config.messages.get(&format!("break_ma{period}")) {
            Some(template) => template
                .replace("{price}", &format!("{price:.2}"))
                .replace("{ma}", &format!("{ma:.2}")),
            None => format!(
                "Price ({price:.2}) broke below the {period}-day moving average ({ma:.2})"
            ),
        }
    }
}

impl Strategy for MaBreakdownStrategy {
    fn name(&self) -> &str {
        "ma_breakdown"
    }

    fn description(&self) -> &str {
        "Flags instruments whose latest close fell below configured moving averages"
    }

    fn evaluate(&self, series: &BarSeries) -> Option<Vec<Signal>> {
        let latest = series.last()?;
        let closes = series.closes();

        let mut signals = Vec::new();

        for &period in &self.config.periods {
            // Windows longer than the series have no defined average yet
            let Some(ma) = Sma::new(period).latest(&closes) else {
                continue;
            };

            if latest.close < ma {
                signals.push(Signal::new(self.message_for(period, latest.close, ma)));
            }
        }

        if signals.is_empty() {
            None
        } else {
            Some(signals)
        }
    }

    fn min_bars(&self) -> usize {
        self.config.periods.iter().copied().min().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pulse_core::Bar;

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar::new(start + chrono::Duration::days(i as i64), close))
            .collect();
        BarSeries::from_bars("TEST", bars)
    }

    #[test]
    fn test_strictly_decreasing_fires_all_windows() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 - i as f64).collect();
        let series = series_from_closes(&closes);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig::default());
        let signals = strategy.evaluate(&series).unwrap();

        assert_eq!(signals.len(), 3);
        assert!(signals[0].message.contains("5-day"));
        assert!(signals[1].message.contains("10-day"));
        assert!(signals[2].message.contains("20-day"));
    }

    #[test]
    fn test_rising_series_is_quiet() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig::default());
        assert!(strategy.evaluate(&series).is_none());
    }

    #[test]
    fn test_short_series_declines() {
        let series = series_from_closes(&[100.0, 99.0, 98.0]);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig::default());
        assert!(strategy.evaluate(&series).is_none());
    }

    #[test]
    fn test_partial_windows_evaluated_independently() {
        // 7 bars: the 5-day window is defined, the 10- and 20-day are not
        let closes: Vec<f64> = (0..7).map(|i| 100.0 - i as f64).collect();
        let series = series_from_closes(&closes);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig::default());
        let signals = strategy.evaluate(&series).unwrap();

        assert_eq!(signals.len(), 1);
        assert!(signals[0].message.contains("5-day"));
    }

    #[test]
    fn test_close_equal_to_average_does_not_fire() {
        let series = series_from_closes(&[10.0, 10.0, 10.0, 10.0, 10.0]);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig {
            periods: vec![5],
            messages: HashMap::new(),
        });
        assert!(strategy.evaluate(&series).is_none());
    }

    #[test]
    fn test_override_template_interpolation() {
        let mut messages = HashMap::new();
        messages.insert(
            "break_ma5".to_string(),
            "ALERT {price} under MA5 {ma}".to_string(),
        );

        let closes: Vec<f64> = (0..6).map(|i| 100.0 - i as f64 * 2.0).collect();
        let series = series_from_closes(&closes);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig {
            periods: vec![5],
            messages,
        });
        let signals = strategy.evaluate(&series).unwrap();

        assert_eq!(signals[0].message, "ALERT 90.00 under MA5 94.00");
    }

    #[test]
    fn test_signal_values_formatted_two_decimals() {
        let closes = vec![10.123, 10.456, 10.789, 10.321, 9.018];
        let series = series_from_closes(&closes);

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig {
            periods: vec![5],
            messages: HashMap::new(),
        });
        let signals = strategy.evaluate(&series).unwrap();

        assert!(signals[0].message.contains("9.02"));
        assert!(signals[0].message.contains("10.14"));
    }

    #[test]
    fn test_config_validation() {
        assert!(MaBreakdownConfig::default().validate().is_ok());

        let empty = MaBreakdownConfig {
            periods: vec![],
            messages: HashMap::new(),
        };
        assert!(empty.validate().is_err());

        let zero = MaBreakdownConfig {
            periods: vec![5, 0],
            messages: HashMap::new(),
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_min_bars_is_smallest_window() {
        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig::default());
        assert_eq!(strategy.min_bars(), 5);
    }
}
