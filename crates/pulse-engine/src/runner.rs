//! Watchlist orchestration.

use crate::Analyzer;
use chrono::Utc;
use pulse_config::AppConfig;
use pulse_core::{AnalysisResult, Notifier, RunSummary};
use pulse_strategies::StrategyRegistry;
use tracing::{error, info, warn};

/// Runs the whole watchlist once: analyze every instrument, forward each
/// triggering result to the notifier, and log an aggregate summary.
pub struct BatchRunner {
    watchlist: Vec<String>,
    analyzer: Analyzer,
    notifier: Box<dyn Notifier>,
    notifications_enabled: bool,
}

impl BatchRunner {
    pub fn new(
        watchlist: Vec<String>,
        analyzer: Analyzer,
        notifier: Box<dyn Notifier>,
        notifications_enabled: bool,
    ) -> Self {
        Self {
            watchlist,
            analyzer,
            notifier,
            notifications_enabled,
        }
    }

    /// Wire a runner entirely from configuration.
    pub fn from_config(config: &AppConfig, registry: &StrategyRegistry) -> Self {
        Self {
            watchlist: config.watchlist.clone(),
            analyzer: Analyzer::from_config(config, registry),
            notifier: pulse_notify::from_config(&config.notification),
            notifications_enabled: config.notification.enabled,
        }
    }

    /// Execute one run.
    ///
    /// `triggered` counts strategy firings; a failed delivery changes
    /// nothing in the summary.
    pub async fn run(&self) -> RunSummary {
        if self.watchlist.is_empty() {
            warn!("watchlist is empty, nothing to analyze");
            return RunSummary::empty();
        }

        info!(total = self.watchlist.len(), "starting watchlist run");

        let results = self.analyzer.analyze_batch(&self.watchlist).await;

        for result in &results {
            if !self.notifications_enabled {
                continue;
            }
            let (subject, body) = build_notification(result);
            if !self.notifier.notify(&subject, &body).await {
                error!(symbol = %result.symbol, "notification delivery failed");
            }
        }

        self.log_summary(&results);

        RunSummary {
            total: self.watchlist.len(),
            triggered: results.len(),
            results,
            timestamp: Utc::now(),
        }
    }

    fn log_summary(&self, results: &[AnalysisResult]) {
        info!(
            watched = self.watchlist.len(),
            triggered = results.len(),
            "watchlist run complete"
        );
        for result in results {
            info!(
                symbol = %result.symbol,
                date = %result.date,
                price = result.price,
                signals = result.signals.len(),
                "triggered"
            );
        }
    }
}

/// Build the notification payload for one triggering result.
fn build_notification(result: &AnalysisResult) -> (String, String) {
    let subject = format!("[MarketPulse] strategy triggered: {}", result.symbol);

    let mut body = format!(
        "Instrument: {}\nTrade date: {}\nPrice: {:.2}\n\nTriggered signals:\n",
        result.symbol, result.date, result.price
    );
    for signal in &result.signals {
        body.push_str(&format!("  - {signal}\n"));
    }
    body.push_str(&format!(
        "\nGenerated at: {}\n",
        result.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pulse_core::{DataSource, Signal};
    use pulse_data::SyntheticSource;
    use pulse_indicators::Sma;
    use pulse_strategies::{MaBreakdownConfig, MaBreakdownStrategy};
    use std::sync::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<(String, String)>>>,
        succeed: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, subject: &str, body: &str) -> bool {
            self.sent
                .lock()
                .unwrap()
                .push((subject.to_string(), body.to_string()));
            self.succeed
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn ma5_analyzer() -> Analyzer {
        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig {
            periods: vec![5],
            messages: Default::default(),
        });
        Analyzer::new(Box::new(SyntheticSource::new()), vec![Box::new(strategy)])
    }

    #[tokio::test]
    async fn test_empty_watchlist() {
        let runner = BatchRunner::new(
            vec![],
            ma5_analyzer(),
            Box::new(RecordingNotifier::default()),
            true,
        );

        let summary = runner.run().await;
        assert_eq!(summary.total, 0);
        assert_eq!(summary.triggered, 0);
        assert!(summary.results.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_synthetic_run() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let watchlist = vec!["A".to_string(), "B".to_string()];

        let runner = BatchRunner::new(
            watchlist.clone(),
            ma5_analyzer(),
            Box::new(RecordingNotifier {
                sent: sent.clone(),
                succeed: true,
            }),
            true,
        );

        let summary = runner.run().await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.triggered, summary.results.len());
        assert!(summary.triggered <= 2);

        // Every triggered price is strictly below its own 5-day average,
        // recomputed here from the deterministic synthetic series.
        let source = SyntheticSource::new();
        let sma = Sma::new(5);
        for result in &summary.results {
            let series = source.fetch(&result.symbol).await.unwrap();
            let average = sma.latest(&series.closes()).unwrap();
            assert!(result.price < average);
            assert_eq!(result.price, series.last().unwrap().close);
        }

        // One notification per triggering result
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), summary.triggered);
        for ((subject, body), result) in sent.iter().zip(&summary.results) {
            assert!(subject.contains(&result.symbol));
            assert!(body.contains("Triggered signals"));
            assert!(body.contains(&format!("{:.2}", result.price)));
        }
    }

    #[tokio::test]
    async fn test_run_is_deterministic() {
        let first = BatchRunner::new(
            vec!["A".to_string(), "B".to_string()],
            ma5_analyzer(),
            Box::new(RecordingNotifier::default()),
            false,
        )
        .run()
        .await;

        let second = BatchRunner::new(
            vec!["A".to_string(), "B".to_string()],
            ma5_analyzer(),
            Box::new(RecordingNotifier::default()),
            false,
        )
        .run()
        .await;

        assert_eq!(first.triggered, second.triggered);
        let prices = |s: &RunSummary| s.results.iter().map(|r| r.price).collect::<Vec<_>>();
        assert_eq!(prices(&first), prices(&second));
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_change_summary() {
        // A source guaranteed to trigger: strictly decreasing closes.
        struct FallingSource;

        #[async_trait]
        impl DataSource for FallingSource {
            async fn fetch(&self, symbol: &str) -> Option<pulse_core::BarSeries> {
                let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                let bars = (0..10)
                    .map(|i| pulse_core::Bar::new(start + chrono::Duration::days(i), 50.0 - i as f64))
                    .collect();
                Some(pulse_core::BarSeries::from_bars(symbol, bars))
            }

            fn name(&self) -> &str {
                "falling"
            }
        }

        let strategy = MaBreakdownStrategy::new(MaBreakdownConfig {
            periods: vec![5],
            messages: Default::default(),
        });
        let analyzer = Analyzer::new(Box::new(FallingSource), vec![Box::new(strategy)]);

        let sent = Arc::new(Mutex::new(Vec::new()));
        let runner = BatchRunner::new(
            vec!["X".to_string()],
            analyzer,
            Box::new(RecordingNotifier {
                sent: sent.clone(),
                succeed: false,
            }),
            true,
        );

        let summary = runner.run().await;

        assert_eq!(summary.triggered, 1);
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_notifications_skip_dispatch() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let runner = BatchRunner::new(
            vec!["A".to_string(), "B".to_string()],
            ma5_analyzer(),
            Box::new(RecordingNotifier {
                sent: sent.clone(),
                succeed: true,
            }),
            false,
        );

        let summary = runner.run().await;
        assert_eq!(summary.total, 2);
        assert!(sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_notification_body_lists_signals() {
        let result = AnalysisResult {
            symbol: "600519".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            price: 9.87,
            signals: vec![
                Signal::new("below the 5-day average"),
                Signal::new("below the 20-day average"),
            ],
            generated_at: Utc::now(),
        };

        let (subject, body) = build_notification(&result);

        assert_eq!(subject, "[MarketPulse] strategy triggered: 600519");
        assert!(body.contains("Price: 9.87"));
        assert!(body.contains("2024-01-15"));
        assert!(body.contains("  - below the 5-day average"));
        assert!(body.contains("  - below the 20-day average"));
    }
}
