//! Deterministic synthetic data source.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use pulse_core::{Bar, BarSeries, DataSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Number of daily bars each synthetic series contains.
const SERIES_LEN: usize = 60;

/// Generates a smooth random walk around a per-symbol base price.
///
/// The generator is seeded from a stable hash of the symbol, so repeated
/// fetches for the same symbol produce bit-identical series within a process
/// and across processes. Used both as a test fixture and as the terminal
/// fallback when real feeds are unreachable.
pub struct SyntheticSource;

impl SyntheticSource {
    pub fn new() -> Self {
        Self
    }

    /// FNV-1a, chosen over `DefaultHasher` because its output must not vary
    /// between processes.
    fn stable_hash(symbol: &str) -> u64 {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in symbol.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash
    }

    fn generate(&self, symbol: &str) -> BarSeries {
        let seed = Self::stable_hash(symbol);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let base_price = 10.0 + (seed % 100) as f64 / 10.0;
        let end = Utc::now().date_naive();

        let mut bars = Vec::with_capacity(SERIES_LEN);
        let mut price = base_price;
        let mut prev_close = base_price;

        for i in 0..SERIES_LEN {
            price += rng.gen_range(-0.5..=0.5);
            let date = end - Duration::days((SERIES_LEN - 1 - i) as i64);
            let close = price.max(0.01);

            let open = prev_close;
            let high = open.max(close) + 0.05;
            let low = open.min(close) - 0.05;
            bars.push(Bar::new(date, close).with_ohl(open, high, low));

            prev_close = close;
        }

        BarSeries::from_bars(symbol, bars)
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for SyntheticSource {
    async fn fetch(&self, symbol: &str) -> Option<BarSeries> {
        info!(symbol, "generating synthetic series");
        Some(self.generate(symbol))
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}
