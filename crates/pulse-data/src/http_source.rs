//! HTTP vendor API data source.

use crate::format_symbol;
use async_trait::async_trait;
use chrono::NaiveDate;
use pulse_core::{Bar, BarSeries, DataError, DataSource};
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info, warn};

/// Vendor record with the column-name drift we have seen in the wild.
/// The alias table is the canonical mapping; it lives here and nowhere else
/// so vendor naming never leaks into [`BarSeries`].
#[derive(Debug, Deserialize)]
struct VendorBar {
    #[serde(alias = "trade_date", alias = "日期")]
    date: String,
    #[serde(alias = "open_price", alias = "开盘", default)]
    open: Option<f64>,
    #[serde(alias = "high_price", alias = "最高", default)]
    high: Option<f64>,
    #[serde(alias = "low_price", alias = "最低", default)]
    low: Option<f64>,
    #[serde(alias = "close_price", alias = "收盘")]
    close: f64,
}

/// Fetches daily bars from a vendor HTTP endpoint serving JSON arrays.
///
/// Any fetch, network, or parse failure is logged and surfaces as absent
/// data; the fallback chain decides what happens next.
pub struct HttpDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    /// Create a source against the given base URL with a bounded timeout.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn fetch_inner(&self, symbol: &str) -> Result<BarSeries, DataError> {
        let vendor_symbol = format_symbol(symbol);
        let url = format!(
            "{}/daily?symbol={}",
            self.base_url.trim_end_matches('/'),
            vendor_symbol
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DataError::ConnectionError(format!(
                "vendor returned HTTP {}",
                response.status()
            )));
        }

        let records: Vec<VendorBar> = response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        if records.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        let mut series = BarSeries::new(symbol);
        for record in records {
            let date = parse_trade_date(&record.date)?;
            let mut bar = Bar::new(date, record.close);
            bar.open = record.open;
            bar.high = record.high;
            bar.low = record.low;
            series.push(bar);
        }
        series.sort_by_date();

        Ok(series)
    }
}

/// Parse the date formats vendors actually send.
fn parse_trade_date(raw: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }

    Err(DataError::ParseError(format!(
        "could not parse trade date: {raw}"
    )))
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, symbol: &str) -> Option<BarSeries> {
        info!(symbol, source = self.name(), "fetching daily bars");

        match self.fetch_inner(symbol).await {
            Ok(series) => Some(series),
            Err(DataError::NoDataAvailable) => {
                warn!(symbol, "vendor returned no rows");
                None
            }
            Err(e) => {
                error!(symbol, error = %e, "vendor fetch failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
