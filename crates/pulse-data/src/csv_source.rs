//! CSV directory data source.

use async_trait::async_trait;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use pulse_core::{Bar, BarSeries, DataError, DataSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// CSV record format, tolerant of the usual header spellings.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "trade_date")]
    date: String,
    #[serde(alias = "Open", alias = "open", default)]
    open: Option<f64>,
    #[serde(alias = "High", alias = "high", default)]
    high: Option<f64>,
    #[serde(alias = "Low", alias = "low", default)]
    low: Option<f64>,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
}

/// Reads `{symbol}.csv` files from a local directory.
///
/// Useful for running the scanner against exported or captured data without
/// touching a vendor. A missing file is absent data, not an error.
pub struct CsvDataSource {
    dir: PathBuf,
}

impl CsvDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn candidate_paths(&self, symbol: &str) -> Vec<PathBuf> {
        vec![
            self.dir.join(format!("{symbol}.csv")),
            self.dir.join(format!("{}.csv", symbol.to_lowercase())),
        ]
    }

    fn load_from_path(&self, symbol: &str, path: &Path) -> Result<BarSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut series = BarSeries::new(symbol);

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let date = parse_date(&record.date)?;

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

/// Parse various date formats seen in exported files.
fn parse_date(raw: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }

    Err(DataError::ParseError(format!("could not parse date: {raw}")))
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn fetch(&self, symbol: &str) -> Option<BarSeries> {
        let path = self
            .candidate_paths(symbol)
            .into_iter()
            .find(|p| p.exists())?;

        info!(symbol, path = %path.display(), "loading bars from CSV");

        match self.load_from_path(symbol, &path) {
            Ok(series) if !series.is_empty() => Some(series),
            Ok(_) => {
                warn!(symbol, "CSV file contained no rows");
                None
            }
            Err(e) => {
                warn!(symbol, error = %e, "failed to read CSV file");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "csv"
    }
}
