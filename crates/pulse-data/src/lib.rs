//! Market data sources.
//!
//! Every source implements [`pulse_core::DataSource`]: absence of data is a
//! value, internal failures are logged and converted to `None` at the
//! source. [`FallbackSource`] chains a primary and a fallback so a down
//! vendor feed degrades to fewer (or synthetic) results instead of aborting
//! the run.

mod csv_source;
mod fallback;
mod http_source;
mod synthetic;

pub use csv_source::CsvDataSource;
pub use fallback::FallbackSource;
pub use http_source::HttpDataSource;
pub use synthetic::SyntheticSource;

/// Normalize an instrument code into an exchange-prefixed vendor symbol.
///
/// Codes already carrying an `sh`/`sz` prefix pass through. A leading `6`
/// means Shanghai, a leading `1` is the fund convention on Shenzhen, and
/// everything else defaults to Shenzhen.
pub fn format_symbol(code: &str) -> String {
    let code = code.trim();

    if code.starts_with("sh") || code.starts_with("sz") {
        return code.to_string();
    }

    match code.chars().next() {
        Some('6') => format!("sh{code}"),
        Some('1') => format!("sz{code}"),
        _ => format!("sz{code}"),
    }
}
