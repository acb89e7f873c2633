//! Per-instrument analysis and watchlist orchestration.

mod analyzer;
mod runner;

pub use analyzer::Analyzer;
pub use runner::BatchRunner;
