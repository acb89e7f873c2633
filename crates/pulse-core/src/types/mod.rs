//! Core data types.

mod bar;
mod result;
mod signal;

pub use bar::{Bar, BarSeries};
pub use result::{AnalysisResult, RunSummary};
pub use signal::Signal;
