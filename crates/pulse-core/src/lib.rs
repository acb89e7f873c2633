//! Core types and traits for the watchlist scanner.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries)
//! - Signals and analysis results
//! - Core traits for data sources, strategies, and notifiers

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, PulseError, PulseResult, StrategyError};
pub use traits::*;
pub use types::*;
