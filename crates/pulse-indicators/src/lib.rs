//! Technical indicators for signal strategies.
//!
//! Currently only the simple moving average, which is all the built-in
//! breakdown strategy needs.

pub mod moving_average;

pub use moving_average::Sma;
