//! Signal strategy implementations.
//!
//! Built-in strategies plus the registry that maps strategy identifiers to
//! constructors. Downstream code extends the scanner by registering new
//! constructors before building an analyzer; the core never needs to change.

mod ma_breakdown;
mod registry;

pub use ma_breakdown::{MaBreakdownConfig, MaBreakdownStrategy};
pub use registry::{StrategyCtor, StrategyRegistry};
