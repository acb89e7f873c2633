//! Strategy signals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A textual notice that a strategy's trigger condition held at the latest
/// bar. Severity lives in the message text itself (a 20-day breakdown reads
/// differently from a 5-day one); no separate tier type is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Human-readable description of what fired.
    pub message: String,
}

impl Signal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
