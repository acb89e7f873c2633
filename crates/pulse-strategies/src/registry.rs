//! Strategy registry.

use crate::{MaBreakdownConfig, MaBreakdownStrategy};
use pulse_core::{error::StrategyError, Strategy};
use std::collections::HashMap;
use tracing::warn;

/// Constructor producing a configured strategy from its raw parameter value.
pub type StrategyCtor =
    Box<dyn Fn(&serde_json::Value) -> Result<Box<dyn Strategy>, StrategyError> + Send + Sync>;

struct Entry {
    description: String,
    ctor: StrategyCtor,
}

/// Maps strategy identifiers to constructors.
///
/// An explicit object rather than an ambient global: the caller builds one,
/// optionally registers extensions, and hands it to whatever constructs
/// analyzers. Registration is append-or-overwrite only.
pub struct StrategyRegistry {
    entries: HashMap<String, Entry>,
}

impl StrategyRegistry {
    /// Create a registry seeded with the built-in strategies.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };

        registry.register(
            "ma_breakdown",
            "Flags instruments whose latest close fell below configured moving averages",
            |params| {
                let config = parse_params::<MaBreakdownConfig>(params)?;
                config.validate()?;
                Ok(Box::new(MaBreakdownStrategy::new(config)))
            },
        );

        registry
    }

    /// Add or overwrite a strategy constructor.
    pub fn register(
        &mut self,
        id: &str,
        description: &str,
        ctor: impl Fn(&serde_json::Value) -> Result<Box<dyn Strategy>, StrategyError>
            + Send
            + Sync
            + 'static,
    ) {
        self.entries.insert(
            id.to_string(),
            Entry {
                description: description.to_string(),
                ctor: Box::new(ctor),
            },
        );
    }

    /// Create a configured strategy instance.
    ///
    /// Unknown identifiers and constructor failures are warnings, not
    /// errors: the caller simply skips the strategy for this run.
    pub fn create(&self, id: &str, params: &serde_json::Value) -> Option<Box<dyn Strategy>> {
        let Some(entry) = self.entries.get(id) else {
            warn!(strategy = id, "unknown strategy, skipping");
            return None;
        };

        match (entry.ctor)(params) {
            Ok(strategy) => Some(strategy),
            Err(e) => {
                warn!(strategy = id, error = %e, "failed to construct strategy, skipping");
                None
            }
        }
    }

    /// Check if a strategy id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All registered ids with their descriptions, sorted by id.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(id, entry)| (id.as_str(), entry.description.as_str()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize strategy parameters, treating an omitted value as "all
/// defaults".
fn parse_params<T>(params: &serde_json::Value) -> Result<T, StrategyError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params.clone())
        .map_err(|e| StrategyError::InvalidConfig(e.to_string()))
}
