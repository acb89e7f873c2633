//! Configuration management.
//!
//! Loads a TOML file plus `PULSE__`-prefixed environment overrides. A
//! missing or malformed file is the one fatal error class in the system:
//! without configuration there is no watchlist and no strategy set.

mod settings;

pub use settings::{
    AppConfig, AppSettings, DataSourceSettings, LoggingConfig, NotificationSettings,
    StrategySettings,
};

use config::{Config, ConfigError, Environment, File, FileFormat};
use std::path::Path;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("PULSE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Load configuration from an in-memory TOML string. Test seam.
pub fn load_config_from_str(toml: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?;

    config.try_deserialize()
}
