//! Configuration structures.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Ordered instrument codes to evaluate each run
    #[serde(default)]
    pub watchlist: Vec<String>,
    #[serde(default)]
    pub data_source: DataSourceSettings,
    #[serde(default)]
    pub strategies: Vec<StrategySettings>,
    #[serde(default)]
    pub notification: NotificationSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "marketpulse".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Data source selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceSettings {
    /// `synthetic`, `http`, or `csv`; non-synthetic primaries are wrapped
    /// in a fallback chain ending at the synthetic source
    pub primary: String,
    /// Vendor endpoint for the `http` primary
    pub base_url: String,
    /// Per-request timeout for the `http` primary
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Directory of `{symbol}.csv` files for the `csv` primary
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Default for DataSourceSettings {
    fn default() -> Self {
        Self {
            primary: "synthetic".to_string(),
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: default_timeout_secs(),
            data_dir: None,
        }
    }
}

/// One strategy entry: identifier, enabled flag, and free-form parameters
/// that the strategy's own constructor interprets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySettings {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Notification delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Deliver via HTTP POST when set; log-only otherwise
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
