//! Validate configuration command.

use anyhow::Result;
use pulse_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Watchlist size: {}", config.watchlist.len());
            println!("Primary data source: {}", config.data_source.primary);
            println!(
                "Strategies enabled: {}",
                config.strategies.iter().filter(|s| s.enabled).count()
            );
            println!(
                "Notifications: {}",
                if !config.notification.enabled {
                    "disabled"
                } else if config.notification.webhook_url.is_some() {
                    "webhook"
                } else {
                    "log only"
                }
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
