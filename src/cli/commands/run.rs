//! Run command implementation.

use anyhow::{Context, Result};
use pulse_config::load_config;
use pulse_engine::BatchRunner;
use pulse_strategies::StrategyRegistry;
use std::path::Path;
use tracing::info;

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config_path: &Path) -> Result<()> {
    // The one fatal error class: no config means no watchlist and no
    // strategy set.
    let mut config = load_config(config_path)
        .with_context(|| format!("failed to load configuration from {config_path:?}"))?;

    if let Some(symbols) = args.symbols {
        config.watchlist = symbols;
    }
    if let Some(source) = args.source {
        config.data_source.primary = source;
    }

    info!(
        watchlist = config.watchlist.len(),
        source = %config.data_source.primary,
        "starting run"
    );

    let registry = StrategyRegistry::new();
    let runner = BatchRunner::from_config(&config, &registry);
    let summary = runner.run().await;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => {
            println!(
                "Analyzed {} instruments, {} triggered.",
                summary.total, summary.triggered
            );
            for result in &summary.results {
                println!();
                println!("  {}: {} @ {:.2}", result.symbol, result.date, result.price);
                for signal in &result.signals {
                    println!("    - {signal}");
                }
            }
        }
    }

    Ok(())
}
