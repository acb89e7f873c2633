//! List strategies command.

use anyhow::Result;
use pulse_strategies::StrategyRegistry;

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for (id, description) in registry.list() {
        println!("  {id}");
        println!("  ───────────────────────────────────────────────────────");
        println!("  {description}");
        println!();
    }

    println!("Enable a strategy by adding a [[strategies]] entry with its id.");

    Ok(())
}
