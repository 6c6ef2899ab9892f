use anyhow::{Context, Result};
use ess_logic::{describe_strategy, Strategy};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StrategyInfo {
    id: &'static str,
    name: &'static str,
    description: String,
}

fn registry_info() -> Vec<StrategyInfo> {
    Strategy::registry()
        .iter()
        .map(|strategy| StrategyInfo {
            id: strategy.base.id(),
            name: strategy.name(),
            description: describe_strategy(strategy),
        })
        .collect()
}

/// Print every available species.
pub fn run(json: bool) -> Result<()> {
    let info = registry_info();

    if json {
        let out = serde_json::to_string_pretty(&info).context("failed to serialize strategies")?;
        println!("{out}");
        return Ok(());
    }

    for entry in &info {
        println!("{:<22}{:<24}{}", entry.id, entry.name, entry.description);
    }
    Ok(())
}
