use anyhow::{Context, Result};
use ess_logic::{run_until, Census, LogReporter, Population};
use std::{thread, time::Duration};

use crate::config::ArenaConfig;

/// Evolve a mixed population until the generation bound or extinction.
pub fn run(config: &ArenaConfig) -> Result<()> {
    let strategies = config.strategies()?;
    let mut rng = config.rng();
    let pace = Duration::from_millis(config.pace_ms);

    let mut population =
        Population::seed(&strategies, config.lifecycle()).context("failed to seed population")?;

    run_until(&mut population, &mut rng, &mut LogReporter, |census| {
        let stop = should_stop(census, config.generations);
        if !stop && census.generation > 0 && !pace.is_zero() {
            thread::sleep(pace);
        }
        stop
    })
    .context("simulation failed")?;

    let census = population.census();
    if census.is_extinct() {
        log::info!("population extinct after {} generations", census.generation);
    } else {
        log::info!("final {census}");
    }
    Ok(())
}

fn should_stop(census: &Census, generations: Option<u64>) -> bool {
    if census.is_extinct() {
        return true;
    }
    generations.is_some_and(|limit| census.generation >= limit)
}
