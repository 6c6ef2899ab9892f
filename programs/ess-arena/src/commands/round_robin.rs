use anyhow::{Context, Result};
use ess_logic::{play_round_robin, LogReporter, Standings};

use crate::config::ArenaConfig;

/// Play every configured species against every other and print the table.
pub fn run(config: &ArenaConfig, json: bool) -> Result<()> {
    let strategies = config.strategies()?;
    let rounds = config.round_config()?;
    let mut rng = config.rng();

    let standings = play_round_robin(&strategies, &rounds, &mut rng, &mut LogReporter)
        .context("round robin failed")?;

    if json {
        let out = serde_json::to_string_pretty(&standings).context("failed to serialize standings")?;
        println!("{out}");
    } else {
        print!("{}", render(&standings));
    }
    Ok(())
}

/// One `"<name>: <n> points"` line per species, best first.
fn render(standings: &Standings) -> String {
    standings
        .ranked()
        .iter()
        .map(|standing| format!("{}: {} points\n", standing.name, standing.score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ess_logic::{NullReporter, RoundConfig, SeededRng, Strategy, StrategyBase};

    #[test]
    fn test_render_ranked_table() {
        let strategies = [
            Strategy::new(StrategyBase::AlwaysCooperate),
            Strategy::new(StrategyBase::AlwaysDefect),
        ];
        let standings = play_round_robin(
            &strategies,
            &RoundConfig::new(2).unwrap(),
            &mut SeededRng::new(1),
            &mut NullReporter,
        )
        .unwrap();

        assert_eq!(render(&standings), "Always defect: 10 points\nAlways cooperate: 0 points\n");
    }
}
