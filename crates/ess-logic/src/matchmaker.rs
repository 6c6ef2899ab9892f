//! Who plays whom
//!
//! Round-robin tournaments between species, and single rounds between
//! population members that remember each other.

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::game::{play_round, run_match, Round, RoundConfig};
use crate::pairing::{pair_count, round_robin};
use crate::population::Entity;
use crate::random::RandomSource;
use crate::report::Reporter;
use crate::strategy::Strategy;

/// Accumulated tournament score of one species
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub score: u32,
}

/// Tournament totals, kept in the order species were entered
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    fn add(&mut self, name: &str, points: u32) {
        match self.entries.iter_mut().find(|s| s.name == name) {
            Some(standing) => standing.score += points,
            None => self.entries.push(Standing {
                name: name.to_string(),
                score: points,
            }),
        }
    }

    pub fn entries(&self) -> &[Standing] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn score(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|s| s.name == name).map(|s| s.score)
    }

    /// Highest score first; ties keep entry order
    pub fn ranked(&self) -> Vec<&Standing> {
        let mut ranked: Vec<&Standing> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

/// Play every species against every other exactly once.
///
/// Each match uses brand-new instances. Species sharing a name share a
/// total.
pub fn play_round_robin(
    strategies: &[Strategy],
    config: &RoundConfig,
    rng: &mut dyn RandomSource,
    reporter: &mut dyn Reporter,
) -> Result<Standings> {
    config.validate()?;
    if strategies.len() < 2 {
        return Err(ArenaError::config(format!(
            "a round robin needs at least 2 strategies, got {}",
            strategies.len()
        )));
    }

    let mut standings = Standings::default();
    for strategy in strategies {
        strategy.params.validate()?;
        standings.add(strategy.name(), 0);
    }

    log::info!(
        "round robin: {} strategies, {} matches of {} rounds",
        strategies.len(),
        pair_count(strategies.len()),
        config.rounds
    );

    for (a, b) in round_robin(strategies) {
        let result = run_match(a, b, config, rng, reporter)?;
        standings.add(a.name(), result.total_score_a);
        standings.add(b.name(), result.total_score_b);
    }

    Ok(standings)
}

/// Play one round between two population members.
///
/// Each side uses the instance it keeps for the other, so behavior
/// carries over between generations. Both age by one and take the
/// fitness change of their outcome.
pub fn play_entities(a: &mut Entity, b: &mut Entity, rng: &mut dyn RandomSource) -> Result<Round> {
    let (id_a, id_b) = (a.id(), b.id());

    let round = play_round(a.strategy_for(id_b), b.strategy_for(id_a), rng)?;

    a.apply_result(round.outcome_a);
    b.apply_result(round.outcome_b);

    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::{LifecycleConfig, Population};
    use crate::random::{ScriptedRng, SeededRng};
    use crate::report::{NullReporter, Recorder};
    use crate::strategy::{Move, StrategyBase};
    use crate::Outcome;

    fn entrants(bases: &[StrategyBase]) -> Vec<Strategy> {
        bases.iter().map(|b| Strategy::new(*b)).collect()
    }

    #[test]
    fn test_round_robin_totals() {
        let strategies = entrants(&[
            StrategyBase::AlwaysCooperate,
            StrategyBase::AlwaysDefect,
            StrategyBase::TitForTat,
        ]);
        let config = RoundConfig::default();
        let standings =
            play_round_robin(&strategies, &config, &mut SeededRng::new(1), &mut NullReporter).unwrap();

        // AC: 0 vs AD, 30 vs TFT
        assert_eq!(standings.score("Always cooperate"), Some(30));
        // AD: 50 vs AC, 5 + 9 vs TFT
        assert_eq!(standings.score("Always defect"), Some(64));
        // TFT: 30 vs AC, 0 + 9 vs AD
        assert_eq!(standings.score("Tit for tat"), Some(39));
        assert_eq!(standings.score("Pavlov"), None);

        let names: Vec<_> = standings.entries().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Always cooperate", "Always defect", "Tit for tat"]);

        let ranked: Vec<_> = standings.ranked().iter().map(|s| s.score).collect();
        assert_eq!(ranked, vec![64, 39, 30]);
    }

    #[test]
    fn test_round_robin_plays_every_pair_once() {
        let strategies = Strategy::registry();
        let mut recorder = Recorder::default();
        let config = RoundConfig::new(3).unwrap();

        play_round_robin(&strategies, &config, &mut SeededRng::new(7), &mut recorder).unwrap();

        assert_eq!(recorder.rounds().count(), pair_count(20) * 3);
    }

    #[test]
    fn test_round_robin_rejects_bad_input() {
        let config = RoundConfig::default();
        let one = entrants(&[StrategyBase::Pavlov]);
        assert!(play_round_robin(&one, &config, &mut SeededRng::new(1), &mut NullReporter).is_err());

        let two = entrants(&[StrategyBase::Pavlov, StrategyBase::Gradual]);
        let zero = RoundConfig { rounds: 0 };
        assert!(play_round_robin(&two, &zero, &mut SeededRng::new(1), &mut NullReporter).is_err());
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let strategies = entrants(&[
            StrategyBase::AlwaysCooperate,
            StrategyBase::TitForTat,
            StrategyBase::GrimTrigger,
        ]);
        let standings = play_round_robin(
            &strategies,
            &RoundConfig::default(),
            &mut SeededRng::new(1),
            &mut NullReporter,
        )
        .unwrap();

        let ranked: Vec<_> = standings.ranked().iter().map(|s| s.name.clone()).collect();
        assert_eq!(ranked, vec!["Always cooperate", "Tit for tat", "Grim trigger"]);
    }

    #[test]
    fn test_round_robin_determinism() {
        let strategies = Strategy::registry();
        let config = RoundConfig::default();
        let first = play_round_robin(&strategies, &config, &mut SeededRng::new(99), &mut NullReporter);
        let second = play_round_robin(&strategies, &config, &mut SeededRng::new(99), &mut NullReporter);
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_play_entities_updates_both_sides() {
        let mut population = Population::new(LifecycleConfig::default()).unwrap();
        population.spawn(Strategy::new(StrategyBase::AlwaysCooperate));
        population.spawn(Strategy::new(StrategyBase::AlwaysDefect));
        let mut pair = population.entities().to_vec();
        let (a, b) = pair.split_at_mut(1);
        let (a, b) = (&mut a[0], &mut b[0]);

        // neither side draws randomness
        let round = play_entities(a, b, &mut ScriptedRng::default()).unwrap();

        assert_eq!((round.move_a, round.move_b), (Move::Cooperate, Move::Defect));
        assert_eq!(round.outcomes(), (Outcome::Sucker, Outcome::Temptation));
        assert_eq!((a.age(), a.fitness()), (1, 0));
        assert_eq!((b.age(), b.fitness()), (1, 2));
        assert!(a.remembers(b.id()));
        assert!(b.remembers(a.id()));
    }
}
