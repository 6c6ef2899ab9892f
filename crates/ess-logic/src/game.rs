//! Match execution engine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::random::RandomSource;
use crate::report::Reporter;
use crate::strategy::{Move, Strategy, StrategyInstance};
use crate::{outcome, Outcome};

/// Raw data of one simultaneous exchange
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub move_a: Move,
    pub move_b: Move,
    pub outcome_a: Outcome,
    pub outcome_b: Outcome,
}

impl Round {
    pub fn from_moves(move_a: Move, move_b: Move) -> Self {
        Self {
            move_a,
            move_b,
            outcome_a: outcome(move_a, move_b),
            outcome_b: outcome(move_b, move_a),
        }
    }

    pub fn outcomes(&self) -> (Outcome, Outcome) {
        (self.outcome_a, self.outcome_b)
    }

    pub fn scores(&self) -> (u8, u8) {
        (self.outcome_a.score(), self.outcome_b.score())
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) - ({})", self.move_a, self.move_b)
    }
}

/// Result of a single round within a match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    #[serde(flatten)]
    pub play: Round,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    pub round_count: u32,
}

impl MatchResult {
    /// Per-round outcome pairs, in play order
    pub fn outcomes(&self) -> Vec<(Outcome, Outcome)> {
        self.rounds.iter().map(|r| r.play.outcomes()).collect()
    }
}

/// Configuration for the number of rounds per match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub rounds: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { rounds: 10 }
    }
}

impl RoundConfig {
    pub fn new(rounds: u32) -> Result<Self> {
        let config = Self { rounds };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_round_count(self.rounds)
    }
}

fn check_round_count(rounds: u32) -> Result<()> {
    if rounds < 1 {
        return Err(ArenaError::config(format!(
            "a match needs at least 1 round, got {}",
            rounds
        )));
    }
    Ok(())
}

/// Play one round between two live strategies.
///
/// Both sides decide before either observes, so neither choice can
/// depend on the other's. Both then observe the same true move pair.
pub fn play_round(
    a: &mut StrategyInstance,
    b: &mut StrategyInstance,
    rng: &mut dyn RandomSource,
) -> Result<Round> {
    let move_a = a.decide_next_move(rng)?;
    let move_b = b.decide_next_move(rng)?;

    let round = Round::from_moves(move_a, move_b);

    a.observe(move_a, move_b);
    b.observe(move_b, move_a);

    Ok(round)
}

/// Play `rounds` consecutive rounds between two live strategies
///
/// # Errors
/// `InvalidConfiguration` when `rounds` is zero; random source failures
/// are passed through.
pub fn play_match(
    a: &mut StrategyInstance,
    b: &mut StrategyInstance,
    rounds: u32,
    rng: &mut dyn RandomSource,
    reporter: &mut dyn Reporter,
) -> Result<MatchResult> {
    check_round_count(rounds)?;

    let mut results: Vec<RoundResult> = Vec::with_capacity(rounds as usize);
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    reporter.match_started(a.name(), b.name());

    for round in 0..rounds {
        let play = play_round(a, b, rng)?;

        let (score_a, score_b) = play.scores();
        total_a += score_a as u32;
        total_b += score_b as u32;

        let result = RoundResult {
            round,
            play,
            cumulative_a: total_a,
            cumulative_b: total_b,
        };
        reporter.round_played(a.name(), b.name(), &result);
        results.push(result);
    }

    let result = MatchResult {
        rounds: results,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count: rounds,
    };
    reporter.match_finished(a.name(), b.name(), &result);

    Ok(result)
}

/// Run a complete match between two species with brand-new instances
pub fn run_match(
    strategy_a: &Strategy,
    strategy_b: &Strategy,
    config: &RoundConfig,
    rng: &mut dyn RandomSource,
    reporter: &mut dyn Reporter,
) -> Result<MatchResult> {
    config.validate()?;

    let mut a = strategy_a.instantiate();
    let mut b = strategy_b.instantiate();

    play_match(&mut a, &mut b, config.rounds, rng, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRng;
    use crate::report::{NullReporter, Recorder};
    use crate::strategy::StrategyBase;
    use proptest::prelude::{any, prop_assert_eq, proptest};

    fn make_rng() -> SeededRng {
        SeededRng::new(42)
    }

    fn run(a: StrategyBase, b: StrategyBase, rounds: u32) -> MatchResult {
        let config = RoundConfig::new(rounds).unwrap();
        run_match(
            &Strategy::new(a),
            &Strategy::new(b),
            &config,
            &mut make_rng(),
            &mut NullReporter,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(matches!(
            RoundConfig::new(0),
            Err(ArenaError::InvalidConfiguration(_))
        ));

        let mut a = Strategy::default().instantiate();
        let mut b = Strategy::default().instantiate();
        let result = play_match(&mut a, &mut b, 0, &mut make_rng(), &mut NullReporter);
        assert!(matches!(result, Err(ArenaError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_run_match_rejects_invalid_config() {
        let config = RoundConfig { rounds: 0 };
        let result = run_match(
            &Strategy::default(),
            &Strategy::default(),
            &config,
            &mut make_rng(),
            &mut NullReporter,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cooperate_vs_cooperate() {
        let result = run(StrategyBase::AlwaysCooperate, StrategyBase::AlwaysCooperate, 10);

        assert_eq!(result.outcomes(), vec![(Outcome::Reward, Outcome::Reward); 10]);
        assert_eq!(result.total_score_a, 30);
        assert_eq!(result.total_score_b, 30);
    }

    #[test]
    fn test_cooperate_vs_defect_single_round() {
        let result = run(StrategyBase::AlwaysCooperate, StrategyBase::AlwaysDefect, 1);

        assert_eq!(result.outcomes(), vec![(Outcome::Sucker, Outcome::Temptation)]);
        assert_eq!(result.total_score_a, 0);
        assert_eq!(result.total_score_b, 5);
    }

    #[test]
    fn test_tft_vs_always_defect() {
        let result = run(StrategyBase::TitForTat, StrategyBase::AlwaysDefect, 10);

        // Round 0: TFT cooperates, AD defects
        assert_eq!(result.rounds[0].play.move_a, Move::Cooperate);
        assert_eq!(result.rounds[0].play.move_b, Move::Defect);

        // Round 1+: TFT retaliates, both defect
        for round in result.rounds.iter().skip(1) {
            assert_eq!(round.play.outcomes(), (Outcome::Punishment, Outcome::Punishment));
        }
    }

    #[test]
    fn test_grim_trigger_stays_triggered() {
        let result = run(StrategyBase::GrimTrigger, StrategyBase::SuspiciousTitForTat, 12);

        let first_defection = result
            .rounds
            .iter()
            .position(|r| r.play.move_b == Move::Defect)
            .unwrap();
        for round in &result.rounds[first_defection + 1..] {
            assert_eq!(round.play.move_a, Move::Defect);
        }
    }

    #[test]
    fn test_cumulative_scores() {
        let result = run(StrategyBase::Random, StrategyBase::Pavlov, 30);

        let mut expected_a = 0u32;
        let mut expected_b = 0u32;

        for (i, round) in result.rounds.iter().enumerate() {
            let (score_a, score_b) = round.play.scores();
            expected_a += score_a as u32;
            expected_b += score_b as u32;
            assert_eq!(round.round, i as u32);
            assert_eq!(round.cumulative_a, expected_a);
            assert_eq!(round.cumulative_b, expected_b);
        }
        assert_eq!(result.total_score_a, expected_a);
        assert_eq!(result.total_score_b, expected_b);
    }

    #[test]
    fn test_match_determinism() {
        let result1 = run(StrategyBase::TitForTat, StrategyBase::Random, 20);
        let result2 = run(StrategyBase::TitForTat, StrategyBase::Random, 20);

        assert_eq!(result1.rounds, result2.rounds);
    }

    #[test]
    fn test_play_round_feeds_both_sides() {
        let mut a = Strategy::new(StrategyBase::TitForTat).instantiate();
        let mut b = Strategy::new(StrategyBase::AlwaysDefect).instantiate();
        let mut rng = make_rng();

        let first = play_round(&mut a, &mut b, &mut rng).unwrap();
        assert_eq!(first.outcomes(), (Outcome::Sucker, Outcome::Temptation));
        assert_eq!(first.to_string(), "(cooperate) - (defect)");

        let second = play_round(&mut a, &mut b, &mut rng).unwrap();
        assert_eq!(second.move_a, Move::Defect);
        assert_eq!(a.rounds_observed(), 2);
        assert_eq!(b.rounds_observed(), 2);
    }

    #[test]
    fn test_reporter_sees_every_round() {
        let mut recorder = Recorder::default();
        let mut a = Strategy::new(StrategyBase::Pavlov).instantiate();
        let mut b = Strategy::new(StrategyBase::Gradual).instantiate();

        let result = play_match(&mut a, &mut b, 7, &mut make_rng(), &mut recorder).unwrap();

        assert_eq!(recorder.rounds().count(), 7);
        assert_eq!(recorder.events.len(), 7 + 2);
        let reported: Vec<_> = recorder.rounds().cloned().collect();
        assert_eq!(reported, result.rounds);
    }

    proptest! {
        #[test]
        fn prop_match_length(rounds in 1u32..200, seed in any::<u64>()) {
            let mut a = Strategy::new(StrategyBase::Random).instantiate();
            let mut b = Strategy::new(StrategyBase::NaiveProber).instantiate();
            let mut rng = SeededRng::new(seed);
            let result = play_match(&mut a, &mut b, rounds, &mut rng, &mut NullReporter).unwrap();
            prop_assert_eq!(result.rounds.len(), rounds as usize);
            prop_assert_eq!(result.round_count, rounds);
        }

        #[test]
        fn prop_tft_mirror_cooperates(rounds in 1u32..100) {
            let result = run(StrategyBase::TitForTat, StrategyBase::TitForTat, rounds);
            for pair in result.outcomes() {
                prop_assert_eq!(pair, (Outcome::Reward, Outcome::Reward));
            }
        }
    }
}
