//! Match Logic for ESS Arena
//!
//! Core game logic for the Iterated Prisoner's Dilemma and the
//! evolutionarily-stable-strategy population built on top of it.
//! This crate is compiled to:
//! - Native (for the `ess-arena` driver)
//! - WASM (for frontend match replay)

mod error;
mod random;
mod strategy;
mod game;
mod pairing;
mod matchmaker;
mod population;
mod report;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use error::{ArenaError, Result};
pub use random::{RandomSource, ScriptedRng, SeededRng};
pub use strategy::{describe_strategy, Move, Strategy, StrategyBase, StrategyInstance, StrategyParams};
pub use game::{play_match, play_round, run_match, MatchResult, Round, RoundConfig, RoundResult};
pub use pairing::{pair_count, random_pairing, round_robin, round_robin_indices, RandomPairing};
pub use matchmaker::{play_entities, play_round_robin, Standing, Standings};
pub use population::{
    run_until, Census, Encounter, Entity, EntityId, LifecycleConfig, Population, INITIAL_FITNESS, MATURITY_AGE,
    MAX_AGE,
};
pub use report::{Event, LogReporter, NullReporter, Recorder, Reporter};

/// Payoff category of one side of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Defected against a cooperator
    Temptation,
    /// Mutual cooperation
    Reward,
    /// Mutual defection
    Punishment,
    /// Cooperated against a defector
    Sucker,
}

impl Outcome {
    /// Points awarded for this outcome
    pub fn score(self) -> u8 {
        match self {
            Outcome::Temptation => 5,
            Outcome::Reward => 3,
            Outcome::Punishment => 1,
            Outcome::Sucker => 0,
        }
    }
}

/// Payoff matrix for the Prisoner's Dilemma, seen from `own`'s side
pub fn outcome(own: Move, opponent: Move) -> Outcome {
    match (own, opponent) {
        (Move::Cooperate, Move::Cooperate) => Outcome::Reward,
        (Move::Cooperate, Move::Defect) => Outcome::Sucker,
        (Move::Defect, Move::Cooperate) => Outcome::Temptation,
        (Move::Defect, Move::Defect) => Outcome::Punishment,
    }
}

/// Hit-point change an outcome applies to a population member
pub fn fitness_delta(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Temptation | Outcome::Reward => 1,
        Outcome::Punishment | Outcome::Sucker => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::{fitness_delta, outcome, Move, Outcome};
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        prop_oneof![Just(Move::Cooperate), Just(Move::Defect)]
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(Outcome::Temptation.score(), 5);
        assert_eq!(Outcome::Reward.score(), 3);
        assert_eq!(Outcome::Punishment.score(), 1);
        assert_eq!(Outcome::Sucker.score(), 0);
    }

    #[test]
    fn test_outcome_table() {
        assert_eq!(outcome(Move::Cooperate, Move::Cooperate), Outcome::Reward);
        assert_eq!(outcome(Move::Cooperate, Move::Defect), Outcome::Sucker);
        assert_eq!(outcome(Move::Defect, Move::Cooperate), Outcome::Temptation);
        assert_eq!(outcome(Move::Defect, Move::Defect), Outcome::Punishment);
    }

    #[test]
    fn test_fitness_delta() {
        assert_eq!(fitness_delta(Outcome::Temptation), 1);
        assert_eq!(fitness_delta(Outcome::Reward), 1);
        assert_eq!(fitness_delta(Outcome::Punishment), -1);
        assert_eq!(fitness_delta(Outcome::Sucker), -1);
    }

    proptest! {
        #[test]
        fn prop_mixed_cells_are_antisymmetric(a in any_move(), b in any_move()) {
            let (mine, theirs) = (outcome(a, b), outcome(b, a));
            prop_assert!(!(mine == Outcome::Temptation && theirs == Outcome::Temptation));
            if a == b {
                prop_assert_eq!(mine, theirs);
            } else {
                let pair = [mine, theirs];
                prop_assert!(pair.contains(&Outcome::Temptation));
                prop_assert!(pair.contains(&Outcome::Sucker));
            }
        }
    }
}
