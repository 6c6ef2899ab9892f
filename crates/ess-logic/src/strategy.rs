//! Strategy definitions and execution
//!
//! A [`Strategy`] is a species descriptor: which variant to play and with
//! what parameters. A [`StrategyInstance`] is one live decision state
//! machine built from it, remembering a single opponent.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::random::RandomSource;
use crate::{outcome, Outcome};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn opposite(self) -> Self {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Cooperate => f.write_str("cooperate"),
            Move::Defect => f.write_str("defect"),
        }
    }
}

/// Base strategy type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyBase {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Coin flip each round.
    Random,
    /// Defect once the opponent has defected twice since the last retaliation.
    TitForTwoTats,
    /// Defect first, then play Tit-for-Two-Tats.
    SuspiciousTitForTat,
    /// Tit-for-Tat that sometimes forgives a defection.
    GenerousTitForTat,
    /// Defect if the opponent defected in any of its last three moves.
    HardTitForTat,
    /// Play the opposite of Tit-for-Tat.
    ReverseTitForTat,
    /// Scripted opening, then whichever own move has paid better.
    Adaptive,
    /// Cooperate until opponent defects once, then always defect.
    GrimTrigger,
    /// Win-stay, lose-shift. Repeat move if good outcome.
    Pavlov,
    /// Retaliate with increasing defection streaks, then calm down.
    Gradual,
    /// Cooperate while the opponent cooperated at least as often as it defected.
    SoftMajority,
    /// Defect while the opponent defected at least as often as it cooperated.
    HardMajority,
    /// Tit-for-Tat with random probing defections.
    NaiveProber,
    /// Naive prober that apologises after each probe.
    RemorsefulProber,
    /// Punish each defection with D,D,D,D,C,C.
    SoftGrudger,
    /// Open D,C,C and exploit opponents that never answered.
    Prober,
    /// Cooperate unless the last round was a sucker payoff.
    FirmButFair,
}

impl StrategyBase {
    /// Every variant, in registry order
    pub const ALL: [StrategyBase; 20] = [
        StrategyBase::AlwaysCooperate,
        StrategyBase::AlwaysDefect,
        StrategyBase::TitForTat,
        StrategyBase::Random,
        StrategyBase::TitForTwoTats,
        StrategyBase::SuspiciousTitForTat,
        StrategyBase::GenerousTitForTat,
        StrategyBase::HardTitForTat,
        StrategyBase::ReverseTitForTat,
        StrategyBase::Adaptive,
        StrategyBase::GrimTrigger,
        StrategyBase::Pavlov,
        StrategyBase::Gradual,
        StrategyBase::SoftMajority,
        StrategyBase::HardMajority,
        StrategyBase::NaiveProber,
        StrategyBase::RemorsefulProber,
        StrategyBase::SoftGrudger,
        StrategyBase::Prober,
        StrategyBase::FirmButFair,
    ];

    /// Stable identifier, as accepted by [`FromStr`]
    pub fn id(self) -> &'static str {
        match self {
            StrategyBase::AlwaysCooperate => "AlwaysCooperate",
            StrategyBase::AlwaysDefect => "AlwaysDefect",
            StrategyBase::TitForTat => "TitForTat",
            StrategyBase::Random => "Random",
            StrategyBase::TitForTwoTats => "TitForTwoTats",
            StrategyBase::SuspiciousTitForTat => "SuspiciousTitForTat",
            StrategyBase::GenerousTitForTat => "GenerousTitForTat",
            StrategyBase::HardTitForTat => "HardTitForTat",
            StrategyBase::ReverseTitForTat => "ReverseTitForTat",
            StrategyBase::Adaptive => "Adaptive",
            StrategyBase::GrimTrigger => "GrimTrigger",
            StrategyBase::Pavlov => "Pavlov",
            StrategyBase::Gradual => "Gradual",
            StrategyBase::SoftMajority => "SoftMajority",
            StrategyBase::HardMajority => "HardMajority",
            StrategyBase::NaiveProber => "NaiveProber",
            StrategyBase::RemorsefulProber => "RemorsefulProber",
            StrategyBase::SoftGrudger => "SoftGrudger",
            StrategyBase::Prober => "Prober",
            StrategyBase::FirmButFair => "FirmButFair",
        }
    }

    /// Display name used in reports
    pub fn name(self) -> &'static str {
        match self {
            StrategyBase::AlwaysCooperate => "Always cooperate",
            StrategyBase::AlwaysDefect => "Always defect",
            StrategyBase::TitForTat => "Tit for tat",
            StrategyBase::Random => "Random",
            StrategyBase::TitForTwoTats => "Tit for 2 tats",
            StrategyBase::SuspiciousTitForTat => "Suspicious tit for tat",
            StrategyBase::GenerousTitForTat => "Generous tit for tat",
            StrategyBase::HardTitForTat => "Hard tit for tat",
            StrategyBase::ReverseTitForTat => "Reverse tit for tat",
            StrategyBase::Adaptive => "Adaptive",
            StrategyBase::GrimTrigger => "Grim trigger",
            StrategyBase::Pavlov => "Pavlov",
            StrategyBase::Gradual => "Gradual",
            StrategyBase::SoftMajority => "Soft majority",
            StrategyBase::HardMajority => "Hard majority",
            StrategyBase::NaiveProber => "Naive prober",
            StrategyBase::RemorsefulProber => "Remorseful prober",
            StrategyBase::SoftGrudger => "Soft grudger",
            StrategyBase::Prober => "Prober",
            StrategyBase::FirmButFair => "Firm but fair",
        }
    }
}

impl FromStr for StrategyBase {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self> {
        StrategyBase::ALL
            .iter()
            .copied()
            .find(|base| base.id() == s)
            .ok_or_else(|| ArenaError::config(format!("unknown strategy: {}", s)))
    }
}

/// Strategy parameters for the stochastic variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Percentage chance Generous Tit-for-Tat forgives a defection (0-100)
    pub cooperation_probability: u8,
    /// Percentage chance the probers defect unprovoked (0-100)
    pub defection_probability: u8,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            cooperation_probability: 5,
            defection_probability: 5,
        }
    }
}

impl StrategyParams {
    pub fn validate(&self) -> Result<()> {
        if self.cooperation_probability > 100 {
            return Err(ArenaError::config(format!(
                "cooperation probability must be 0-100, got {}",
                self.cooperation_probability
            )));
        }
        if self.defection_probability > 100 {
            return Err(ArenaError::config(format!(
                "defection probability must be 0-100, got {}",
                self.defection_probability
            )));
        }
        Ok(())
    }
}

/// Complete strategy with base type and parameters
///
/// This is the species handle: cheap to copy, and able to build any
/// number of independent [`StrategyInstance`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub base: StrategyBase,
    #[serde(default)]
    pub params: StrategyParams,
}

impl Strategy {
    /// Create a new strategy with default parameters
    pub fn new(base: StrategyBase) -> Self {
        Self {
            base,
            params: StrategyParams::default(),
        }
    }

    /// Create with custom parameters
    pub fn with_params(base: StrategyBase, params: StrategyParams) -> Self {
        Self { base, params }
    }

    /// One default-parameter descriptor per variant
    pub fn registry() -> Vec<Strategy> {
        StrategyBase::ALL.iter().map(|base| Strategy::new(*base)).collect()
    }

    pub fn name(&self) -> &'static str {
        self.base.name()
    }

    /// Build a fresh decision state machine for this species
    pub fn instantiate(&self) -> StrategyInstance {
        StrategyInstance::new(*self)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(StrategyBase::TitForTat)
    }
}

/// Punishment queued by Soft Grudger, consumed front first
const GRUDGE: [Move; 6] = [
    Move::Defect,
    Move::Defect,
    Move::Defect,
    Move::Defect,
    Move::Cooperate,
    Move::Cooperate,
];

/// Adaptive's opening script, consumed from the tail
const ADAPTIVE_OPENING: [Move; 10] = [
    Move::Cooperate,
    Move::Cooperate,
    Move::Cooperate,
    Move::Cooperate,
    Move::Cooperate,
    Move::Defect,
    Move::Defect,
    Move::Defect,
    Move::Defect,
    Move::Defect,
];

/// Move chosen for the current round, held until it is observed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Decision {
    choice: Move,
    /// The move came from a random probe rather than the variant's rule
    probed: bool,
}

impl Decision {
    fn plain(choice: Move) -> Self {
        Self { choice, probed: false }
    }

    fn probe() -> Self {
        Self { choice: Move::Defect, probed: true }
    }
}

fn tit_for_tat(last_opponent: Move) -> Move {
    last_opponent
}

fn chance(rng: &mut dyn RandomSource, probability: u8) -> Result<bool> {
    Ok(rng.percent()? < probability)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TwoTats {
    defections: u32,
}

impl TwoTats {
    fn decide(&self) -> Move {
        if self.defections >= 2 {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn observe(&mut self, opponent: Move) {
        // a retaliation re-arms at one counted defection
        if self.defections >= 2 {
            self.defections = 1;
        }
        if opponent == Move::Defect {
            self.defections += 1;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Adaptive {
    script: Vec<Move>,
    cooperate_total: u32,
    defect_total: u32,
}

impl Adaptive {
    fn new() -> Self {
        Self {
            script: ADAPTIVE_OPENING.to_vec(),
            cooperate_total: 0,
            defect_total: 0,
        }
    }

    fn decide(&self) -> Move {
        if let Some(planned) = self.script.last() {
            return *planned;
        }
        if self.cooperate_total >= self.defect_total {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn observe(&mut self, own: Move, opponent: Move) {
        self.script.pop();
        let score = outcome(own, opponent).score() as u32;
        match own {
            Move::Cooperate => self.cooperate_total += score,
            Move::Defect => self.defect_total += score,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Gradual {
    defections: u32,
    punishment: u32,
    calming: u32,
}

impl Gradual {
    fn decide(&self) -> Move {
        if self.calming > 0 {
            Move::Cooperate
        } else if self.punishment > 0 {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn observe(&mut self, opponent: Move) {
        if self.calming > 0 {
            self.calming -= 1;
        } else if self.punishment > 0 {
            self.punishment -= 1;
            if self.punishment == 0 {
                self.calming = 2;
            }
        }

        if opponent == Move::Defect && self.punishment == 0 && self.calming == 0 {
            self.defections += 1;
            self.punishment = self.defections;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Tally {
    cooperations: u32,
    defections: u32,
}

impl Tally {
    fn observe(&mut self, opponent: Move) {
        match opponent {
            Move::Cooperate => self.cooperations += 1,
            Move::Defect => self.defections += 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Prober {
    moves_played: u32,
    opponent_second: Option<Move>,
    opponent_third: Option<Move>,
    last_opponent: Move,
}

impl Prober {
    fn new() -> Self {
        Self {
            moves_played: 0,
            opponent_second: None,
            opponent_third: None,
            last_opponent: Move::Cooperate,
        }
    }

    /// Opponent let both opening cooperations go unanswered
    fn exploiting(&self) -> bool {
        self.opponent_second == Some(Move::Cooperate) && self.opponent_third == Some(Move::Cooperate)
    }

    fn decide(&self) -> Move {
        match self.moves_played {
            0 => Move::Defect,
            1 | 2 => Move::Cooperate,
            _ if self.exploiting() => Move::Defect,
            3 => Move::Cooperate,
            _ => tit_for_tat(self.last_opponent),
        }
    }

    fn observe(&mut self, opponent: Move) {
        self.moves_played = self.moves_played.saturating_add(1);
        match self.moves_played {
            2 => self.opponent_second = Some(opponent),
            3 => self.opponent_third = Some(opponent),
            _ => {}
        }
        self.last_opponent = opponent;
    }
}

/// Per-variant state. Each variant owns only what its rule reads.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Policy {
    AlwaysCooperate,
    AlwaysDefect,
    Random,
    TitForTat { last_opponent: Move },
    TitForTwoTats(TwoTats),
    SuspiciousTitForTat { opened: bool, tats: TwoTats },
    GenerousTitForTat { last_opponent: Move, cooperation_probability: u8 },
    HardTitForTat { window: [Move; 3] },
    ReverseTitForTat { last_opponent: Move },
    Adaptive(Adaptive),
    GrimTrigger { triggered: bool },
    Pavlov { last_move: Move, last_outcome: Outcome },
    Gradual(Gradual),
    SoftMajority(Tally),
    HardMajority(Tally),
    NaiveProber { last_opponent: Move, defection_probability: u8 },
    RemorsefulProber { last_opponent: Move, defection_probability: u8, remorse: bool },
    SoftGrudger { queue: VecDeque<Move> },
    Prober(Prober),
    FirmButFair { last_outcome: Outcome },
}

impl Policy {
    fn fresh(strategy: &Strategy) -> Self {
        let params = strategy.params;
        let last_opponent = Move::Cooperate;
        match strategy.base {
            StrategyBase::AlwaysCooperate => Policy::AlwaysCooperate,
            StrategyBase::AlwaysDefect => Policy::AlwaysDefect,
            StrategyBase::Random => Policy::Random,
            StrategyBase::TitForTat => Policy::TitForTat { last_opponent },
            StrategyBase::TitForTwoTats => Policy::TitForTwoTats(TwoTats::default()),
            StrategyBase::SuspiciousTitForTat => Policy::SuspiciousTitForTat {
                opened: false,
                tats: TwoTats::default(),
            },
            StrategyBase::GenerousTitForTat => Policy::GenerousTitForTat {
                last_opponent,
                cooperation_probability: params.cooperation_probability,
            },
            StrategyBase::HardTitForTat => Policy::HardTitForTat {
                window: [Move::Cooperate; 3],
            },
            StrategyBase::ReverseTitForTat => Policy::ReverseTitForTat { last_opponent },
            StrategyBase::Adaptive => Policy::Adaptive(Adaptive::new()),
            StrategyBase::GrimTrigger => Policy::GrimTrigger { triggered: false },
            StrategyBase::Pavlov => Policy::Pavlov {
                last_move: Move::Cooperate,
                last_outcome: Outcome::Reward,
            },
            StrategyBase::Gradual => Policy::Gradual(Gradual::default()),
            StrategyBase::SoftMajority => Policy::SoftMajority(Tally::default()),
            StrategyBase::HardMajority => Policy::HardMajority(Tally::default()),
            StrategyBase::NaiveProber => Policy::NaiveProber {
                last_opponent,
                defection_probability: params.defection_probability,
            },
            StrategyBase::RemorsefulProber => Policy::RemorsefulProber {
                last_opponent,
                defection_probability: params.defection_probability,
                remorse: false,
            },
            StrategyBase::SoftGrudger => Policy::SoftGrudger { queue: VecDeque::new() },
            StrategyBase::Prober => Policy::Prober(Prober::new()),
            StrategyBase::FirmButFair => Policy::FirmButFair {
                last_outcome: Outcome::Reward,
            },
        }
    }

    /// Reads state only; the random source is touched by stochastic variants.
    fn decide(&self, rng: &mut dyn RandomSource) -> Result<Decision> {
        let choice = match self {
            Policy::AlwaysCooperate => Move::Cooperate,
            Policy::AlwaysDefect => Move::Defect,
            Policy::Random => {
                if rng.coin_flip()? {
                    Move::Defect
                } else {
                    Move::Cooperate
                }
            }
            Policy::TitForTat { last_opponent } => tit_for_tat(*last_opponent),
            Policy::TitForTwoTats(tats) => tats.decide(),
            Policy::SuspiciousTitForTat { opened, tats } => {
                if *opened {
                    tats.decide()
                } else {
                    Move::Defect
                }
            }
            Policy::GenerousTitForTat { last_opponent, cooperation_probability } => {
                match tit_for_tat(*last_opponent) {
                    Move::Defect if chance(rng, *cooperation_probability)? => Move::Cooperate,
                    choice => choice,
                }
            }
            Policy::HardTitForTat { window } => {
                if window.contains(&Move::Defect) {
                    Move::Defect
                } else {
                    Move::Cooperate
                }
            }
            Policy::ReverseTitForTat { last_opponent } => tit_for_tat(*last_opponent).opposite(),
            Policy::Adaptive(adaptive) => adaptive.decide(),
            Policy::GrimTrigger { triggered } => {
                if *triggered {
                    Move::Defect
                } else {
                    Move::Cooperate
                }
            }
            Policy::Pavlov { last_move, last_outcome } => match last_outcome {
                Outcome::Temptation | Outcome::Reward => *last_move,
                Outcome::Punishment | Outcome::Sucker => last_move.opposite(),
            },
            Policy::Gradual(gradual) => gradual.decide(),
            Policy::SoftMajority(tally) => {
                if tally.cooperations >= tally.defections {
                    Move::Cooperate
                } else {
                    Move::Defect
                }
            }
            Policy::HardMajority(tally) => {
                if tally.defections >= tally.cooperations {
                    Move::Defect
                } else {
                    Move::Cooperate
                }
            }
            Policy::NaiveProber { last_opponent, defection_probability } => {
                if chance(rng, *defection_probability)? {
                    return Ok(Decision::probe());
                }
                tit_for_tat(*last_opponent)
            }
            Policy::RemorsefulProber { last_opponent, defection_probability, remorse } => {
                if *remorse {
                    Move::Cooperate
                } else if chance(rng, *defection_probability)? {
                    return Ok(Decision::probe());
                } else {
                    tit_for_tat(*last_opponent)
                }
            }
            Policy::SoftGrudger { queue } => queue.front().copied().unwrap_or(Move::Cooperate),
            Policy::Prober(prober) => prober.decide(),
            Policy::FirmButFair { last_outcome } => {
                if *last_outcome == Outcome::Sucker {
                    Move::Defect
                } else {
                    Move::Cooperate
                }
            }
        };
        Ok(Decision::plain(choice))
    }

    fn observe(&mut self, decision: Decision, own: Move, opponent: Move) {
        match self {
            Policy::AlwaysCooperate | Policy::AlwaysDefect | Policy::Random => {}
            Policy::TitForTat { last_opponent }
            | Policy::ReverseTitForTat { last_opponent }
            | Policy::GenerousTitForTat { last_opponent, .. }
            | Policy::NaiveProber { last_opponent, .. } => *last_opponent = opponent,
            Policy::TitForTwoTats(tats) => tats.observe(opponent),
            Policy::SuspiciousTitForTat { opened, tats } => {
                *opened = true;
                tats.observe(opponent);
            }
            Policy::HardTitForTat { window } => {
                window.rotate_right(1);
                window[0] = opponent;
            }
            Policy::Adaptive(adaptive) => adaptive.observe(own, opponent),
            Policy::GrimTrigger { triggered } => *triggered |= opponent == Move::Defect,
            Policy::Pavlov { last_move, last_outcome } => {
                *last_move = own;
                *last_outcome = outcome(own, opponent);
            }
            Policy::Gradual(gradual) => gradual.observe(opponent),
            Policy::SoftMajority(tally) | Policy::HardMajority(tally) => tally.observe(opponent),
            Policy::RemorsefulProber { last_opponent, remorse, .. } => {
                *remorse = decision.probed;
                *last_opponent = opponent;
            }
            Policy::SoftGrudger { queue } => {
                queue.pop_front();
                if opponent == Move::Defect && queue.is_empty() {
                    queue.extend(GRUDGE);
                }
            }
            Policy::Prober(prober) => prober.observe(opponent),
            Policy::FirmButFair { last_outcome } => *last_outcome = outcome(own, opponent),
        }
    }
}

/// One live strategy: the decide/observe state machine for a single
/// opponent relationship.
///
/// Every round is `decide_next_move` followed by exactly one `observe`
/// carrying the true moves of both sides.
#[derive(Clone, Debug)]
pub struct StrategyInstance {
    strategy: Strategy,
    policy: Policy,
    pending: Option<Decision>,
    rounds_observed: u32,
}

impl StrategyInstance {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            policy: Policy::fresh(&strategy),
            strategy,
            pending: None,
            rounds_observed: 0,
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Rounds this instance has been through
    pub fn rounds_observed(&self) -> u32 {
        self.rounds_observed
    }

    /// Choose this round's move.
    ///
    /// Only the random source can fail, and its error is returned as-is.
    pub fn decide_next_move(&mut self, rng: &mut dyn RandomSource) -> Result<Move> {
        let decision = self.policy.decide(rng)?;
        self.pending = Some(decision);
        Ok(decision.choice)
    }

    /// Feed back the round's true moves.
    ///
    /// # Panics
    /// If no decision is pending for this round.
    pub fn observe(&mut self, own: Move, opponent: Move) {
        let decision = match self.pending.take() {
            Some(decision) => decision,
            None => panic!(
                "{}: observe called without a decision for this round",
                self.strategy.name()
            ),
        };
        debug_assert_eq!(decision.choice, own, "observed move differs from the decided one");
        self.policy.observe(decision, own, opponent);
        self.rounds_observed = self.rounds_observed.saturating_add(1);
    }
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: &Strategy) -> String {
    let base_desc = match strategy.base {
        StrategyBase::AlwaysCooperate => "Never defects. Always cooperates.",
        StrategyBase::AlwaysDefect => "Never cooperates. Always defects.",
        StrategyBase::TitForTat => "Copies opponent's last move. Starts by cooperating.",
        StrategyBase::Random => "Randomly cooperates or defects each round.",
        StrategyBase::TitForTwoTats => "Only retaliates after two opponent defections.",
        StrategyBase::SuspiciousTitForTat => "Starts with defect, then plays Tit for 2 tats.",
        StrategyBase::GenerousTitForTat => "Like Tit for tat, but sometimes forgives a defection.",
        StrategyBase::HardTitForTat => "Defects if the opponent defected in any of its last three moves.",
        StrategyBase::ReverseTitForTat => "Defects first, then plays the reverse of the opponent's last move.",
        StrategyBase::Adaptive => "Opens with five defections and five cooperations, then plays whichever has scored more.",
        StrategyBase::GrimTrigger => "Cooperates until betrayed, then always defects.",
        StrategyBase::Pavlov => "Repeats move if outcome was good, switches if bad.",
        StrategyBase::Gradual => "Retaliates with increasing severity, then calms down with two cooperations.",
        StrategyBase::SoftMajority => "Cooperates while the opponent has cooperated at least as often as it defected.",
        StrategyBase::HardMajority => "Defects while the opponent has defected at least as often as it cooperated.",
        StrategyBase::NaiveProber => "Like Tit for tat, but occasionally defects unprovoked.",
        StrategyBase::RemorsefulProber => "Like Naive prober, but cooperates right after each probe.",
        StrategyBase::SoftGrudger => "Punishes each defection with D,D,D,D,C,C.",
        StrategyBase::Prober => "Opens D,C,C and exploits opponents that do not retaliate, else plays Tit for tat.",
        StrategyBase::FirmButFair => "Cooperates except right after receiving a sucker payoff.",
    };

    let mut desc = base_desc.to_string();

    match strategy.base {
        StrategyBase::GenerousTitForTat => {
            desc.push_str(&format!(
                " {}% chance to forgive.",
                strategy.params.cooperation_probability
            ));
        }
        StrategyBase::NaiveProber | StrategyBase::RemorsefulProber => {
            desc.push_str(&format!(
                " {}% chance to probe.",
                strategy.params.defection_probability
            ));
        }
        _ => {}
    }

    desc
}
