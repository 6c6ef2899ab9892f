//! Reporting hooks
//!
//! The engine always returns structured results; a [`Reporter`] is an
//! optional observer for rendering them while they happen.

use serde::{Deserialize, Serialize};

use crate::game::{MatchResult, RoundResult};
use crate::population::{Census, Encounter};

/// Receives match and generation events. Every hook defaults to a no-op.
pub trait Reporter {
    fn match_started(&mut self, _name_a: &str, _name_b: &str) {}

    fn round_played(&mut self, _name_a: &str, _name_b: &str, _round: &RoundResult) {}

    fn match_finished(&mut self, _name_a: &str, _name_b: &str, _result: &MatchResult) {}

    fn generation_started(&mut self, _census: &Census) {}

    fn encounter_played(&mut self, _encounter: &Encounter) {}
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Renders events through the `log` facade
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn match_started(&mut self, name_a: &str, name_b: &str) {
        log::info!("{} vs {}", name_a, name_b);
    }

    fn round_played(&mut self, name_a: &str, name_b: &str, round: &RoundResult) {
        log::debug!("{} {} {}", name_a, round.play, name_b);
    }

    fn match_finished(&mut self, _name_a: &str, _name_b: &str, result: &MatchResult) {
        log::info!("Results: {} vs {}", result.total_score_a, result.total_score_b);
    }

    fn generation_started(&mut self, census: &Census) {
        log::info!("{}", census);
    }

    fn encounter_played(&mut self, encounter: &Encounter) {
        log::debug!("{}", encounter);
    }
}

/// One recorded reporter event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    MatchStarted { name_a: String, name_b: String },
    RoundPlayed { name_a: String, name_b: String, round: RoundResult },
    MatchFinished { name_a: String, name_b: String, total_a: u32, total_b: u32 },
    Generation(Census),
    Encounter(Encounter),
}

/// Keeps every event in memory, in arrival order
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn rounds(&self) -> impl Iterator<Item = &RoundResult> {
        self.events.iter().filter_map(|event| match event {
            Event::RoundPlayed { round, .. } => Some(round),
            _ => None,
        })
    }

    pub fn censuses(&self) -> impl Iterator<Item = &Census> {
        self.events.iter().filter_map(|event| match event {
            Event::Generation(census) => Some(census),
            _ => None,
        })
    }

    pub fn encounters(&self) -> impl Iterator<Item = &Encounter> {
        self.events.iter().filter_map(|event| match event {
            Event::Encounter(encounter) => Some(encounter),
            _ => None,
        })
    }
}

impl Reporter for Recorder {
    fn match_started(&mut self, name_a: &str, name_b: &str) {
        self.events.push(Event::MatchStarted {
            name_a: name_a.to_string(),
            name_b: name_b.to_string(),
        });
    }

    fn round_played(&mut self, name_a: &str, name_b: &str, round: &RoundResult) {
        self.events.push(Event::RoundPlayed {
            name_a: name_a.to_string(),
            name_b: name_b.to_string(),
            round: round.clone(),
        });
    }

    fn match_finished(&mut self, name_a: &str, name_b: &str, result: &MatchResult) {
        self.events.push(Event::MatchFinished {
            name_a: name_a.to_string(),
            name_b: name_b.to_string(),
            total_a: result.total_score_a,
            total_b: result.total_score_b,
        });
    }

    fn generation_started(&mut self, census: &Census) {
        self.events.push(Event::Generation(census.clone()));
    }

    fn encounter_played(&mut self, encounter: &Encounter) {
        self.events.push(Event::Encounter(*encounter));
    }
}
