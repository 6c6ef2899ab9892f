//! WASM bindings for browser replay and simulation

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::random::SeededRng;
use crate::report::{NullReporter, Recorder};
use crate::strategy::describe_strategy;
use crate::{
    play_round_robin, round_robin_indices, run_match, run_until, LifecycleConfig, Population,
    RoundConfig, Strategy, StrategyBase,
};

/// Stream reserved for each kind of seeded run
const MATCH_STREAM: u32 = 0;
const ROUND_ROBIN_STREAM: u32 = 1;
const POPULATION_STREAM: u32 = 2;

fn parse_strategy(json: &str) -> Result<Strategy, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid strategy: {}", e)))
}

fn parse_strategies(json: &str) -> Result<Vec<Strategy>, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid strategy list: {}", e)))
}

fn seeded(seed: &[u8], stream: u32) -> Result<SeededRng, JsError> {
    let seed_arr: [u8; 32] = seed
        .try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;
    Ok(SeededRng::from_seed_bytes(&seed_arr, stream))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay a match with full round-by-round details
///
/// # Arguments
/// * `strategy_a_json` - JSON serialized Strategy for player A
/// * `strategy_b_json` - JSON serialized Strategy for player B
/// * `seed` - 32-byte randomness seed
/// * `rounds` - Number of rounds to play
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn replay_match(
    strategy_a_json: &str,
    strategy_b_json: &str,
    seed: &[u8],
    rounds: u32,
) -> Result<JsValue, JsError> {
    let strategy_a = parse_strategy(strategy_a_json)?;
    let strategy_b = parse_strategy(strategy_b_json)?;
    let config = RoundConfig::new(rounds)?;
    let mut rng = seeded(seed, MATCH_STREAM)?;

    let result = run_match(&strategy_a, &strategy_b, &config, &mut rng, &mut NullReporter)?;

    to_js(&result)
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(strategy_json: &str) -> Result<String, JsError> {
    let strategy = parse_strategy(strategy_json)?;
    Ok(describe_strategy(&strategy))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: &'static str,
    name: &'static str,
    description: String,
}

/// Get all available strategy base types, in registry order
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = Strategy::registry()
        .iter()
        .map(|strategy| StrategyInfo {
            id: strategy.base.id(),
            name: strategy.name(),
            description: describe_strategy(strategy),
        })
        .collect();

    to_js(&types)
}

/// Create a default-parameter strategy JSON from its id
#[wasm_bindgen]
pub fn create_strategy(base: &str) -> Result<String, JsError> {
    let base: StrategyBase = base.parse()?;

    serde_json::to_string(&Strategy::new(base))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Index pairs of a round robin between `participant_count` entrants
#[wasm_bindgen]
pub fn get_round_robin_pairings(participant_count: u32) -> Result<JsValue, JsError> {
    to_js(&round_robin_indices(participant_count as usize))
}

/// Play a full round robin and return the standings
#[wasm_bindgen]
pub fn get_round_robin_standings(
    strategies_json: &str,
    rounds: u32,
    seed: &[u8],
) -> Result<JsValue, JsError> {
    let strategies = parse_strategies(strategies_json)?;
    let config = RoundConfig::new(rounds)?;
    let mut rng = seeded(seed, ROUND_ROBIN_STREAM)?;

    let standings = play_round_robin(&strategies, &config, &mut rng, &mut NullReporter)?;

    to_js(&standings)
}

/// Run the population for up to `generations` generations
///
/// # Returns
/// The census taken at the start of every generation played, stopping
/// early on extinction.
#[wasm_bindgen]
pub fn simulate_population(
    strategies_json: &str,
    initial_count: u32,
    generations: u32,
    seed: &[u8],
) -> Result<JsValue, JsError> {
    let strategies = parse_strategies(strategies_json)?;
    let config = LifecycleConfig {
        initial_count: initial_count as usize,
        ..LifecycleConfig::default()
    };
    let mut rng = seeded(seed, POPULATION_STREAM)?;
    let mut recorder = Recorder::default();

    let mut population = Population::seed(&strategies, config)?;
    run_until(&mut population, &mut rng, &mut recorder, |census| {
        census.generation >= u64::from(generations) || census.is_extinct()
    })?;

    let censuses: Vec<_> = recorder.censuses().cloned().collect();
    to_js(&censuses)
}
