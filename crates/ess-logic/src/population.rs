//! Population members and the generation lifecycle
//!
//! An [`Entity`] carries a species, an age, a fitness score and one
//! dedicated [`StrategyInstance`] per opponent it has met. A
//! [`Population`] advances one generation at a time: census, one round of
//! randomly paired play, then deaths and births. The transition reads the
//! current generation as a snapshot and builds the next one separately.
//! Every round played is returned as an [`Encounter`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::game::Round;
use crate::matchmaker::play_entities;
use crate::pairing::random_pairing;
use crate::random::RandomSource;
use crate::report::Reporter;
use crate::strategy::{Strategy, StrategyBase, StrategyInstance};
use crate::{fitness_delta, Outcome};

/// Entities older than this die at the end of the generation
pub const MAX_AGE: u32 = 50;

/// Entities older than this reproduce at the end of each generation
pub const MATURITY_AGE: u32 = 45;

/// Hit points of a newborn
pub const INITIAL_FITNESS: i32 = 1;

/// Identity of a population member, unique within its population
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A living population member
#[derive(Clone, Debug)]
pub struct Entity {
    id: EntityId,
    strategy: Strategy,
    /// Opponent identity -> the instance this entity plays against it
    memory: HashMap<EntityId, StrategyInstance>,
    age: u32,
    fitness: i32,
    has_reproduced: bool,
}

impl Entity {
    fn new(id: EntityId, strategy: Strategy) -> Self {
        Self {
            id,
            strategy,
            memory: HashMap::new(),
            age: 0,
            fitness: INITIAL_FITNESS,
            has_reproduced: false,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn fitness(&self) -> i32 {
        self.fitness
    }

    pub fn has_reproduced(&self) -> bool {
        self.has_reproduced
    }

    /// Number of distinct opponents met so far
    pub fn acquaintances(&self) -> usize {
        self.memory.len()
    }

    pub fn remembers(&self, opponent: EntityId) -> bool {
        self.memory.contains_key(&opponent)
    }

    /// The instance reserved for `opponent`, created on first encounter.
    ///
    /// # Panics
    /// If `opponent` is this entity's own identity.
    pub fn strategy_for(&mut self, opponent: EntityId) -> &mut StrategyInstance {
        assert_ne!(
            opponent, self.id,
            "entity {} cannot keep a relationship with itself",
            self.id
        );
        let strategy = self.strategy;
        self.memory
            .entry(opponent)
            .or_insert_with(|| strategy.instantiate())
    }

    /// Count one survived round and its payoff
    pub fn apply_result(&mut self, outcome: Outcome) {
        self.age += 1;
        self.fitness += fitness_delta(outcome);
    }

    fn reproduce(&mut self, child: EntityId) -> Entity {
        self.has_reproduced = true;
        Entity::new(child, self.strategy)
    }
}

/// Lifecycle thresholds and the starting population size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub max_age: u32,
    pub maturity_age: u32,
    /// Entities spawned per species at initialization
    pub initial_count: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_age: MAX_AGE,
            maturity_age: MATURITY_AGE,
            initial_count: 10,
        }
    }
}

impl LifecycleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.maturity_age > self.max_age {
            return Err(ArenaError::config(format!(
                "maturity age {} exceeds max age {}",
                self.maturity_age, self.max_age
            )));
        }
        if self.initial_count < 1 {
            return Err(ArenaError::config("initial count must be at least 1"));
        }
        Ok(())
    }
}

/// Per-species head count at the start of a generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub generation: u64,
    pub population: usize,
    pub counts: BTreeMap<String, usize>,
}

impl Census {
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn is_extinct(&self) -> bool {
        self.population == 0
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation {}: {} alive", self.generation, self.population)?;
        for (name, count) in &self.counts {
            write!(f, "\n\t{}: {}", name, count)?;
        }
        Ok(())
    }
}

/// One round played between two population members
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id_a: EntityId,
    pub id_b: EntityId,
    pub species_a: StrategyBase,
    pub species_b: StrategyBase,
    pub round: Round,
}

impl fmt::Display for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.species_a.name(),
            self.id_a,
            self.round,
            self.species_b.name(),
            self.id_b
        )
    }
}

/// The evolving collection of entities
#[derive(Clone, Debug)]
pub struct Population {
    entities: Vec<Entity>,
    next_id: u64,
    generation: u64,
    config: LifecycleConfig,
}

impl Population {
    pub fn new(config: LifecycleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entities: Vec::new(),
            next_id: 0,
            generation: 0,
            config,
        })
    }

    /// Spawn `config.initial_count` fresh entities of every species
    pub fn seed(strategies: &[Strategy], config: LifecycleConfig) -> Result<Self> {
        if strategies.is_empty() {
            return Err(ArenaError::config("cannot seed a population without strategies"));
        }
        for strategy in strategies {
            strategy.params.validate()?;
        }

        let mut population = Self::new(config)?;
        for strategy in strategies {
            for _ in 0..config.initial_count {
                population.spawn(*strategy);
            }
        }

        log::info!(
            "seeded {} entities across {} species",
            population.len(),
            strategies.len()
        );
        Ok(population)
    }

    /// Add one newborn entity
    pub fn spawn(&mut self, strategy: Strategy) -> EntityId {
        let id = take_id(&mut self.next_id);
        self.entities.push(Entity::new(id, strategy));
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Generations completed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn census(&self) -> Census {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.name().to_string()).or_insert(0) += 1;
        }
        Census {
            generation: self.generation,
            population: self.entities.len(),
            counts,
        }
    }

    /// Randomly pair everyone and play one round per pair.
    ///
    /// With an odd head count one entity sits the generation out.
    pub fn play_generation(&mut self, rng: &mut dyn RandomSource) -> Result<Vec<Encounter>> {
        let pairing = random_pairing(self.entities.len(), rng)?;
        let mut encounters = Vec::with_capacity(pairing.pairs.len());

        for &(i, j) in &pairing.pairs {
            let (a, b) = pair_mut(&mut self.entities, i, j);
            let round = play_entities(a, b, rng)?;
            encounters.push(Encounter {
                id_a: a.id,
                id_b: b.id,
                species_a: a.strategy.base,
                species_b: b.strategy.base,
                round,
            });
        }

        Ok(encounters)
    }

    /// Apply deaths and births, producing the next generation.
    ///
    /// For each entity of the current generation, in order:
    /// 1. older than `max_age`: removed, leaving one child if it never reproduced
    /// 2. negative fitness: removed on a coin flip
    /// 3. older than `maturity_age`: one child appended, even if step 2 removed it
    ///
    /// Survivors keep their order and children follow them. The population
    /// is unchanged when the random source fails.
    pub fn advance_generation(&mut self, rng: &mut dyn RandomSource) -> Result<()> {
        let config = self.config;

        // every coin is drawn before the first entity is touched
        let mut weak_deaths = Vec::with_capacity(self.entities.len());
        for entity in &self.entities {
            let weak = entity.age <= config.max_age && entity.fitness < 0 && rng.coin_flip()?;
            weak_deaths.push(weak);
        }

        let current = std::mem::take(&mut self.entities);
        let mut survivors = Vec::with_capacity(current.len());
        let mut births = Vec::new();

        for (mut entity, weak_death) in current.into_iter().zip(weak_deaths) {
            if entity.age > config.max_age {
                if !entity.has_reproduced {
                    births.push(entity.reproduce(take_id(&mut self.next_id)));
                }
                log::trace!("{} {} died of old age", entity.name(), entity.id);
                continue;
            }

            if entity.age > config.maturity_age {
                let child = entity.reproduce(take_id(&mut self.next_id));
                log::trace!("{} {} gave birth to {}", entity.name(), entity.id, child.id);
                births.push(child);
            }

            if weak_death {
                log::trace!("{} {} died of weakness", entity.name(), entity.id);
            } else {
                survivors.push(entity);
            }
        }

        survivors.extend(births);
        self.entities = survivors;
        self.generation += 1;
        Ok(())
    }

    /// One full generation: census, play, lifecycle transition.
    ///
    /// On error the rounds already played keep their effect on ages and
    /// fitness.
    pub fn step(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> Result<()> {
        let census = self.census();
        reporter.generation_started(&census);

        for encounter in &self.play_generation(rng)? {
            reporter.encounter_played(encounter);
        }
        self.advance_generation(rng)
    }
}

/// Advance `population` until `should_stop` accepts the current census
pub fn run_until<F>(
    population: &mut Population,
    rng: &mut dyn RandomSource,
    reporter: &mut dyn Reporter,
    mut should_stop: F,
) -> Result<()>
where
    F: FnMut(&Census) -> bool,
{
    while !should_stop(&population.census()) {
        population.step(rng, reporter)?;
    }
    Ok(())
}

fn take_id(next_id: &mut u64) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}

/// Two distinct mutable elements of one slice
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "cannot pair an element with itself");
    if i < j {
        let (low, high) = items.split_at_mut(j);
        (&mut low[i], &mut high[0])
    } else {
        let (low, high) = items.split_at_mut(i);
        (&mut high[0], &mut low[j])
    }
}
