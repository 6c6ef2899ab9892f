use anyhow::{bail, Context, Result};
use clap::Args;
use ess_logic::{LifecycleConfig, RoundConfig, SeededRng, Strategy, StrategyBase, StrategyParams};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    fs,
    ops::RangeBounds,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

/// Run configuration.
///
/// Loaded from an optional TOML file, every field defaulted, then
/// overridden by command-line flags. See [`ArenaConfig::load`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Random seed; drawn from the clock when unset.
    pub seed: Option<u64>,
    /// Rounds per round-robin match.
    pub rounds: u32,

    /// Entities spawned per species.
    pub initial_count: usize,
    /// Entities older than this die.
    pub max_age: u32,
    /// Entities older than this reproduce.
    pub maturity_age: u32,
    /// Stop after this many generations; unbounded when unset.
    pub generations: Option<u64>,
    /// Pause between generations, in milliseconds.
    pub pace_ms: u64,

    /// Species ids taking part; the full registry when unset.
    pub strategies: Option<Vec<String>>,
    /// Forgiveness chance of Generous tit for tat (0-100).
    pub cooperation_probability: u8,
    /// Probe chance of the probers (0-100).
    pub defection_probability: u8,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let lifecycle = LifecycleConfig::default();
        let params = StrategyParams::default();
        Self {
            seed: None,
            rounds: RoundConfig::default().rounds,
            initial_count: lifecycle.initial_count,
            max_age: lifecycle.max_age,
            maturity_age: lifecycle.maturity_age,
            generations: None,
            pace_ms: 0,
            strategies: None,
            cooperation_probability: params.cooperation_probability,
            defection_probability: params.defection_probability,
        }
    }
}

/// Command-line overrides of [`ArenaConfig`] fields.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[arg(long, global = true)]
    pub rounds: Option<u32>,

    #[arg(long, global = true)]
    pub initial_count: Option<usize>,

    #[arg(long, global = true)]
    pub generations: Option<u64>,

    #[arg(long, global = true)]
    pub pace_ms: Option<u64>,

    /// Comma-separated species ids
    #[arg(long, global = true, value_delimiter = ',')]
    pub strategies: Option<Vec<String>>,
}

impl ArenaConfig {
    /// Load the configuration file if given, apply overrides and validate.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting values are invalid.
    pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match file {
            Some(file) => Self::from_file(file)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate().context("failed to validate config")?;
        Ok(config)
    }

    fn from_file(file: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents).with_context(|| format!("failed to parse {file:?}"))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to deserialize config")
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(rounds) = overrides.rounds {
            self.rounds = rounds;
        }
        if let Some(initial_count) = overrides.initial_count {
            self.initial_count = initial_count;
        }
        if let Some(generations) = overrides.generations {
            self.generations = Some(generations);
        }
        if let Some(pace_ms) = overrides.pace_ms {
            self.pace_ms = pace_ms;
        }
        if let Some(strategies) = &overrides.strategies {
            self.strategies = Some(strategies.clone());
        }
    }

    fn validate(&self) -> Result<()> {
        check_num(self.rounds, 1..=100_000).context("invalid number of rounds")?;
        check_num(self.initial_count, 1..=100_000).context("invalid initial count")?;
        check_num(self.max_age, 1..=10_000).context("invalid max age")?;
        check_num(self.maturity_age, 0..=self.max_age).context("invalid maturity age")?;
        check_num(self.pace_ms, 0..=60_000).context("invalid pace")?;
        check_num(self.cooperation_probability, 0..=100)
            .context("invalid cooperation probability")?;
        check_num(self.defection_probability, 0..=100).context("invalid defection probability")?;

        if let Some(ids) = &self.strategies {
            if ids.is_empty() {
                bail!("strategy list must not be empty");
            }
        }
        self.strategies().context("invalid strategy list")?;

        Ok(())
    }

    pub fn round_config(&self) -> Result<RoundConfig> {
        Ok(RoundConfig::new(self.rounds)?)
    }

    pub fn lifecycle(&self) -> LifecycleConfig {
        LifecycleConfig {
            max_age: self.max_age,
            maturity_age: self.maturity_age,
            initial_count: self.initial_count,
        }
    }

    /// The participating species, all sharing the configured parameters.
    pub fn strategies(&self) -> Result<Vec<Strategy>> {
        let params = StrategyParams {
            cooperation_probability: self.cooperation_probability,
            defection_probability: self.defection_probability,
        };
        let bases = match &self.strategies {
            Some(ids) => ids
                .iter()
                .map(|id| id.trim().parse::<StrategyBase>())
                .collect::<Result<Vec<_>, _>>()?,
            None => StrategyBase::ALL.to_vec(),
        };
        Ok(bases
            .into_iter()
            .map(|base| Strategy::with_params(base, params))
            .collect())
    }

    /// Seeded random source; an unset seed is drawn from the clock and logged.
    pub fn rng(&self) -> SeededRng {
        let seed = self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        });
        log::info!("seed: {seed}");
        SeededRng::new(seed)
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
