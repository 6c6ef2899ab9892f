//! Random source capability and the seeded generator behind it
//!
//! Strategies, random pairing and the weak-death coin flip all draw from a
//! [`RandomSource`]. [`SeededRng`] is the deterministic implementation:
//! a simple but effective xorshift algorithm.

use crate::error::{ArenaError, Result};

/// Injected randomness: inclusive integer draws.
///
/// Failures (an empty range, an exhausted source) propagate to the caller
/// unmodified; nothing in the core retries.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64>;

    /// Value 0-99, for percentage checks
    fn percent(&mut self) -> Result<u8> {
        Ok(self.uniform_int(0, 99)? as u8)
    }

    /// Unbiased coin flip
    fn coin_flip(&mut self) -> Result<bool> {
        Ok(self.uniform_int(0, 1)? == 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64> {
        (**self).uniform_int(low, high)
    }
}

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a plain integer seed
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create a new RNG from a 32-byte seed and a stream index
    pub fn from_seed_bytes(seed: &[u8; 32], stream: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

        Self::new(state)
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RandomSource for SeededRng {
    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64> {
        if low > high {
            return Err(ArenaError::EmptyRange { low, high });
        }
        let span = (high as i128 - low as i128 + 1) as u128;
        if span > u64::MAX as u128 {
            return Ok(self.next_u64() as i64);
        }
        let offset = (self.next_u64() as u128) % span;
        Ok((low as i128 + offset as i128) as i64)
    }
}

/// Replays a fixed list of draws, then reports exhaustion.
///
/// Each queued value must lie inside the requested range; it is returned
/// as-is, which makes branch-by-branch strategy tests deterministic.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: std::collections::VecDeque<i64>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = i64>) -> Self {
        Self { draws: draws.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64> {
        if low > high {
            return Err(ArenaError::EmptyRange { low, high });
        }
        let value = self.draws.pop_front().ok_or(ArenaError::Exhausted)?;
        if value < low || value > high {
            return Err(ArenaError::EmptyRange { low: value, high: value });
        }
        Ok(value)
    }
}
