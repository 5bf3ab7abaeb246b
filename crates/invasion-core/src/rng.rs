//! Injectable randomness.
//!
//! Everything random in the simulation (seeding, per-move draws) goes
//! through [`RandomSource`], so tests can substitute a scripted sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform integer generator.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// `bound` must be greater than zero.
    fn next(&mut self, bound: usize) -> usize;
}

/// Production randomness backed by [`SmallRng`].
pub struct SmallRngSource(SmallRng);

impl SmallRngSource {
    /// A reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// An unpredictable source for normal runs.
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl RandomSource for SmallRngSource {
    fn next(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Deterministic source replaying a fixed sequence, for tests.
///
/// Values are taken modulo the requested bound and the sequence wraps
/// around when exhausted.
pub struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        assert!(!values.is_empty(), "scripted sequence must not be empty");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next(&mut self, bound: usize) -> usize {
        let value = self.values[self.cursor] % bound;
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
