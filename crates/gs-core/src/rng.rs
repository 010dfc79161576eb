//! Deterministic simulation-level RNG wrapper.
//!
//! The same seed always produces the same arrival stream, so two runs with
//! identical `StationConfig`s are tick-for-tick identical.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Owned by the arrival source; never shared.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform integer in `1..=max`.
    ///
    /// # Panics
    /// Panics if `max == 0`.
    #[inline]
    pub fn one_to(&mut self, max: u64) -> u64 {
        self.0.gen_range(1..=max)
    }
}
