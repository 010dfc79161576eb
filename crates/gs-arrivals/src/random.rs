//! Seeded pseudo-random arrivals.

use gs_core::{SimRng, StationConfig, Tick};

use crate::{Arrival, ArrivalParams, ArrivalResult, ArrivalSource};

/// Draws an independent arrival roll and duration every tick.
///
/// Never exhausts.  Two sources built with the same seed and parameters
/// produce identical streams.
pub struct RandomSource {
    rng:    SimRng,
    params: ArrivalParams,
}

impl RandomSource {
    pub fn new(seed: u64, params: ArrivalParams) -> Self {
        Self { rng: SimRng::new(seed), params }
    }

    /// Build from a config, using its `seed`.
    pub fn from_config(config: &StationConfig) -> Self {
        Self::new(config.seed, ArrivalParams::from_config(config))
    }
}

impl ArrivalSource for RandomSource {
    fn next_arrival(&mut self, _tick: Tick) -> ArrivalResult<Arrival> {
        let roll = self.rng.one_to(100);
        let duration = self.rng.one_to(self.params.max_duration);
        Ok(Arrival {
            arrived: roll <= self.params.chance_percent as u64,
            duration,
        })
    }
}
