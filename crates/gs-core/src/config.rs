//! Station configuration and parameter bounds.
//!
//! Every bound is inclusive.  A `StationConfig` is validated once, before a
//! run starts; the tick loop assumes validated inputs.

use crate::{GsError, GsResult, PumpId};

/// Longest run, in ticks.
pub const MAX_SIMULATION_LENGTH: u64 = 10_000;
/// Largest service duration a car may request.
pub const MAX_SERVICE_DURATION: u64 = 500;
/// Largest pump pool.
pub const MAX_PUMPS: u32 = 10;
/// Largest waiting-line capacity.
pub const MAX_WAITING_LINE: usize = 50;

/// Top-level simulation configuration.
///
/// Typically built from command-line flags or loaded from a JSON file by the
/// application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationConfig {
    /// Ticks to simulate, `1..=10_000`.
    pub simulation_length: u64,

    /// Service durations are drawn from `1..=max_service_duration` (max 500).
    pub max_service_duration: u64,

    /// Chance that a car arrives in a given tick, in percent (`1..=100`).
    pub arrival_chance_percent: u32,

    /// Number of pumps, `1..=10`.
    pub pump_count: u32,

    /// Waiting-line capacity, `1..=50`.
    pub waiting_line_limit: usize,

    /// Seed for the random arrival source.  Ignored by replay sources.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,

    /// Identity of the first pump; the rest are numbered consecutively.
    #[cfg_attr(feature = "serde", serde(default = "default_first_pump_id"))]
    pub first_pump_id: PumpId,
}

#[cfg(feature = "serde")]
fn default_first_pump_id() -> PumpId {
    PumpId(1)
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            simulation_length:      100,
            max_service_duration:   10,
            arrival_chance_percent: 50,
            pump_count:             3,
            waiting_line_limit:     10,
            seed:                   0,
            first_pump_id:          PumpId(1),
        }
    }
}

impl StationConfig {
    /// Check every parameter against its inclusive bound.
    ///
    /// Returns the first violation found, naming the field.
    pub fn validate(&self) -> GsResult<()> {
        check_range("simulation_length", self.simulation_length, 1, MAX_SIMULATION_LENGTH)?;
        check_range("max_service_duration", self.max_service_duration, 1, MAX_SERVICE_DURATION)?;
        check_range("arrival_chance_percent", self.arrival_chance_percent as u64, 1, 100)?;
        check_range("pump_count", self.pump_count as u64, 1, MAX_PUMPS as u64)?;
        check_range("waiting_line_limit", self.waiting_line_limit as u64, 1, MAX_WAITING_LINE as u64)?;
        if self.first_pump_id.0 == 0 {
            return Err(GsError::Config("first_pump_id must be at least 1".into()));
        }
        if self.first_pump_id.0.checked_add(self.pump_count).is_none() {
            return Err(GsError::Config(format!(
                "first_pump_id {} leaves no room for {} pumps",
                self.first_pump_id, self.pump_count
            )));
        }
        Ok(())
    }

    /// The identities of every pump, in construction order.
    pub fn pump_ids(&self) -> impl Iterator<Item = PumpId> + use<> {
        let first = self.first_pump_id.0;
        (first..first + self.pump_count).map(PumpId)
    }
}

fn check_range(field: &str, value: u64, min: u64, max: u64) -> GsResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GsError::Config(format!(
            "{field} must be in {min}..={max}, got {value}"
        )))
    }
}
