//! The `ArrivalSource` trait and pair decoding.

use gs_core::{StationConfig, Tick};

use crate::ArrivalResult;

/// What happened at the station entrance during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Arrival {
    pub arrived:  bool,
    /// Service the car would need, in ticks.  Always in
    /// `1..=max_service_duration`, even when `arrived` is `false`.
    pub duration: u64,
}

impl Arrival {
    /// A car arrives needing `duration` ticks.
    pub fn car(duration: u64) -> Self {
        Self { arrived: true, duration }
    }

    /// Nobody arrives.
    pub fn none() -> Self {
        Self { arrived: false, duration: 1 }
    }
}

/// The two parameters needed to decode a raw `(data1, data2)` pair.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ArrivalParams {
    pub chance_percent: u32,
    pub max_duration:   u64,
}

impl ArrivalParams {
    pub fn from_config(config: &StationConfig) -> Self {
        Self {
            chance_percent: config.arrival_chance_percent,
            max_duration:   config.max_service_duration,
        }
    }

    /// Decode one raw pair into an [`Arrival`].
    ///
    /// Negative inputs are reduced with the Euclidean remainder, so the roll
    /// is always in `1..=100` and the duration in `1..=max_duration`.
    pub fn combine(&self, data1: i64, data2: i64) -> Arrival {
        let roll = data1.rem_euclid(100) + 1;
        let duration = data2.rem_euclid(self.max_duration as i64) as u64 + 1;
        Arrival {
            arrived: roll <= self.chance_percent as i64,
            duration,
        }
    }
}

/// Supplies one [`Arrival`] per tick, in tick order.
///
/// The engine calls `next_arrival` exactly once per tick, so a source may
/// assume consecutive calls refer to consecutive ticks.
pub trait ArrivalSource {
    /// Arrival data for `tick`.
    ///
    /// # Errors
    ///
    /// Finite sources return [`ArrivalError::Exhausted`][crate::ArrivalError::Exhausted]
    /// once they run out; the engine treats that as fatal for the run.
    fn next_arrival(&mut self, tick: Tick) -> ArrivalResult<Arrival>;
}

impl<S: ArrivalSource + ?Sized> ArrivalSource for Box<S> {
    fn next_arrival(&mut self, tick: Tick) -> ArrivalResult<Arrival> {
        (**self).next_arrival(tick)
    }
}
