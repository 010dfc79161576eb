//! The `Pump` server and its lifetime statistics.
//!
//! # Interval model
//!
//! A pump alternates between idle and busy intervals.  It tracks only the
//! *current* interval `[interval_start, interval_end)`:
//!
//! ```text
//! start_service(car, now)  idle [start, now) → free_ticks;   busy = [now, now + duration)
//! finish_service()         busy [start, end) → busy_ticks;   idle starts at end
//! close_interval(end, s)   open [start, end) → ticks of s;   start moves to end
//! ```
//!
//! Every tick of a pump's life lands in exactly one interval, so after the
//! run is finalized `free_ticks + busy_ticks` equals the run length.

use std::fmt;

use gs_core::{PumpId, Tick};

use crate::Car;

/// Which pool a pump belonged to when its statistics were read.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PumpState {
    Free,
    Busy,
}

impl fmt::Display for PumpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PumpState::Free => f.write_str("free"),
            PumpState::Busy => f.write_str("busy"),
        }
    }
}

/// Cumulative statistics for one pump.  Every field only ever grows.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PumpStats {
    pub free_ticks:  u64,
    pub busy_ticks:  u64,
    pub cars_served: u64,
}

impl PumpStats {
    /// `busy_ticks / cars_served`, or `None` if the pump never served a car.
    pub fn average_service_time(&self) -> Option<f64> {
        (self.cars_served > 0).then(|| self.busy_ticks as f64 / self.cars_served as f64)
    }

    /// Total ticks accounted to either state so far.
    #[inline]
    pub fn accounted_ticks(&self) -> u64 {
        self.free_ticks + self.busy_ticks
    }
}

/// A single pump.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pump {
    id:             PumpId,
    interval_start: Tick,
    interval_end:   Tick,
    current_car:    Option<Car>,
    stats:          PumpStats,
}

impl Pump {
    /// A pump that has been idle since tick 0.
    pub fn new(id: PumpId) -> Self {
        Self {
            id,
            interval_start: Tick::ZERO,
            interval_end:   Tick::ZERO,
            current_car:    None,
            stats:          PumpStats::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> PumpId {
        self.id
    }

    #[inline]
    pub fn interval_start(&self) -> Tick {
        self.interval_start
    }

    /// End of the current busy interval: the tick at which the car being
    /// served finishes.  Only meaningful while the pump is busy.
    #[inline]
    pub fn completion_tick(&self) -> Tick {
        self.interval_end
    }

    /// The car being served, if any.
    #[inline]
    pub fn current_car(&self) -> Option<&Car> {
        self.current_car.as_ref()
    }

    #[inline]
    pub fn stats(&self) -> &PumpStats {
        &self.stats
    }

    /// Idle → busy.  Closes the idle interval at `now` and starts serving
    /// `car` over `[now, now + car.duration())`.
    pub fn start_service(&mut self, car: Car, now: Tick) {
        debug_assert!(self.current_car.is_none(), "pump {} is already serving", self.id);
        self.stats.free_ticks += now.since(self.interval_start);
        self.interval_start = now;
        self.interval_end = now.offset(car.duration());
        self.current_car = Some(car);
        self.stats.cars_served += 1;
    }

    /// Busy → idle.  Closes the busy interval at its scheduled end, starts the
    /// next idle interval there, and hands back the finished car.
    pub fn finish_service(&mut self) -> Option<Car> {
        self.stats.busy_ticks += self.interval_end.since(self.interval_start);
        self.interval_start = self.interval_end;
        self.current_car.take()
    }

    /// Account the open interval `[interval_start, end)` to `state` without
    /// completing any service.  Used only at the end of a run.
    ///
    /// Calling it again with the same `end` adds nothing.
    pub fn close_interval(&mut self, end: Tick, state: PumpState) {
        let ticks = end.0.saturating_sub(self.interval_start.0);
        match state {
            PumpState::Free => self.stats.free_ticks += ticks,
            PumpState::Busy => self.stats.busy_ticks += ticks,
        }
        self.interval_start = self.interval_start.max(end);
    }
}

impl fmt::Display for Pump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pump {} [{}, {})", self.id, self.interval_start, self.interval_end)?;
        if let Some(car) = &self.current_car {
            write!(f, " serving car {}", car.id())?;
        }
        Ok(())
    }
}
