//! Simulation observer trait for progress reporting and data collection.

use gs_core::{CarId, PumpId, Tick};
use gs_station::Car;

use crate::SimReport;

/// What step ① of a tick produced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArrivalOutcome {
    /// No car showed up.
    NoArrival,
    /// A car joined the waiting line.
    Admitted(CarId),
    /// A car found the line full and left.
    TurnedAway(CarId),
}

impl ArrivalOutcome {
    /// The arriving car, if there was one.
    pub fn car(self) -> Option<CarId> {
        match self {
            ArrivalOutcome::NoArrival => None,
            ArrivalOutcome::Admitted(id) | ArrivalOutcome::TurnedAway(id) => Some(id),
        }
    }
}

/// Per-tick counts, captured after the dispatch step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickSummary {
    pub tick:       Tick,
    pub arrival:    ArrivalOutcome,
    /// Pumps that finished service this tick.
    pub released:   usize,
    /// Cars that started service this tick.
    pub dispatched: usize,
    pub waiting:    usize,
    pub busy:       usize,
    pub free:       usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} waiting", summary.tick, summary.waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick after the arrival step.
    fn on_arrival(&mut self, _tick: Tick, _outcome: ArrivalOutcome) {}

    /// Called when `pump` finishes serving `car`.
    fn on_release(&mut self, _tick: Tick, _pump: PumpId, _car: &Car) {}

    /// Called when `car` starts service at `pump` after waiting `waited`
    /// ticks.
    fn on_dispatch(&mut self, _tick: Tick, _pump: PumpId, _car: &Car, _waited: u64) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after finalization.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
