//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  The simulator defines
//! its own logical clock; ticks carry no wall-clock meaning.  Using an integer
//! tick keeps every interval computation exact.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of a run against its exclusive end tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// First tick that is *not* simulated.
    pub end_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 that runs for `length` ticks.
    pub fn new(length: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            end_tick: Tick(length),
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` once every tick in `[0, end_tick)` has been processed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.end_tick
    }

    /// Ticks left before the end of the run.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end_tick.0.saturating_sub(self.current_tick.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_tick, self.end_tick)
    }
}
