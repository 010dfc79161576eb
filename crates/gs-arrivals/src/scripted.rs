//! Pre-decoded arrivals, for fixtures and tests.

use std::collections::VecDeque;

use gs_core::Tick;

use crate::{Arrival, ArrivalError, ArrivalResult, ArrivalSource};

/// Hands out a fixed list of [`Arrival`]s, one per tick.
///
/// # Example
///
/// ```rust
/// use gs_arrivals::{Arrival, ArrivalSource, ScriptedSource};
/// use gs_core::Tick;
///
/// let mut src = ScriptedSource::new([Arrival::car(2), Arrival::none()]);
/// assert!(src.next_arrival(Tick(0)).unwrap().arrived);
/// assert!(!src.next_arrival(Tick(1)).unwrap().arrived);
/// assert!(src.next_arrival(Tick(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    arrivals: VecDeque<Arrival>,
}

impl ScriptedSource {
    pub fn new(arrivals: impl IntoIterator<Item = Arrival>) -> Self {
        Self { arrivals: arrivals.into_iter().collect() }
    }

    /// `n` ticks with no arrivals.
    pub fn quiet(n: usize) -> Self {
        Self::new(std::iter::repeat_n(Arrival::none(), n))
    }

    /// Build from per-tick optional durations: `Some(d)` is a car needing
    /// `d` ticks, `None` is an empty tick.
    pub fn from_durations(ticks: impl IntoIterator<Item = Option<u64>>) -> Self {
        Self::new(ticks.into_iter().map(|d| d.map_or_else(Arrival::none, Arrival::car)))
    }
}

impl ArrivalSource for ScriptedSource {
    fn next_arrival(&mut self, tick: Tick) -> ArrivalResult<Arrival> {
        self.arrivals
            .pop_front()
            .ok_or(ArrivalError::Exhausted { tick })
    }
}
