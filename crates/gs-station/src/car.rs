//! The `Car` record.

use gs_core::{CarId, Tick};

/// A car that arrived at the station.
///
/// Immutable after creation.  Owned by the waiting line until dispatched,
/// then by the pump serving it, then dropped when service completes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    id:       CarId,
    duration: u64,
    arrival:  Tick,
}

impl Car {
    /// Create a car that needs `duration` ticks of service.
    ///
    /// `duration` is expected to be positive; a zero-length service would
    /// complete in the tick it started and never be released.
    pub fn new(id: CarId, duration: u64, arrival: Tick) -> Self {
        debug_assert!(duration > 0, "service duration must be positive");
        Self { id, duration, arrival }
    }

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    /// Service duration in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Tick at which the car arrived.
    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    /// Ticks spent waiting if service starts at `now`.
    #[inline]
    pub fn waited_until(&self, now: Tick) -> u64 {
        now.since(self.arrival)
    }
}
