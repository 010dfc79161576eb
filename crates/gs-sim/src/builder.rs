//! Builder for constructing a [`Sim`].

use gs_arrivals::ArrivalSource;
use gs_core::{CarId, SimClock, StationConfig};
use gs_station::QueueSet;
use tracing::debug;

use crate::{RunTotals, Sim, SimResult};

/// Builder for [`Sim<S>`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ReplaySource::new(pairs, params))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ArrivalSource> {
    config: StationConfig,
    source: S,
}

impl<S: ArrivalSource> SimBuilder<S> {
    pub fn new(config: StationConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Validate the configuration, create the pumps, and return a
    /// ready-to-run [`Sim`] positioned at tick 0.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`][crate::SimError::Config] if any parameter is out
    /// of bounds.
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        let queues = QueueSet::new(self.config.pump_ids(), self.config.waiting_line_limit);
        debug!(
            pumps = queues.free_len(),
            waiting_limit = queues.waiting_limit(),
            "station built"
        );

        Ok(Sim {
            clock:       SimClock::new(self.config.simulation_length),
            config:      self.config,
            queues,
            source:      self.source,
            totals:      RunTotals::default(),
            last_car_id: CarId(0),
            finalized:   false,
        })
    }
}
