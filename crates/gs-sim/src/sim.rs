//! The `Sim` struct and its tick loop.

use gs_arrivals::{ArrivalError, ArrivalSource};
use gs_core::{CarId, SimClock, StationConfig, Tick};
use gs_station::{Car, QueueSet};
use tracing::{debug, info, trace};

use crate::{ArrivalOutcome, SimError, SimObserver, SimReport, SimResult, TickSummary};

/// Run-wide accumulators.  Every field only ever grows.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RunTotals {
    /// Cars that showed up, admitted or not.
    pub arrived:    u64,
    /// Cars turned away because the waiting line was full.
    pub rejected:   u64,
    /// Cars that started service (including any still at a pump at the end).
    pub served:     u64,
    /// Sum of `dispatch tick - arrival tick` over served cars.
    pub total_wait: u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns all run state: the queues, the arrival source, the clock and
/// the accumulators.  Nothing is shared or global, so independent runs can
/// coexist.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ArrivalSource> {
    /// Validated run parameters.
    pub config: StationConfig,

    /// Current tick and the exclusive end tick.
    pub clock: SimClock,

    /// Waiting line, free pool, and busy pool.
    pub queues: QueueSet,

    /// Supplies one arrival record per tick.
    pub source: S,

    pub totals: RunTotals,

    /// Identity of the most recently arrived car; `CarId(0)` before any.
    pub(crate) last_car_id: CarId,

    /// Set once pump intervals have been closed.
    pub(crate) finalized: bool,
}

impl<S: ArrivalSource> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run every remaining tick, finalize, and return the report.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// # Errors
    ///
    /// Stops at the first tick whose arrival data cannot be read.  The run is
    /// left unfinalized in that case.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            ticks = self.config.simulation_length,
            pumps = self.config.pump_count,
            waiting_limit = self.config.waiting_line_limit,
            "simulation started"
        );

        while !self.clock.is_finished() {
            self.step(observer)?;
        }
        self.finalize();

        let report = self.report();
        observer.on_sim_end(&report);
        info!(
            arrived = report.arrived,
            served = report.served,
            rejected = report.rejected,
            total_wait = report.total_wait,
            "simulation finished"
        );
        Ok(report)
    }

    /// Run up to `n` ticks from the current position without finalizing.
    ///
    /// Never steps past the configured end tick.  Useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n.min(self.clock.remaining()) {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Close every pump's open interval at the current tick.
    ///
    /// After a full run the current tick is the configured simulation length.
    /// Busy pumps keep their car and stay in the busy pool; no further
    /// dispatch happens.  Idempotent.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        let end = self.clock.current_tick;
        self.queues.close_all_intervals(end);
        self.finalized = true;
        debug!(
            %end,
            busy = self.queues.busy_len(),
            free = self.queues.free_len(),
            waiting = self.queues.waiting_len(),
            "pump intervals closed"
        );
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Snapshot the accumulators and every pump's statistics.
    pub fn report(&self) -> SimReport {
        SimReport::collect(self.clock.current_tick, &self.totals, &self.queues)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.finalized {
            return Err(SimError::AlreadyFinalized);
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        trace!(%now, "tick start");

        let summary = self.process_tick(now, observer)?;

        observer.on_tick_end(&summary);
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        // ── ① Arrival ─────────────────────────────────────────────────────
        let arrival = self.source.next_arrival(now)?;
        let outcome = if arrival.arrived {
            self.arrive(now, arrival.duration)?
        } else {
            ArrivalOutcome::NoArrival
        };
        observer.on_arrival(now, outcome);

        // ── ② Release ─────────────────────────────────────────────────────
        let released = self.release_due(now, observer);

        // ── ③ Dispatch ────────────────────────────────────────────────────
        let dispatched = self.dispatch_waiting(now, observer);

        Ok(TickSummary {
            tick:    now,
            arrival: outcome,
            released,
            dispatched,
            waiting: self.queues.waiting_len(),
            busy:    self.queues.busy_len(),
            free:    self.queues.free_len(),
        })
    }

    /// A car shows up.  It takes the next identity whether or not it gets in.
    ///
    /// A service duration outside `1..=max_service_duration` is a source
    /// error; no identity is consumed for it.
    fn arrive(&mut self, now: Tick, duration: u64) -> SimResult<ArrivalOutcome> {
        let max = self.config.max_service_duration;
        if !(1..=max).contains(&duration) {
            return Err(ArrivalError::InvalidDuration { tick: now, duration, max }.into());
        }

        self.last_car_id = self.last_car_id.next();
        self.totals.arrived += 1;

        let id = self.last_car_id;
        if self.queues.admit_car(Car::new(id, duration, now)) {
            debug!(%now, car = %id, duration, "car enters line");
            Ok(ArrivalOutcome::Admitted(id))
        } else {
            self.totals.rejected += 1;
            debug!(%now, car = %id, "car left because line is too long");
            Ok(ArrivalOutcome::TurnedAway(id))
        }
    }

    /// Release every busy pump whose service ends by `now`, in completion
    /// order.  Returns how many were released.
    fn release_due<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let mut released = 0;
        // The busy pool is ordered by completion tick, so the first pump not
        // due at `now` means none of the rest are.
        while let Some(mut pump) = self.queues.pop_busy_due(now) {
            if let Some(car) = pump.finish_service() {
                debug!(%now, car = %car.id(), pump = %pump.id(), "car finished, pump is free");
                observer.on_release(now, pump.id(), &car);
            }
            self.queues.push_free_pump(pump);
            released += 1;
        }
        released
    }

    /// Pair waiting cars with free pumps until one side runs out.  Returns
    /// how many cars started service.
    fn dispatch_waiting<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let mut dispatched = 0;
        while self.queues.has_waiting_cars() && self.queues.has_free_pumps() {
            let (Some(car), Some(mut pump)) =
                (self.queues.pop_waiting_car(), self.queues.pop_free_pump())
            else {
                break;
            };

            let waited = car.waited_until(now);
            self.totals.total_wait += waited;
            self.totals.served += 1;
            debug!(%now, car = %car.id(), pump = %pump.id(), waited, "car begins service");
            observer.on_dispatch(now, pump.id(), &car, waited);

            pump.start_service(car, now);
            self.queues.push_busy_pump(pump);
            dispatched += 1;
        }
        dispatched
    }
}
