//! End-of-run report: the queryable output surface of a simulation.

use gs_core::{PumpId, Tick};
use gs_station::{PumpState, PumpStats, QueueSet};

use crate::RunTotals;

/// Statistics for one pump at report time.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PumpReport {
    pub id:    PumpId,
    /// Pool the pump was in when the report was taken.
    pub state: PumpState,
    pub stats: PumpStats,
}

impl PumpReport {
    /// Mean busy ticks per car served, if the pump served any.
    pub fn average_service_time(&self) -> Option<f64> {
        self.stats.average_service_time()
    }
}

/// Accumulated results of a run.
///
/// `pumps` lists the busy pool first in completion order, then the free pool
/// in dispatch order.
#[derive(Clone, PartialEq, Debug)]
pub struct SimReport {
    /// Ticks processed.  Equals the simulation length after a full run.
    pub ticks:      u64,
    /// Cars that showed up, including any still waiting at the end.
    pub arrived:    u64,
    pub rejected:   u64,
    pub served:     u64,
    pub total_wait: u64,
    /// Cars left in the waiting line at the end.
    pub waiting:    usize,
    pub busy_pumps: usize,
    pub free_pumps: usize,
    pub pumps:      Vec<PumpReport>,
}

impl SimReport {
    pub(crate) fn collect(now: Tick, totals: &RunTotals, queues: &QueueSet) -> Self {
        Self {
            ticks:      now.0,
            arrived:    totals.arrived,
            rejected:   totals.rejected,
            served:     totals.served,
            total_wait: totals.total_wait,
            waiting:    queues.waiting_len(),
            busy_pumps: queues.busy_len(),
            free_pumps: queues.free_len(),
            pumps:      queues
                .pumps()
                .map(|(pump, state)| PumpReport { id: pump.id(), state, stats: *pump.stats() })
                .collect(),
        }
    }

    /// Cars that were either served or turned away.
    ///
    /// Cars still in the waiting line at the end are in neither group.
    pub fn total_arrivals(&self) -> u64 {
        self.served + self.rejected
    }

    /// Mean waiting time over served cars, or `None` if none were served.
    pub fn average_wait(&self) -> Option<f64> {
        (self.served > 0).then(|| self.total_wait as f64 / self.served as f64)
    }

    /// Pumps that were in the busy pool at report time.
    pub fn busy(&self) -> impl Iterator<Item = &PumpReport> {
        self.pumps.iter().filter(|p| p.state == PumpState::Busy)
    }

    /// Pumps that were in the free pool at report time.
    pub fn free(&self) -> impl Iterator<Item = &PumpReport> {
        self.pumps.iter().filter(|p| p.state == PumpState::Free)
    }
}
