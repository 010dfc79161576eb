//! Plain data row types written by output backends.

use gs_sim::{ArrivalOutcome, PumpReport, TickSummary};

/// Counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    /// `"none"`, `"admitted"`, or `"turned_away"`.
    pub arrival:    &'static str,
    /// Identity of the arriving car, if any.
    pub car_id:     Option<u32>,
    pub released:   u64,
    pub dispatched: u64,
    pub waiting:    u64,
    pub busy:       u64,
    pub free:       u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        let arrival = match s.arrival {
            ArrivalOutcome::NoArrival     => "none",
            ArrivalOutcome::Admitted(_)   => "admitted",
            ArrivalOutcome::TurnedAway(_) => "turned_away",
        };
        Self {
            tick:       s.tick.0,
            arrival,
            car_id:     s.arrival.car().map(|id| id.0),
            released:   s.released as u64,
            dispatched: s.dispatched as u64,
            waiting:    s.waiting as u64,
            busy:       s.busy as u64,
            free:       s.free as u64,
        }
    }
}

/// Lifetime statistics of one pump at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpStatsRow {
    pub pump_id:              u32,
    /// `"busy"` or `"free"`.
    pub state:                &'static str,
    pub free_ticks:           u64,
    pub busy_ticks:           u64,
    pub cars_served:          u64,
    pub average_service_time: Option<f64>,
}

impl From<&PumpReport> for PumpStatsRow {
    fn from(p: &PumpReport) -> Self {
        Self {
            pump_id:              p.id.0,
            state:                match p.state {
                gs_station::PumpState::Busy => "busy",
                gs_station::PumpState::Free => "free",
            },
            free_ticks:           p.stats.free_ticks,
            busy_ticks:           p.stats.busy_ticks,
            cars_served:          p.stats.cars_served,
            average_service_time: p.average_service_time(),
        }
    }
}
