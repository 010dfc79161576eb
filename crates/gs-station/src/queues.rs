//! `QueueSet` — the three queues of the station.
//!
//! | Queue        | Structure                         | Removal order                  |
//! |--------------|-----------------------------------|--------------------------------|
//! | waiting line | `VecDeque<Car>`, bounded          | FIFO (longest-waiting first)   |
//! | free pool    | `VecDeque<Pump>`                  | FIFO (longest-idle first)      |
//! | busy pool    | `BTreeMap<BusyKey, Pump>`         | ascending completion tick      |
//!
//! The busy pool is keyed by `(completion tick, insertion sequence)`.  The
//! sequence number makes the key unique and breaks ties in insertion order,
//! so the release order of pumps finishing in the same tick is
//! deterministic.  Insert, peek, and pop are all O(log P).

use std::collections::{BTreeMap, VecDeque};

use gs_core::{PumpId, Tick};

use crate::{Car, Pump, PumpState};

/// Ordering key of the busy pool.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct BusyKey {
    completion: Tick,
    seq:        u64,
}

/// Owns the waiting line and both pump pools.
#[derive(Debug)]
pub struct QueueSet {
    waiting:       VecDeque<Car>,
    waiting_limit: usize,
    free:          VecDeque<Pump>,
    busy:          BTreeMap<BusyKey, Pump>,
    /// Next busy-pool insertion sequence number.
    next_seq:      u64,
}

impl QueueSet {
    /// Build a station whose pumps all start in the free pool, in the order
    /// yielded by `pump_ids`.
    pub fn new(pump_ids: impl IntoIterator<Item = PumpId>, waiting_limit: usize) -> Self {
        let free: VecDeque<Pump> = pump_ids.into_iter().map(Pump::new).collect();
        Self {
            waiting: VecDeque::with_capacity(waiting_limit),
            waiting_limit,
            free,
            busy: BTreeMap::new(),
            next_seq: 0,
        }
    }

    // ── Waiting line ──────────────────────────────────────────────────────

    /// Append `car` to the waiting line if there is room.
    ///
    /// Returns `false` (and drops the car) when the line is at capacity; the
    /// line is left untouched in that case.
    pub fn admit_car(&mut self, car: Car) -> bool {
        if self.is_line_full() {
            return false;
        }
        self.waiting.push_back(car);
        true
    }

    /// Remove the longest-waiting car.
    pub fn pop_waiting_car(&mut self) -> Option<Car> {
        self.waiting.pop_front()
    }

    /// `true` when another arrival would be turned away.
    #[inline]
    pub fn is_line_full(&self) -> bool {
        self.waiting.len() >= self.waiting_limit
    }

    #[inline]
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    #[inline]
    pub fn waiting_limit(&self) -> usize {
        self.waiting_limit
    }

    #[inline]
    pub fn has_waiting_cars(&self) -> bool {
        !self.waiting.is_empty()
    }

    /// Cars in the waiting line, head first.
    pub fn waiting_cars(&self) -> impl Iterator<Item = &Car> {
        self.waiting.iter()
    }

    // ── Free pool ─────────────────────────────────────────────────────────

    /// Remove the pump that has been idle the longest.
    pub fn pop_free_pump(&mut self) -> Option<Pump> {
        self.free.pop_front()
    }

    /// Return an idle pump to the back of the free pool.
    pub fn push_free_pump(&mut self, pump: Pump) {
        debug_assert!(pump.current_car().is_none(), "free pump {} still holds a car", pump.id());
        self.free.push_back(pump);
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn has_free_pumps(&self) -> bool {
        !self.free.is_empty()
    }

    /// Free pumps in dispatch order.
    pub fn free_pumps(&self) -> impl Iterator<Item = &Pump> {
        self.free.iter()
    }

    // ── Busy pool ─────────────────────────────────────────────────────────

    /// Insert a pump that has just started serving, keyed by its completion
    /// tick.
    pub fn push_busy_pump(&mut self, pump: Pump) {
        debug_assert!(pump.current_car().is_some(), "busy pump {} has no car", pump.id());
        let key = BusyKey {
            completion: pump.completion_tick(),
            seq:        self.next_seq,
        };
        self.next_seq += 1;
        self.busy.insert(key, pump);
    }

    /// The busy pump that finishes soonest, without removing it.
    pub fn peek_earliest_busy(&self) -> Option<&Pump> {
        self.busy.first_key_value().map(|(_, pump)| pump)
    }

    /// Remove the busy pump that finishes soonest.
    pub fn pop_earliest_busy(&mut self) -> Option<Pump> {
        self.busy.pop_first().map(|(_, pump)| pump)
    }

    /// Remove the earliest busy pump only if it finishes at or before `now`.
    ///
    /// Because the pool is ordered by completion tick, `None` means no busy
    /// pump is due at `now`.
    pub fn pop_busy_due(&mut self, now: Tick) -> Option<Pump> {
        let (key, _) = self.busy.first_key_value()?;
        if key.completion > now {
            return None;
        }
        self.pop_earliest_busy()
    }

    #[inline]
    pub fn busy_len(&self) -> usize {
        self.busy.len()
    }

    #[inline]
    pub fn has_busy_pumps(&self) -> bool {
        !self.busy.is_empty()
    }

    /// Busy pumps in completion order.
    pub fn busy_pumps(&self) -> impl Iterator<Item = &Pump> {
        self.busy.values()
    }

    // ── Whole station ─────────────────────────────────────────────────────

    /// Total pumps across both pools.
    #[inline]
    pub fn pump_count(&self) -> usize {
        self.free.len() + self.busy.len()
    }

    /// Every pump with the pool it currently sits in: busy pool first in
    /// completion order, then the free pool in dispatch order.
    pub fn pumps(&self) -> impl Iterator<Item = (&Pump, PumpState)> {
        self.busy_pumps()
            .map(|p| (p, PumpState::Busy))
            .chain(self.free_pumps().map(|p| (p, PumpState::Free)))
    }

    /// Close the open interval of every pump at `end`, busy pumps as busy
    /// time and free pumps as free time.  Pool membership and order are not
    /// changed.
    pub fn close_all_intervals(&mut self, end: Tick) {
        // close_interval never moves a pump's completion tick, so busy keys
        // stay valid.
        for pump in self.busy.values_mut() {
            pump.close_interval(end, PumpState::Busy);
        }
        for pump in self.free.iter_mut() {
            pump.close_interval(end, PumpState::Free);
        }
    }
}
