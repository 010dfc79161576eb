//! Unit tests for gs-station.

use gs_core::{CarId, PumpId, Tick};

use crate::{Car, Pump, PumpState, QueueSet};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(id: u32, duration: u64, arrival: u64) -> Car {
    Car::new(CarId(id), duration, Tick(arrival))
}

fn station(pumps: u32, limit: usize) -> QueueSet {
    QueueSet::new((1..=pumps).map(PumpId), limit)
}

/// Take a pump from the free pool, start it on `car` at `now`, and put it in
/// the busy pool.  Returns the pump id.
fn dispatch(q: &mut QueueSet, car: Car, now: u64) -> PumpId {
    let mut pump = q.pop_free_pump().expect("free pump");
    let id = pump.id();
    pump.start_service(car, Tick(now));
    q.push_busy_pump(pump);
    id
}

// ── Car ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car_tests {
    use super::*;

    #[test]
    fn accessors() {
        let c = car(3, 7, 10);
        assert_eq!(c.id(), CarId(3));
        assert_eq!(c.duration(), 7);
        assert_eq!(c.arrival(), Tick(10));
    }

    #[test]
    fn waited_until_counts_ticks_since_arrival() {
        let c = car(1, 2, 4);
        assert_eq!(c.waited_until(Tick(4)), 0);
        assert_eq!(c.waited_until(Tick(9)), 5);
    }
}

// ── Pump ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pump_tests {
    use super::*;

    #[test]
    fn new_pump_is_idle_since_zero() {
        let p = Pump::new(PumpId(1));
        assert_eq!(p.interval_start(), Tick(0));
        assert!(p.current_car().is_none());
        assert_eq!(p.stats().accounted_ticks(), 0);
    }

    #[test]
    fn start_service_accounts_idle_interval() {
        let mut p = Pump::new(PumpId(1));
        p.start_service(car(1, 3, 2), Tick(4));
        assert_eq!(p.stats().free_ticks, 4);
        assert_eq!(p.stats().cars_served, 1);
        assert_eq!(p.interval_start(), Tick(4));
        assert_eq!(p.completion_tick(), Tick(7));
        assert_eq!(p.current_car().map(Car::id), Some(CarId(1)));
    }

    #[test]
    fn finish_service_accounts_busy_interval_and_returns_car() {
        let mut p = Pump::new(PumpId(1));
        p.start_service(car(1, 3, 0), Tick(0));
        let done = p.finish_service().unwrap();
        assert_eq!(done.id(), CarId(1));
        assert_eq!(p.stats().busy_ticks, 3);
        assert_eq!(p.interval_start(), Tick(3));
        assert!(p.current_car().is_none());
    }

    #[test]
    fn idle_gap_between_services_is_free_time() {
        let mut p = Pump::new(PumpId(1));
        p.start_service(car(1, 2, 0), Tick(0)); // busy [0,2)
        p.finish_service();
        p.start_service(car(2, 1, 5), Tick(5)); // idle [2,5), busy [5,6)
        p.finish_service();
        assert_eq!(p.stats().free_ticks, 3);
        assert_eq!(p.stats().busy_ticks, 3);
        assert_eq!(p.stats().cars_served, 2);
    }

    #[test]
    fn close_interval_busy_counts_partial_service() {
        let mut p = Pump::new(PumpId(1));
        p.start_service(car(1, 10, 0), Tick(2));
        p.close_interval(Tick(5), PumpState::Busy);
        assert_eq!(p.stats().free_ticks, 2);
        assert_eq!(p.stats().busy_ticks, 3);
        // Car is still attached; closing does not complete service.
        assert!(p.current_car().is_some());
        assert_eq!(p.completion_tick(), Tick(12));
    }

    #[test]
    fn close_interval_is_idempotent() {
        let mut p = Pump::new(PumpId(1));
        p.close_interval(Tick(8), PumpState::Free);
        p.close_interval(Tick(8), PumpState::Free);
        assert_eq!(p.stats().free_ticks, 8);
    }

    #[test]
    fn average_service_time() {
        let mut p = Pump::new(PumpId(1));
        assert_eq!(p.stats().average_service_time(), None);
        p.start_service(car(1, 2, 0), Tick(0));
        p.finish_service();
        p.start_service(car(2, 5, 0), Tick(2));
        p.finish_service();
        assert_eq!(p.stats().average_service_time(), Some(3.5));
    }

    #[test]
    fn display() {
        let mut p = Pump::new(PumpId(4));
        p.start_service(car(9, 2, 0), Tick(1));
        assert_eq!(p.to_string(), "pump 4 [T1, T3) serving car 9");
        assert_eq!(PumpState::Busy.to_string(), "busy");
    }
}

// ── QueueSet ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting_line {
    use super::*;

    #[test]
    fn admits_until_limit() {
        let mut q = station(1, 2);
        assert!(q.admit_car(car(1, 1, 0)));
        assert!(!q.is_line_full());
        assert!(q.admit_car(car(2, 1, 0)));
        assert!(q.is_line_full());
        assert_eq!(q.waiting_len(), 2);
    }

    #[test]
    fn rejection_leaves_line_untouched() {
        let mut q = station(1, 1);
        assert!(q.admit_car(car(1, 4, 0)));
        assert!(!q.admit_car(car(2, 4, 1)));
        assert_eq!(q.waiting_len(), 1);
        let ids: Vec<_> = q.waiting_cars().map(Car::id).collect();
        assert_eq!(ids, vec![CarId(1)]);
    }

    #[test]
    fn pops_in_arrival_order() {
        let mut q = station(1, 5);
        for i in 1..=3 {
            q.admit_car(car(i, 1, i as u64));
        }
        assert_eq!(q.pop_waiting_car().unwrap().id(), CarId(1));
        assert_eq!(q.pop_waiting_car().unwrap().id(), CarId(2));
        assert_eq!(q.pop_waiting_car().unwrap().id(), CarId(3));
        assert!(q.pop_waiting_car().is_none());
        assert!(!q.has_waiting_cars());
    }
}

#[cfg(test)]
mod free_pool {
    use super::*;

    #[test]
    fn all_pumps_start_free_in_id_order() {
        let q = station(3, 1);
        assert_eq!(q.free_len(), 3);
        assert_eq!(q.busy_len(), 0);
        let ids: Vec<_> = q.free_pumps().map(Pump::id).collect();
        assert_eq!(ids, vec![PumpId(1), PumpId(2), PumpId(3)]);
    }

    #[test]
    fn fifo_by_insertion() {
        let mut q = station(3, 1);
        let p1 = q.pop_free_pump().unwrap();
        let p2 = q.pop_free_pump().unwrap();
        let p3 = q.pop_free_pump().unwrap();
        assert!(q.pop_free_pump().is_none());
        q.push_free_pump(p3);
        q.push_free_pump(p1);
        q.push_free_pump(p2);
        let order: Vec<_> = std::iter::from_fn(|| q.pop_free_pump()).map(|p| p.id()).collect();
        assert_eq!(order, vec![PumpId(3), PumpId(1), PumpId(2)]);
    }
}

#[cfg(test)]
mod busy_pool {
    use super::*;

    #[test]
    fn peek_returns_minimum_completion() {
        let mut q = station(3, 5);
        dispatch(&mut q, car(1, 9, 0), 0); // pump 1 ends 9
        dispatch(&mut q, car(2, 4, 0), 0); // pump 2 ends 4
        dispatch(&mut q, car(3, 6, 0), 0); // pump 3 ends 6
        assert_eq!(q.peek_earliest_busy().unwrap().id(), PumpId(2));
        assert_eq!(q.busy_len(), 3);

        let order: Vec<_> = std::iter::from_fn(|| q.pop_earliest_busy())
            .map(|p| p.completion_tick())
            .collect();
        assert_eq!(order, vec![Tick(4), Tick(6), Tick(9)]);
    }

    #[test]
    fn ties_release_in_insertion_order() {
        let mut q = station(3, 5);
        let a = dispatch(&mut q, car(1, 5, 0), 0);
        let b = dispatch(&mut q, car(2, 3, 2), 2);
        let c = dispatch(&mut q, car(3, 5, 0), 0);
        let order: Vec<_> = std::iter::from_fn(|| q.pop_earliest_busy()).map(|p| p.id()).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn pop_busy_due_stops_at_first_pump_not_due() {
        let mut q = station(2, 5);
        dispatch(&mut q, car(1, 5, 0), 0);
        dispatch(&mut q, car(2, 7, 0), 0);
        assert!(q.pop_busy_due(Tick(4)).is_none());
        assert_eq!(q.pop_busy_due(Tick(5)).unwrap().completion_tick(), Tick(5));
        assert!(q.pop_busy_due(Tick(5)).is_none());
        assert_eq!(q.peek_earliest_busy().unwrap().completion_tick(), Tick(7));
    }

    #[test]
    fn overdue_pumps_are_still_due() {
        let mut q = station(3, 5);
        dispatch(&mut q, car(1, 2, 0), 0);
        dispatch(&mut q, car(2, 3, 0), 0);
        dispatch(&mut q, car(3, 9, 0), 0);
        assert_eq!(q.pop_busy_due(Tick(4)).unwrap().completion_tick(), Tick(2));
        assert_eq!(q.pop_busy_due(Tick(4)).unwrap().completion_tick(), Tick(3));
        assert!(q.pop_busy_due(Tick(4)).is_none());
        assert_eq!(q.busy_len(), 1);
    }

    #[test]
    fn empty_pool() {
        let mut q = station(1, 1);
        assert!(q.peek_earliest_busy().is_none());
        assert!(q.pop_earliest_busy().is_none());
        assert!(q.pop_busy_due(Tick(0)).is_none());
        assert!(!q.has_busy_pumps());
    }
}

#[cfg(test)]
mod whole_station {
    use super::*;

    #[test]
    fn pumps_lists_busy_then_free() {
        let mut q = station(3, 5);
        dispatch(&mut q, car(1, 8, 0), 0); // pump 1
        dispatch(&mut q, car(2, 2, 0), 0); // pump 2
        let listed: Vec<_> = q.pumps().map(|(p, s)| (p.id(), s)).collect();
        assert_eq!(
            listed,
            vec![
                (PumpId(2), PumpState::Busy),
                (PumpId(1), PumpState::Busy),
                (PumpId(3), PumpState::Free),
            ]
        );
        assert_eq!(q.pump_count(), 3);
    }

    #[test]
    fn close_all_intervals_keeps_membership() {
        let mut q = station(2, 5);
        dispatch(&mut q, car(1, 10, 0), 1);
        q.close_all_intervals(Tick(4));

        assert_eq!(q.busy_len(), 1);
        assert_eq!(q.free_len(), 1);
        let busy = q.peek_earliest_busy().unwrap();
        assert_eq!(busy.stats().free_ticks, 1);
        assert_eq!(busy.stats().busy_ticks, 3);
        let free = q.free_pumps().next().unwrap();
        assert_eq!(free.stats().free_ticks, 4);
        for (pump, _) in q.pumps() {
            assert_eq!(pump.stats().accounted_ticks(), 4);
        }
    }
}
