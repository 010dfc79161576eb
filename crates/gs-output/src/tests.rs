//! Tests for gs-output.

use gs_arrivals::ScriptedSource;
use gs_core::{PumpId, StationConfig};
use gs_sim::{NoopObserver, SimBuilder, SimReport};

fn config(simulation_length: u64, pump_count: u32, waiting_line_limit: usize) -> StationConfig {
    StationConfig {
        simulation_length,
        max_service_duration: 500,
        arrival_chance_percent: 100,
        pump_count,
        waiting_line_limit,
        seed: 0,
        first_pump_id: PumpId(1),
    }
}

/// One pump, line of one, cars at ticks 0 and 1 needing 2 ticks each.
fn scenario_report() -> SimReport {
    let source = ScriptedSource::from_durations([Some(2), Some(2), None]);
    let mut sim = SimBuilder::new(config(3, 2, 1), source).build().unwrap();
    sim.run(&mut NoopObserver).unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, PUMP_STATS_HEADER, TICK_SUMMARY_HEADER};
    use crate::row::{PumpStatsRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::SimOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            arrival:    "admitted",
            car_id:     Some(tick as u32 + 1),
            released:   0,
            dispatched: 1,
            waiting:    0,
            busy:       1,
            free:       2,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("pump_stats.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, TICK_SUMMARY_HEADER);

        let mut rdr = csv::Reader::from_path(dir.path().join("pump_stats.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, PUMP_STATS_HEADER);
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.write_tick_summary(&TickSummaryRow { car_id: None, arrival: "none", ..summary_row(4) })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "admitted");
        assert_eq!(&rows[0][2], "4");
        assert_eq!(&rows[1][1], "none");
        assert_eq!(&rows[1][2], "");
    }

    #[test]
    fn pump_stats_average_formatting() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            PumpStatsRow {
                pump_id: 1, state: "busy", free_ticks: 1, busy_ticks: 9,
                cars_served: 4, average_service_time: Some(2.25),
            },
            PumpStatsRow {
                pump_id: 2, state: "free", free_ticks: 10, busy_ticks: 0,
                cars_served: 0, average_service_time: None,
            },
        ];
        w.write_pump_stats(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("pump_stats.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&read[0][5], "2.25");
        assert_eq!(&read[1][1], "free");
        assert_eq!(&read[1][5], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn observer_writes_full_run() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let source = ScriptedSource::from_durations([Some(2), Some(2), None]);
        let mut sim = SimBuilder::new(config(3, 2, 1), source).build().unwrap();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let ticks: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(ticks.len(), 3);
        // Tick 1: car 2 goes straight to the second pump.
        assert_eq!(&ticks[1][1], "admitted");
        assert_eq!(&ticks[1][4], "1");
        assert_eq!(&ticks[1][6], "2");

        let mut rdr = csv::Reader::from_path(dir.path().join("pump_stats.csv")).unwrap();
        let pumps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(pumps.len(), 2);
        // Pump 1 finished at tick 2 and is free; pump 2 is still busy until 3.
        assert_eq!(&pumps[0][0], "2");
        assert_eq!(&pumps[0][1], "busy");
        assert_eq!(&pumps[1][0], "1");
        assert_eq!(&pumps[1][1], "free");
        assert_eq!(&pumps[1][2], "1");
        assert_eq!(&pumps[1][3], "2");
        assert_eq!(&pumps[1][5], "2.00");
    }
}

#[cfg(test)]
mod row_tests {
    use gs_core::{CarId, Tick};
    use gs_sim::{ArrivalOutcome, TickSummary};

    use super::*;
    use crate::row::{PumpStatsRow, TickSummaryRow};

    #[test]
    fn summary_row_from_turned_away() {
        let summary = TickSummary {
            tick:       Tick(9),
            arrival:    ArrivalOutcome::TurnedAway(CarId(4)),
            released:   1,
            dispatched: 0,
            waiting:    3,
            busy:       2,
            free:       0,
        };
        let row = TickSummaryRow::from(&summary);
        assert_eq!(row.tick, 9);
        assert_eq!(row.arrival, "turned_away");
        assert_eq!(row.car_id, Some(4));
        assert_eq!(row.waiting, 3);
    }

    #[test]
    fn pump_rows_follow_report_order() {
        let report = scenario_report();
        let rows: Vec<_> = report.pumps.iter().map(PumpStatsRow::from).collect();
        let ids: Vec<_> = rows.iter().map(|r| (r.pump_id, r.state)).collect();
        assert_eq!(ids, vec![(2, "busy"), (1, "free")]);
    }
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::TextReport;

    #[test]
    fn report_lists_totals_and_sections() {
        let report = scenario_report();
        let text = TextReport(&report).to_string();
        assert!(text.contains("# total arrival cars   : 2"), "{text}");
        assert!(text.contains("# cars gone away       : 0"));
        assert!(text.contains("Average waiting time   : 0.00"));
        let busy = text.find("Busy Gas Pumps Info.").unwrap();
        let free = text.find("Free Gas Pumps Info.").unwrap();
        assert!(busy < free);
        assert!(text.contains("Average service time : 2.00"));
    }

    #[test]
    fn quiet_run_has_no_average_wait_and_no_busy_section() {
        let mut sim = SimBuilder::new(config(5, 1, 1), ScriptedSource::quiet(5)).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        let text = TextReport(&report).to_string();
        assert!(text.contains("Average waiting time   : n/a"));
        assert!(!text.contains("Busy Gas Pumps"));
        assert!(text.contains("Total free time      : 5"));
        assert!(!text.contains("Average service time"));
    }
}
