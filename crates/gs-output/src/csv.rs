//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `pump_stats.csv`
//!
//! Absent optional values (no arriving car, no average service time) are
//! written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PumpStatsRow, TickSummaryRow};

pub const TICK_SUMMARY_HEADER: [&str; 8] =
    ["tick", "arrival", "car_id", "released", "dispatched", "waiting", "busy", "free"];

pub const PUMP_STATS_HEADER: [&str; 6] =
    ["pump_id", "state", "free_ticks", "busy_ticks", "cars_served", "average_service_time"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    pumps:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TICK_SUMMARY_HEADER)?;

        let mut pumps = Writer::from_path(dir.join("pump_stats.csv"))?;
        pumps.write_record(PUMP_STATS_HEADER)?;

        Ok(Self {
            summaries,
            pumps,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.arrival.to_string(),
            row.car_id.map(|id| id.to_string()).unwrap_or_default(),
            row.released.to_string(),
            row.dispatched.to_string(),
            row.waiting.to_string(),
            row.busy.to_string(),
            row.free.to_string(),
        ])?;
        Ok(())
    }

    fn write_pump_stats(&mut self, rows: &[PumpStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.pumps.write_record(&[
                row.pump_id.to_string(),
                row.state.to_string(),
                row.free_ticks.to_string(),
                row.busy_ticks.to_string(),
                row.cars_served.to_string(),
                row.average_service_time
                    .map(|avg| format!("{avg:.2}"))
                    .unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.pumps.flush()?;
        Ok(())
    }
}
