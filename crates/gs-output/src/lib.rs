//! `gs-output` — simulation output for the gas station simulator.
//!
//! | Item                 | Produces                                            |
//! |----------------------|-----------------------------------------------------|
//! | [`CsvWriter`]        | `tick_summaries.csv`, `pump_stats.csv`              |
//! | [`SimOutputObserver`]| drives any [`OutputWriter`] from `gs_sim::SimObserver` |
//! | [`TextReport`]       | the human-readable end-of-run report                |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, SimOutputObserver, TextReport};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let report = sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! println!("{}", TextReport(&report));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PumpStatsRow, TickSummaryRow};
pub use text::TextReport;
pub use writer::OutputWriter;
