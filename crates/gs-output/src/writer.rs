//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PumpStatsRow, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the end-of-run statistics of every pump.
    fn write_pump_stats(&mut self, rows: &[PumpStatsRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
