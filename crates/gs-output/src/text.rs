//! Plain-text end-of-run report.

use std::fmt;

use gs_sim::{PumpReport, SimReport};

/// Renders a [`SimReport`] as the classic end-of-simulation printout:
/// arrival totals, pool sizes, waiting time, then per-pump statistics for
/// the busy pool followed by the free pool.
pub struct TextReport<'a>(pub &'a SimReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "=========================")?;
        writeln!(f, "End of simulation report")?;
        writeln!(f)?;
        writeln!(f, "\t# total arrival cars   : {}", r.total_arrivals())?;
        writeln!(f, "\t# cars gone away       : {}", r.rejected)?;
        writeln!(f, "\t# cars served          : {}", r.served)?;
        writeln!(f)?;
        writeln!(f, "\t*** Current Gas Pumps Info. ***")?;
        writeln!(f, "\t# waiting cars         : {}", r.waiting)?;
        writeln!(f, "\t# busy gas pumps       : {}", r.busy_pumps)?;
        writeln!(f, "\t# free gas pumps       : {}", r.free_pumps)?;
        writeln!(f)?;
        writeln!(f, "\tTotal waiting time     : {}", r.total_wait)?;
        match r.average_wait() {
            Some(avg) => writeln!(f, "\tAverage waiting time   : {avg:.2}")?,
            None => writeln!(f, "\tAverage waiting time   : n/a")?,
        }

        write_section(f, "Busy Gas Pumps Info.", r.busy())?;
        write_section(f, "Free Gas Pumps Info.", r.free())
    }
}

fn write_section<'a>(
    f:     &mut fmt::Formatter<'_>,
    title: &str,
    pumps: impl Iterator<Item = &'a PumpReport>,
) -> fmt::Result {
    let mut pumps = pumps.peekable();
    if pumps.peek().is_none() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "\t*** {title} ***")?;
    for p in pumps {
        writeln!(f)?;
        writeln!(f, "\t\tGas pump ID          : {}", p.id)?;
        writeln!(f, "\t\tTotal free time      : {}", p.stats.free_ticks)?;
        writeln!(f, "\t\tTotal service time   : {}", p.stats.busy_ticks)?;
        writeln!(f, "\t\tTotal # of cars      : {}", p.stats.cars_served)?;
        if let Some(avg) = p.average_service_time() {
            writeln!(f, "\t\tAverage service time : {avg:.2}")?;
        }
    }
    Ok(())
}
