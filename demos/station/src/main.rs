//! gas-station — run one gas station simulation from the command line.
//!
//! Parameters come from flags or from a JSON file (`--config`).  Arrival data
//! is drawn from a seeded RNG unless `--replay` names a file of integer pairs.
//!
//! ```text
//! gas-station --length 500 --pumps 3 --limit 10 --chance 40 --max-duration 12
//! gas-station --config station.json --replay DataFile --output out/ -vv
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, error, info, warn};

use gs_arrivals::{ArrivalParams, ArrivalSource, RandomSource, ReplaySource, load_pairs_file};
use gs_core::{PumpId, StationConfig};
use gs_output::{CsvWriter, SimOutputObserver, TextReport};
use gs_sim::{NoopObserver, Sim, SimBuilder, SimObserver, SimReport};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "gas-station", version, about = "Discrete-time gas station simulator")]
struct Args {
    /// Ticks to simulate (max 10000).
    #[arg(long, default_value_t = 100)]
    length: u64,

    /// Maximum service duration of a car (max 500).
    #[arg(long, default_value_t = 10)]
    max_duration: u64,

    /// Chance of a new car each tick, in percent (1-100).
    #[arg(long, default_value_t = 50)]
    chance: u32,

    /// Number of pumps (max 10).
    #[arg(long, default_value_t = 3)]
    pumps: u32,

    /// Waiting-line limit (max 50).
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Seed for random arrivals.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON station config; replaces the parameter flags above.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replay arrival data from a file of whitespace-separated integer pairs.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Directory for tick_summaries.csv and pump_stats.csv.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn station_config(&self) -> Result<StationConfig> {
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: StationConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?;
            info!(path = %path.display(), "loaded station config");
            return Ok(config);
        }
        Ok(StationConfig {
            simulation_length:      self.length,
            max_service_duration:   self.max_duration,
            arrival_chance_percent: self.chance,
            pump_count:             self.pumps,
            waiting_line_limit:     self.limit,
            seed:                   self.seed,
            first_pump_id:          PumpId(1),
        })
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn arrival_source(config: &StationConfig, replay: Option<&Path>) -> Result<Box<dyn ArrivalSource>> {
    match replay {
        Some(path) => {
            let pairs = load_pairs_file(path)
                .with_context(|| format!("loading replay data {}", path.display()))?;
            if (pairs.len() as u64) < config.simulation_length {
                warn!(
                    pairs = pairs.len(),
                    ticks = config.simulation_length,
                    "replay data is shorter than the run; it will fail when exhausted"
                );
            }
            Ok(Box::new(ReplaySource::new(pairs, ArrivalParams::from_config(config))))
        }
        None => Ok(Box::new(RandomSource::from_config(config))),
    }
}

fn run_with<O: SimObserver>(sim: &mut Sim<Box<dyn ArrivalSource>>, observer: &mut O) -> Result<SimReport> {
    sim.run(observer).context("simulation failed")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_target(false)
        .init();

    let config = args.station_config()?;
    let source = arrival_source(&config, args.replay.as_deref())?;
    let mut sim = SimBuilder::new(config, source).build()?;

    let t0 = Instant::now();
    let report = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            let report = run_with(&mut sim, &mut obs)?;
            if let Some(e) = obs.take_error() {
                error!("output error: {e}");
            }
            report
        }
        None => run_with(&mut sim, &mut NoopObserver)?,
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    println!("{}", TextReport(&report));
    Ok(())
}
