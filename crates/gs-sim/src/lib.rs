//! `gs-sim` — tick loop orchestrator for the gas station simulator.
//!
//! # Three-step tick loop
//!
//! ```text
//! for tick in 0..config.simulation_length:
//!   ① Arrival   : ask the ArrivalSource; if a car arrived, give it the next
//!                 CarId and admit it to the waiting line, or turn it away
//!                 when the line is full.
//!   ② Release   : pop every busy pump whose service ends by this tick, close
//!                 its busy interval, drop the finished car, and append the
//!                 pump to the free pool.
//!   ③ Dispatch  : while a car waits and a pump is free: pair the head car
//!                 with the longest-idle pump and move the pump to the busy
//!                 pool.
//! finalize: close every pump's open interval at the end tick, in place.
//! ```
//!
//! The order is fixed: a pump released in ② is available to ③ in the same
//! tick, and a car admitted in ① can be dispatched in ③ of its arrival tick.
//! No dispatch happens after the last tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_arrivals::RandomSource;
//! use gs_core::StationConfig;
//! use gs_sim::{NoopObserver, SimBuilder};
//!
//! let source = RandomSource::from_config(&config);
//! let mut sim = SimBuilder::new(config, source).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{ArrivalOutcome, NoopObserver, SimObserver, TickSummary};
pub use report::{PumpReport, SimReport};
pub use sim::{RunTotals, Sim};
