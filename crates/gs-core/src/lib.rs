//! `gs-core` — foundational types for the gas station simulator.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and only `rand` and `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `CarId`, `PumpId`                                 |
//! | [`time`]   | `Tick`, `SimClock`                                |
//! | [`config`] | `StationConfig` and its parameter bounds          |
//! | [`rng`]    | `SimRng`                                          |
//! | [`error`]  | `GsError`, `GsResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::StationConfig;
pub use error::{GsError, GsResult};
pub use ids::{CarId, PumpId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
