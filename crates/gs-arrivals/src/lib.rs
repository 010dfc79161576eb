//! `gs-arrivals` — where cars come from.
//!
//! The simulation engine asks one question per tick: *did a car arrive, and
//! how long will it need a pump?*  Everything that can answer it implements
//! [`ArrivalSource`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`source`]   | `Arrival`, `ArrivalParams`, `ArrivalSource` trait       |
//! | [`random`]   | `RandomSource` — seeded pseudo-random arrivals          |
//! | [`replay`]   | `ReplaySource` — raw integer pairs replayed in order    |
//! | [`scripted`] | `ScriptedSource` — pre-decoded arrivals                 |
//! | [`loader`]   | `load_pairs_file`, `load_pairs_reader`                  |
//! | [`error`]    | `ArrivalError`, `ArrivalResult<T>`                      |
//!
//! # Decoding raw pairs
//!
//! Random and replayed data both produce a pair `(data1, data2)` per tick,
//! decoded by [`ArrivalParams::combine`]:
//!
//! ```text
//! arrived  = (data1 mod 100) + 1 <= arrival_chance_percent
//! duration = (data2 mod max_service_duration) + 1
//! ```

pub mod error;
pub mod loader;
pub mod random;
pub mod replay;
pub mod scripted;
pub mod source;


pub use error::{ArrivalError, ArrivalResult};
pub use loader::{load_pairs_file, load_pairs_reader};
pub use random::RandomSource;
pub use replay::ReplaySource;
pub use scripted::ScriptedSource;
pub use source::{Arrival, ArrivalParams, ArrivalSource};
