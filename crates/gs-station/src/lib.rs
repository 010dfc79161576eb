//! `gs-station` — the passive entities of a gas station and the queues that
//! hold them.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`car`]    | `Car` — an immutable arrival record                       |
//! | [`pump`]   | `Pump`, `PumpStats`, `PumpState`                          |
//! | [`queues`] | `QueueSet` — waiting line, free pool, busy pool           |
//!
//! # Ownership model
//!
//! Every pump lives in exactly one of the two pools; every car lives either
//! in the waiting line or inside the busy pump that serves it.  Moving a value
//! between queues is a plain Rust move, so a pump can never be in both pools
//! and a car can never be referenced twice.

pub mod car;
pub mod pump;
pub mod queues;

#[cfg(test)]
mod tests;

pub use car::Car;
pub use pump::{Pump, PumpState, PumpStats};
pub use queues::QueueSet;
