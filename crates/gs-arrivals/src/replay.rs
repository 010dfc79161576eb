//! Replay of raw integer pairs, typically loaded from a data file.

use std::collections::VecDeque;

use gs_core::Tick;

use crate::{Arrival, ArrivalError, ArrivalParams, ArrivalResult, ArrivalSource};

/// Replays `(data1, data2)` pairs in order, one per tick, decoding each with
/// [`ArrivalParams::combine`].
pub struct ReplaySource {
    pairs:  VecDeque<(i64, i64)>,
    params: ArrivalParams,
}

impl ReplaySource {
    pub fn new(pairs: impl IntoIterator<Item = (i64, i64)>, params: ArrivalParams) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
            params,
        }
    }

    /// Pairs not yet consumed.
    pub fn remaining(&self) -> usize {
        self.pairs.len()
    }
}

impl ArrivalSource for ReplaySource {
    fn next_arrival(&mut self, tick: Tick) -> ArrivalResult<Arrival> {
        let (data1, data2) = self
            .pairs
            .pop_front()
            .ok_or(ArrivalError::Exhausted { tick })?;
        Ok(self.params.combine(data1, data2))
    }
}
