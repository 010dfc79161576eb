//! Replay data loader.
//!
//! # File format
//!
//! A stream of whitespace-separated integers, consumed two at a time: the
//! first of each pair drives the arrival roll, the second the service
//! duration.  Line breaks carry no meaning, so both of these describe the
//! same two ticks:
//!
//! ```text
//! 17 245
//! 83 4
//! ```
//!
//! ```text
//! 17 245 83 4
//! ```
//!
//! A trailing unpaired integer is a parse error.  The file must hold at least
//! one pair per simulated tick; running out mid-run is reported by
//! [`ReplaySource`][crate::ReplaySource] as `Exhausted`.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::ArrivalError;

/// Load all integer pairs from a replay file.
pub fn load_pairs_file(path: &Path) -> Result<Vec<(i64, i64)>, ArrivalError> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    let pairs = load_pairs_reader(file)?;
    info!(path = %path.display(), pairs = pairs.len(), "loaded replay data");
    Ok(pairs)
}

/// Like [`load_pairs_file`] but accepts any `Read` source.
pub fn load_pairs_reader<R: Read>(mut reader: R) -> Result<Vec<(i64, i64)>, ArrivalError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let values: Vec<i64> = text
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| {
                ArrivalError::Parse(format!("token {} ({token:?}) is not an integer", i + 1))
            })
        })
        .collect::<Result<_, _>>()?;

    if !values.len().is_multiple_of(2) {
        return Err(ArrivalError::Parse(format!(
            "odd number of integers ({}): the last value has no partner",
            values.len()
        )));
    }

    Ok(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}
