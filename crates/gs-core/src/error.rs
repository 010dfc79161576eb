//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `GsError` as one variant
//! where configuration problems can surface.

use thiserror::Error;

/// The base error type for `gs-core`.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gs-core`.
pub type GsResult<T> = Result<T, GsError>;
