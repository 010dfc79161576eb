use gs_arrivals::ArrivalError;
use gs_core::GsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] GsError),

    #[error("arrival source failed: {0}")]
    Source(#[from] ArrivalError),

    #[error("simulation already finalized; no further ticks can run")]
    AlreadyFinalized,
}

pub type SimResult<T> = Result<T, SimError>;
