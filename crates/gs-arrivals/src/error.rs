use gs_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("arrival data exhausted at tick {tick}")]
    Exhausted { tick: Tick },

    #[error("car at tick {tick} needs {duration} ticks of service, expected 1..={max}")]
    InvalidDuration { tick: Tick, duration: u64, max: u64 },

    #[error("arrival data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
