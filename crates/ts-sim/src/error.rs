use thiserror::Error;
use ts_core::TsError;
use ts_station::StationError;
use ts_traveler::TravelerError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("round configuration error: {0}")]
    Config(String),

    /// The whole wave has already been spawned.
    #[error("all {target} travelers of the wave have spawned")]
    WaveComplete { target: u32 },

    #[error("the round has already ended")]
    RoundOver,

    #[error("core error: {0}")]
    Core(#[from] TsError),

    #[error("station error: {0}")]
    Station(#[from] StationError),

    #[error("traveler error: {0}")]
    Traveler(#[from] TravelerError),
}

pub type SimResult<T> = Result<T, SimError>;
