use thiserror::Error;
use ts_core::TravelerId;

#[derive(Debug, Error)]
pub enum TravelerError {
    #[error("traveler {0} has already exited")]
    AlreadyExited(TravelerId),

    #[error("traveler {0} is already being inspected")]
    AlreadySuspended(TravelerId),

    #[error("traveler {0} is passing a turnstile and cannot be interrupted")]
    InService(TravelerId),

    #[error("inspection duration must be a non-negative number, got {0}")]
    InvalidDuration(f32),
}

pub type TravelerResult<T> = Result<T, TravelerError>;
