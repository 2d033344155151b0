use thiserror::Error;
use ts_core::{StationId, TravelerId};

#[derive(Debug, Error)]
pub enum StationError {
    #[error("station {0} has no queue slots")]
    NoQueueSlots(StationId),

    #[error("station {station} released by {traveler} while not serving anyone")]
    NotServing {
        station:  StationId,
        traveler: TravelerId,
    },

    #[error("station {station} released by {traveler} but {head:?} is at the head")]
    NotHead {
        station:  StationId,
        traveler: TravelerId,
        head:     Option<TravelerId>,
    },
}

pub type StationResult<T> = Result<T, StationError>;
