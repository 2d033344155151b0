//! Simulation-wide error type.
//!
//! Sub-crates define their own error enums and wrap `TsError` as one variant
//! via `#[from]`, so lookups and configuration failures read the same at
//! every layer.

use thiserror::Error;

use crate::{StationId, TravelerId};

/// The top-level error type for `ts-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TsError {
    #[error("traveler {0} not found")]
    TravelerNotFound(TravelerId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ts-*` crates.
pub type TsResult<T> = Result<T, TsError>;
