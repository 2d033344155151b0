//! `ts-core` — foundational types for the turnstile rush simulation.
//!
//! This crate is a dependency of every other `ts-*` crate.  It intentionally
//! has no `ts-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TravelerId`, `StationId`                             |
//! | [`geo`]         | `Point`, planar / euclidean distance, lerp            |
//! | [`time`]        | `Tick`, `SimClock` (frame delta + time scale)         |
//! | [`rng`]         | `TravelerRng` (per-traveler), `SimRng` (round)        |
//! | [`kind`]        | `StationKind` (`Normal` / `Gate`)                     |
//! | [`config`]      | `RoundConfig` and the per-actor tuning blocks         |
//! | [`error`]       | `TsError`, `TsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `RoundConfig` from a TOML file.           |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PlayerTuning, RoundConfig, StationTuning, TravelerTuning};
pub use error::{TsError, TsResult};
pub use geo::Point;
pub use ids::{StationId, TravelerId};
pub use kind::StationKind;
pub use rng::{SimRng, TravelerRng};
pub use time::{SimClock, Tick};
