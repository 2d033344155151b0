//! `ts-motion` — the "move toward a point, report arrival" capability.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`agent`]   | `MotionAgent` trait, `MotionProvider` factory trait               |
//! | [`linear`]  | `LinearMotion` — straight-line reference implementation           |
//!
//! # Movement model
//!
//! Navigation is opaque to the rest of the simulation.  A motion agent is
//! told a destination, spends at least one frame "computing a path"
//! (`is_pending() == true`), then closes `remaining_distance()` over
//! successive [`MotionAgent::step`] calls unless it is stopped or disabled.
//! The only promise callers rely on is: once pending clears, and the agent is
//! neither stopped nor disabled, `remaining_distance()` eventually reaches ~0.
//!
//! Swap [`LinearMotion`] for a navmesh-backed agent by implementing the two
//! traits; the station and traveler crates are generic over them.

pub mod agent;
pub mod linear;

#[cfg(test)]
mod tests;

pub use agent::{MotionAgent, MotionProvider};
pub use linear::{LinearMotion, LinearMotionProvider};
