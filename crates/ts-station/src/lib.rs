//! `ts-station` — the turnstile admission protocol.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`station`]   | `Station` — FIFO queue, `busy` gate, slots, kind           |
//! | [`members`]   | `QueueMembers` trait, `ServiceTicket`, `Admission`         |
//! | [`animation`] | `TurnstileRotation` — frame-driven arm rotation            |
//! | [`error`]     | `StationError`, `StationResult<T>`                         |
//!
//! # Ownership model
//!
//! A station never owns travelers.  Its queue holds `TravelerId` handles and
//! every call that needs to look at or poke a traveler goes through a
//! `&mut impl QueueMembers` supplied by the caller (in practice the round's
//! traveler store).  A handle whose traveler has been destroyed no longer
//! resolves and is dropped the next time admission is attempted.
//!
//! # Exclusivity
//!
//! `busy` is the only gate into service.  It is set by
//! [`Station::try_admit`] in the same call that signals the head traveler,
//! and cleared only by [`Station::release`] (or [`Station::evict`] when the
//! served traveler vanished mid-service).  Nothing else writes it.

pub mod animation;
pub mod error;
pub mod members;
pub mod station;

#[cfg(test)]
mod tests;

pub use animation::TurnstileRotation;
pub use error::{StationError, StationResult};
pub use members::{Admission, QueueMembers, ServiceTicket};
pub use station::Station;
