//! `ts-traveler` — the traveler state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`state`]    | `TravelerState` enum                                            |
//! | [`routine`]  | `PassRoutine`, `Suspension` — frame-spread cooperative routines |
//! | [`intent`]   | `Intent` — requests a traveler hands back to the round          |
//! | [`traveler`] | `Traveler<M>` — one agent and its transitions                   |
//! | [`store`]    | `TravelerStore<M>` — live travelers; implements `QueueMembers`  |
//! | [`error`]    | `TravelerError`, `TravelerResult<T>`                            |
//!
//! # Two-phase frame
//!
//! The round drives every traveler once per frame:
//!
//! 1. **Tick phase**: `Traveler::tick` advances the traveler's own state
//!    (snapping, routines, exit arrival) and returns a `Vec<Intent>` for
//!    anything that touches shared state: choosing an exit, releasing the
//!    turnstile, reporting completion.
//! 2. **Apply phase**: the round consumes those intents in ascending
//!    `TravelerId` order and mutates stations and the coordinator.
//!
//! A traveler never holds a reference to its station or to the round; it
//! holds its `StationId` and talks back only through intents.
//!
//! ```text
//!  GoingToQueue ─► Queuing ─(admitted)─► Passing ─(released)─► PostGate ─► Exited
//!                     │  ▲                                       │  ▲
//!                     ▼  │                                       ▼  │
//!                   Controlled                                 Controlled
//! ```

pub mod error;
pub mod intent;
pub mod routine;
pub mod state;
pub mod store;
pub mod traveler;


pub use error::{TravelerError, TravelerResult};
pub use intent::Intent;
pub use routine::{PassRoutine, PassStage, Suspension};
pub use state::TravelerState;
pub use store::TravelerStore;
pub use traveler::Traveler;
