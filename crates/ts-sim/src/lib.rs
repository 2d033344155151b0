//! `ts-sim` — round orchestrator for the turnstile rush simulation.
//!
//! # Frame loop
//!
//! ```text
//! until the round ends (or the clock is frozen, or max_ticks):
//!   ① Spawn      — Spawner fires; traveler created at a random spawn point,
//!                  bound to a random station, enqueued there.
//!   ② Motion     — every MotionAgent steps by the scaled frame delta.
//!   ③ Intents    — Traveler::tick for each live traveler (ascending id).
//!   ④ Apply      — for each intent:
//!                    RequestExit      → pick an exit, head_to_exit
//!                    Release{station} → Station::release, admit next
//!                    Finished{fraud}  → remove traveler, coordinator report
//!                    SuspensionEnded  → observer signal
//!   ⑤ Admission  — Station::try_admit on every station.
//!   ⑥ Player     — chase / inspect bookkeeping.
//!   ⑦ Cosmetics  — turnstile rotations, inspection progress signals.
//! ```
//!
//! The round owns the coordinator; travelers and stations reach it only
//! through the intents the round applies, never through a global.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::{Point, RoundConfig};
//! use ts_motion::LinearMotionProvider;
//! use ts_sim::{NoopObserver, RoundBuilder};
//!
//! let mut round = RoundBuilder::new(RoundConfig::default(), LinearMotionProvider::default())
//!     .station(slots, exit)
//!     .spawn_points(vec![Point::new(0.0, 0.0, 12.0)])
//!     .exit_points(vec![Point::new(0.0, 0.0, -8.0)])
//!     .build()?;
//! let outcome = round.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod observer;
pub mod player;
pub mod round;
pub mod spawner;


pub use builder::RoundBuilder;
pub use coordinator::{FinishReport, RoundCoordinator, RoundOutcome};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RoundObserver};
pub use player::{PlayerEvent, PlayerOrder, PlayerProxy, request_suspend};
pub use round::Round;
pub use spawner::Spawner;
