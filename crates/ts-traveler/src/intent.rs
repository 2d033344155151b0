//! Requests a traveler hands back to the round after its tick.

use ts_core::StationId;

/// Something a traveler needs done outside its own state.
///
/// Produced by [`Traveler::tick`][crate::Traveler::tick] and consumed by the
/// round's apply phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Pick an exit for me and call `head_to_exit` with it.
    RequestExit,

    /// I am done with this turnstile; advance its queue.
    Release { station: StationId },

    /// I reached my exit.  Emitted exactly once, on the transition to
    /// `Exited`; the round removes the traveler when applying it.
    Finished { fraud_succeeded: bool },

    /// An inspection just ran out and I resumed my previous state.
    SuspensionEnded,
}
