//! The station's view of the travelers it queues.

use ts_core::{Point, StationId, TravelerId};

/// Everything a traveler needs to run its pass-through, handed over at the
/// moment of admission.
///
/// `fraud_permitted` is read from the station's kind *at admission*, so an
/// upgrade to `Gate` that happened while the traveler was still queued
/// suppresses its fraud even though its intent was rolled earlier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ServiceTicket {
    pub station:         StationId,
    pub fraud_permitted: bool,
    /// Far side of the turnstile: hop landing point and paying exit.
    pub exit_point:      Point,
    pub badge_secs:      f32,
}

/// Result of an admission attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Someone is already being served.
    Busy,
    /// No live traveler is queued.
    Empty,
    /// The head has not reached slot 0 yet; try again next frame.
    Waiting(TravelerId),
    /// The head was signalled and is now being served.
    Admitted(TravelerId),
}

/// Callbacks a station uses to inspect and drive its queued travelers.
///
/// Implemented by the traveler store.  Every method must tolerate a handle
/// whose traveler no longer exists.
pub trait QueueMembers {
    /// `false` once the traveler has been destroyed.
    fn is_live(&self, traveler: TravelerId) -> bool;

    /// Tell a traveler its (new) queue index and the world position of it.
    fn assign_slot(&mut self, traveler: TravelerId, slot: usize, position: Point);

    /// Has the traveler settled on the admission point?
    fn has_arrived(&self, traveler: TravelerId, admission_point: Point) -> bool;

    /// Signal the traveler to start passing through.  Returns `false` if it
    /// refused (already passing, not at slot 0, …).
    fn begin_passing(&mut self, traveler: TravelerId, ticket: ServiceTicket) -> bool;
}
