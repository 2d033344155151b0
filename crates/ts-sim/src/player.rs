//! The player as seen by the round: a body that walks where it is told and
//! inspects post-gate travelers it catches up with.

use ts_core::{PlayerTuning, Point, TravelerId};
use ts_motion::MotionAgent;
use ts_traveler::TravelerStore;

/// The chased traveler may drift this far from the player's current
/// destination before the player re-plans.
const RETARGET_DISTANCE: f32 = 0.5;
/// Slack on top of the interaction range for the remaining-path check.
const RANGE_SLACK: f32 = 0.1;

/// What the player is currently doing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayerOrder {
    Idle,
    MoveTo(Point),
    Chase(TravelerId),
    /// Standing still while the traveler is inspected.
    Controlling(TravelerId),
}

/// Something that happened to the player's order this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    SuspensionStarted(TravelerId),
    /// The chased traveler vanished or stopped being eligible.
    ChaseCancelled(TravelerId),
    ControlEnded(TravelerId),
}

/// The player-controlled body.
pub struct PlayerProxy<M: MotionAgent> {
    pub motion: M,
    order:      PlayerOrder,
    tuning:     PlayerTuning,
}

/// Ask `traveler` to halt for `duration` seconds.
///
/// Only post-gate travelers may be inspected; anything else, or a traveler
/// that no longer exists, is refused.
pub fn request_suspend<M: MotionAgent>(
    travelers: &mut TravelerStore<M>,
    traveler:  TravelerId,
    duration:  f32,
) -> bool {
    let Some(t) = travelers.get_mut(traveler) else {
        return false;
    };
    if !t.is_suspendable() {
        return false;
    }
    match t.suspend(duration) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(%traveler, error = %e, "inspection refused");
            false
        }
    }
}

impl<M: MotionAgent> PlayerProxy<M> {
    pub fn new(motion: M, tuning: PlayerTuning) -> Self {
        Self { motion, order: PlayerOrder::Idle, tuning }
    }

    #[inline]
    pub fn order(&self) -> PlayerOrder {
        self.order
    }

    #[inline]
    pub fn is_controlling(&self) -> bool {
        matches!(self.order, PlayerOrder::Controlling(_))
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.motion.position()
    }

    // ── Orders ────────────────────────────────────────────────────────────

    /// Walk to `target`, dropping any chase.  Ignored while inspecting.
    pub fn move_to(&mut self, target: Point) -> bool {
        if self.is_controlling() {
            return false;
        }
        self.order = PlayerOrder::MoveTo(target);
        self.motion.set_stopped(false);
        self.motion.set_destination(target);
        true
    }

    /// Pursue a post-gate traveler and inspect it on contact.
    pub fn chase<T: MotionAgent>(&mut self, traveler: TravelerId, travelers: &TravelerStore<T>) -> bool {
        if self.is_controlling() {
            return false;
        }
        let Some(t) = travelers.get(traveler) else {
            return false;
        };
        if !t.is_suspendable() {
            return false;
        }
        self.order = PlayerOrder::Chase(traveler);
        self.motion.set_stopped(false);
        self.motion.set_destination(t.position());
        true
    }

    // ── Per-frame update ──────────────────────────────────────────────────

    pub fn tick<T: MotionAgent>(&mut self, travelers: &mut TravelerStore<T>) -> Option<PlayerEvent> {
        match self.order {
            PlayerOrder::Idle => None,
            PlayerOrder::MoveTo(_) => {
                if self.motion.has_arrived(RANGE_SLACK) {
                    self.order = PlayerOrder::Idle;
                }
                None
            }
            PlayerOrder::Chase(id) => self.pursue(id, travelers),
            PlayerOrder::Controlling(id) => {
                let still_held = travelers
                    .get(id)
                    .is_some_and(|t| t.suspension().is_some());
                if still_held {
                    return None;
                }
                self.order = PlayerOrder::Idle;
                self.motion.set_stopped(false);
                Some(PlayerEvent::ControlEnded(id))
            }
        }
    }

    fn pursue<T: MotionAgent>(&mut self, id: TravelerId, travelers: &mut TravelerStore<T>) -> Option<PlayerEvent> {
        let target = match travelers.get(id) {
            Some(t) if t.is_suspendable() => t.position(),
            _ => {
                self.order = PlayerOrder::Idle;
                return Some(PlayerEvent::ChaseCancelled(id));
            }
        };

        let stale = self
            .motion
            .destination()
            .is_none_or(|d| d.distance(target) > RETARGET_DISTANCE);
        if stale {
            self.motion.set_destination(target);
        }

        let range = self.tuning.interaction_range;
        let close = self.motion.position().distance(target) <= range;
        let settled = self.motion.has_arrived(range + RANGE_SLACK);
        if !(close && settled) {
            return None;
        }

        if request_suspend(travelers, id, self.tuning.control_secs) {
            self.motion.set_stopped(true);
            self.order = PlayerOrder::Controlling(id);
            Some(PlayerEvent::SuspensionStarted(id))
        } else {
            self.order = PlayerOrder::Idle;
            Some(PlayerEvent::ChaseCancelled(id))
        }
    }
}
