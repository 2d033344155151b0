//! One traveler and its transitions.

use ts_core::{Point, StationId, TravelerId, TravelerTuning};
use ts_motion::MotionAgent;
use ts_station::ServiceTicket;

use crate::routine::hop_position;
use crate::{Intent, PassRoutine, PassStage, Suspension, TravelerError, TravelerResult, TravelerState};

/// Planar radius around slot 0 that counts as "at the front".
const FRONT_RADIUS: f32 = 0.4;
/// Lower bound on the arrival tolerance used for the front-of-queue check.
const FRONT_ARRIVE_FLOOR: f32 = 0.2;
/// Lower bound on the arrival tolerance used for the exit check.
const EXIT_ARRIVE_FLOOR: f32 = 0.3;
/// Queuing travelers closer than this to their slot are pulled onto it.
const SNAP_RADIUS: f32 = 0.6;

/// An autonomous agent traversing spawn → queue → service → exit.
///
/// The station it was assigned at spawn never changes.  `queue_slot` is the
/// only field written from outside (by the station, through the store).
pub struct Traveler<M: MotionAgent> {
    pub id:          TravelerId,
    station:         StationId,
    state:           TravelerState,
    queue_slot:      Option<usize>,
    slot_position:   Option<Point>,
    fraud_intent:    bool,
    fraud_succeeded: bool,
    pass:            Option<PassRoutine>,
    suspension:      Option<Suspension>,
    tuning:          TravelerTuning,
    pub motion:      M,
}

impl<M: MotionAgent> Traveler<M> {
    pub fn new(
        id:           TravelerId,
        station:      StationId,
        fraud_intent: bool,
        tuning:       TravelerTuning,
        motion:       M,
    ) -> Self {
        Self {
            id,
            station,
            state: TravelerState::GoingToQueue,
            queue_slot: None,
            slot_position: None,
            fraud_intent,
            fraud_succeeded: false,
            pass: None,
            suspension: None,
            tuning,
            motion,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn station(&self) -> StationId {
        self.station
    }

    #[inline]
    pub fn state(&self) -> TravelerState {
        self.state
    }

    #[inline]
    pub fn queue_slot(&self) -> Option<usize> {
        self.queue_slot
    }

    #[inline]
    pub fn fraud_intent(&self) -> bool {
        self.fraud_intent
    }

    #[inline]
    pub fn fraud_succeeded(&self) -> bool {
        self.fraud_succeeded
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.motion.position()
    }

    pub fn pass(&self) -> Option<&PassRoutine> {
        self.pass.as_ref()
    }

    pub fn suspension(&self) -> Option<&Suspension> {
        self.suspension.as_ref()
    }

    /// Inspection progress in `[0, 1]`, `None` when not being inspected.
    pub fn suspension_progress(&self) -> Option<f32> {
        self.suspension.as_ref().map(Suspension::progress)
    }

    /// `true` while hopping a turnstile.
    pub fn is_jumping(&self) -> bool {
        self.pass.as_ref().is_some_and(PassRoutine::is_jumping)
    }

    /// Whether the player may start an inspection right now.
    #[inline]
    pub fn is_suspendable(&self) -> bool {
        self.state == TravelerState::PostGate
    }

    // ── Signals from the station ──────────────────────────────────────────

    /// New queue index and its world position.  Re-targets the body unless
    /// the traveler is inspected, passing or gone; an inspected traveler
    /// picks the latest slot up when it resumes.
    pub fn set_queue_slot(&mut self, slot: usize, position: Point) {
        self.queue_slot = Some(slot);
        self.slot_position = Some(position);
        if matches!(self.state, TravelerState::GoingToQueue | TravelerState::Queuing) {
            self.go_to_queue_point();
        }
    }

    /// Standing on slot 0, path resolved, and free to be admitted.
    pub fn is_at_front(&self, admission_point: Point) -> bool {
        if self.state != TravelerState::Queuing || self.queue_slot != Some(0) || self.pass.is_some() {
            return false;
        }
        let close = self.motion.position().planar_distance(admission_point) <= FRONT_RADIUS;
        close && self.motion.has_arrived(self.tuning.arrive_distance.max(FRONT_ARRIVE_FLOOR))
    }

    /// Admission signal.  Fires once: later signals, signals from another
    /// station, and signals to anyone not queuing at slot 0 are refused.
    pub fn begin_passing(&mut self, ticket: ServiceTicket) -> bool {
        if self.pass.is_some()
            || ticket.station != self.station
            || self.state != TravelerState::Queuing
            || self.queue_slot != Some(0)
        {
            return false;
        }

        let fraud = self.fraud_intent && ticket.fraud_permitted;
        let stage = if fraud {
            let from = self.motion.position();
            self.motion.set_stopped(true);
            self.motion.set_enabled(false);
            PassStage::Jump { from, to: ticket.exit_point, elapsed: 0.0 }
        } else {
            self.motion.set_stopped(false);
            self.motion.set_destination(ticket.exit_point);
            PassStage::Badge { elapsed: 0.0 }
        };

        self.state = TravelerState::Passing;
        self.pass = Some(PassRoutine {
            station: ticket.station,
            fraud,
            stage,
            badge_secs: ticket.badge_secs,
        });
        tracing::debug!(traveler = %self.id, station = %ticket.station, fraud, "passing through");
        true
    }

    /// Answer to [`Intent::RequestExit`].
    pub fn head_to_exit(&mut self, exit: Point) {
        self.motion.set_destination(exit);
    }

    // ── Signal from the player ────────────────────────────────────────────

    /// Halt for `duration` seconds, then resume the current state.
    ///
    /// Only re-entrancy is guarded here; restricting inspections to
    /// `PostGate` is the controlling actor's job.
    pub fn suspend(&mut self, duration: f32) -> TravelerResult<()> {
        match self.state {
            TravelerState::Exited => Err(TravelerError::AlreadyExited(self.id)),
            TravelerState::Controlled => Err(TravelerError::AlreadySuspended(self.id)),
            TravelerState::Passing => Err(TravelerError::InService(self.id)),
            _ if !(duration.is_finite() && duration >= 0.0) => {
                Err(TravelerError::InvalidDuration(duration))
            }
            prior => {
                self.state = TravelerState::Controlled;
                if self.motion.is_enabled() {
                    self.motion.set_stopped(true);
                }
                self.suspension = Some(Suspension::new(prior, duration));
                tracing::debug!(traveler = %self.id, %prior, duration, "inspection started");
                Ok(())
            }
        }
    }

    // ── Per-frame update ──────────────────────────────────────────────────

    /// Advance one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Vec<Intent> {
        let mut out = Vec::new();
        match self.state {
            TravelerState::GoingToQueue | TravelerState::Exited => {}
            TravelerState::Queuing    => self.snap_to_queue_point(dt),
            TravelerState::Passing    => self.advance_pass(dt, &mut out),
            TravelerState::PostGate   => self.check_exit_arrival(&mut out),
            TravelerState::Controlled => self.advance_suspension(dt, &mut out),
        }
        out
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn go_to_queue_point(&mut self) {
        let Some(target) = self.slot_position else {
            return;
        };
        self.motion.set_stopped(false);
        self.motion.set_destination(target);
        self.state = TravelerState::Queuing;
    }

    /// Cosmetic pull onto the slot, independent of navigation.
    fn snap_to_queue_point(&mut self, dt: f32) {
        let Some(target) = self.slot_position else {
            return;
        };
        let pos = self.motion.position();
        if pos.distance(target) <= SNAP_RADIUS && !self.motion.is_pending() {
            self.motion.warp(pos.lerp(target, dt * self.tuning.queue_snap_speed));
        }
    }

    fn advance_pass(&mut self, dt: f32, out: &mut Vec<Intent>) {
        let Some(mut pass) = self.pass.take() else {
            return;
        };

        let next = match pass.stage {
            PassStage::Jump { from, to, elapsed } => {
                let elapsed = elapsed + dt;
                let u = elapsed / self.tuning.jump_secs.max(0.001);
                self.motion.warp(hop_position(from, to, u, self.tuning.jump_height));
                if elapsed >= self.tuning.jump_secs {
                    self.motion.warp(to);
                    self.motion.set_enabled(true);
                    self.motion.set_stopped(false);
                    self.fraud_succeeded = true;
                    out.push(Intent::RequestExit);
                    PassStage::Settle { elapsed: 0.0 }
                } else {
                    PassStage::Jump { from, to, elapsed }
                }
            }
            PassStage::Badge { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= pass.badge_secs {
                    out.push(Intent::RequestExit);
                    PassStage::Settle { elapsed: 0.0 }
                } else {
                    PassStage::Badge { elapsed }
                }
            }
            PassStage::Settle { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.tuning.settle_secs {
                    self.state = TravelerState::PostGate;
                    out.push(Intent::Release { station: pass.station });
                    return;
                }
                PassStage::Settle { elapsed }
            }
        };

        pass.stage = next;
        self.pass = Some(pass);
    }

    fn check_exit_arrival(&mut self, out: &mut Vec<Intent>) {
        if self.motion.has_arrived(self.tuning.arrive_distance.max(EXIT_ARRIVE_FLOOR)) {
            self.state = TravelerState::Exited;
            out.push(Intent::Finished { fraud_succeeded: self.fraud_succeeded });
        }
    }

    fn advance_suspension(&mut self, dt: f32, out: &mut Vec<Intent>) {
        let Some(mut suspension) = self.suspension.take() else {
            return;
        };
        suspension.elapsed += dt;
        if !suspension.is_over() {
            self.suspension = Some(suspension);
            return;
        }

        // Being stopped and inspected always voids a fraud credit.
        self.fraud_succeeded = false;
        self.state = suspension.prior;
        if self.motion.is_enabled() {
            self.motion.set_stopped(false);
            if self.state == TravelerState::Queuing {
                self.go_to_queue_point();
            }
        }
        tracing::debug!(traveler = %self.id, state = %self.state, "inspection over");
        out.push(Intent::SuspensionEnded);
    }
}
