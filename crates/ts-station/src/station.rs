//! The `Station` struct and its admission protocol.

use std::collections::VecDeque;

use ts_core::{Point, StationId, StationKind, StationTuning, TravelerId};

use crate::{Admission, QueueMembers, ServiceTicket, StationError, StationResult, TurnstileRotation};

/// One physical turnstile with its FIFO queue.
///
/// Slot 0 is the admission point; slot `i` is where the `i`-th queued
/// traveler stands.  Travelers beyond the last slot share the last one.
#[derive(Debug, Clone)]
pub struct Station {
    pub id:     StationId,
    kind:       StationKind,
    slots:      Vec<Point>,
    exit_point: Point,
    badge_secs: f32,
    queue:      VecDeque<TravelerId>,
    busy:       bool,
    rotation:   TurnstileRotation,
}

impl Station {
    /// Build a `Normal` station.  Fails if `slots` is empty.
    pub fn new(
        id:         StationId,
        slots:      Vec<Point>,
        exit_point: Point,
        tuning:     &StationTuning,
    ) -> StationResult<Self> {
        if slots.is_empty() {
            return Err(StationError::NoQueueSlots(id));
        }
        Ok(Self {
            id,
            kind: StationKind::Normal,
            slots,
            exit_point,
            badge_secs: tuning.badge_secs,
            queue: VecDeque::new(),
            busy: false,
            rotation: TurnstileRotation::new(tuning.rotation_deg, tuning.rotation_secs),
        })
    }

    /// Builder-style initial kind.  Use [`upgrade`](Self::upgrade) mid-round.
    pub fn with_kind(mut self, kind: StationKind) -> Self {
        self.kind = kind;
        self
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> StationKind {
        self.kind
    }

    #[inline]
    pub fn permits_fraud(&self) -> bool {
        self.kind.permits_fraud()
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[inline]
    pub fn exit_point(&self) -> Point {
        self.exit_point
    }

    #[inline]
    pub fn admission_point(&self) -> Point {
        self.slots[0]
    }

    pub fn slots(&self) -> &[Point] {
        &self.slots
    }

    /// World position of `slot`, clamped to the last configured slot.
    #[inline]
    pub fn slot_position(&self, slot: usize) -> Point {
        self.slots[slot.min(self.slots.len() - 1)]
    }

    /// Queued handles in admission order (may include stale ones until the
    /// next admission attempt).
    pub fn queue(&self) -> impl Iterator<Item = TravelerId> + '_ {
        self.queue.iter().copied()
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn head(&self) -> Option<TravelerId> {
        self.queue.front().copied()
    }

    pub fn rotation(&self) -> &TurnstileRotation {
        &self.rotation
    }

    // ── Admission protocol ────────────────────────────────────────────────

    /// Append `traveler` (once), give it its slot, and attempt admission.
    pub fn enqueue<Q: QueueMembers>(&mut self, traveler: TravelerId, members: &mut Q) -> Admission {
        let slot = match self.queue.iter().position(|&t| t == traveler) {
            Some(existing) => existing,
            None => {
                self.queue.push_back(traveler);
                self.queue.len() - 1
            }
        };
        members.assign_slot(traveler, slot, self.slot_position(slot));
        self.try_admit(members)
    }

    /// Admit the head if it is live, standing on slot 0, and nobody is being
    /// served.  Stale heads are dropped and the queue renumbered before
    /// retrying.
    pub fn try_admit<Q: QueueMembers>(&mut self, members: &mut Q) -> Admission {
        loop {
            if self.busy {
                return Admission::Busy;
            }
            let Some(head) = self.head() else {
                return Admission::Empty;
            };

            if !members.is_live(head) {
                tracing::debug!(station = %self.id, traveler = %head, "skipping stale queue head");
                self.queue.pop_front();
                self.renumber(members);
                continue;
            }

            if !members.has_arrived(head, self.admission_point()) {
                return Admission::Waiting(head);
            }

            self.busy = true;
            if !members.begin_passing(head, self.ticket()) {
                self.busy = false;
                return Admission::Waiting(head);
            }
            tracing::debug!(station = %self.id, traveler = %head, kind = %self.kind, "admitted");
            return Admission::Admitted(head);
        }
    }

    /// End the current service.  Only the traveler being served may call it,
    /// and only once.
    pub fn release<Q: QueueMembers>(
        &mut self,
        traveler: TravelerId,
        members:  &mut Q,
    ) -> StationResult<Admission> {
        if !self.busy {
            return Err(StationError::NotServing { station: self.id, traveler });
        }
        if self.head() != Some(traveler) {
            return Err(StationError::NotHead {
                station: self.id,
                traveler,
                head: self.head(),
            });
        }
        self.queue.pop_front();
        self.renumber(members);
        self.busy = false;
        Ok(self.try_admit(members))
    }

    /// Drop `traveler` from the head after it vanished mid-service so the
    /// station does not stay busy forever.  No-op if it is not the head.
    pub fn evict<Q: QueueMembers>(&mut self, traveler: TravelerId, members: &mut Q) -> Admission {
        if self.head() != Some(traveler) {
            return self.try_admit(members);
        }
        tracing::debug!(station = %self.id, %traveler, "evicting head mid-service");
        self.queue.pop_front();
        self.renumber(members);
        self.busy = false;
        self.try_admit(members)
    }

    /// Turn this station into a full-height gate.  Returns `false` if it
    /// already was one.
    pub fn upgrade(&mut self) -> bool {
        if self.kind == StationKind::Gate {
            return false;
        }
        self.kind = StationKind::Gate;
        tracing::info!(station = %self.id, "upgraded to gate; hopping no longer possible");
        true
    }

    // ── Animation ─────────────────────────────────────────────────────────

    pub fn play_animation(&mut self) {
        self.rotation.play();
    }

    /// Advance per-frame cosmetic state.
    pub fn advance(&mut self, dt: f32) {
        self.rotation.advance(dt);
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn ticket(&self) -> ServiceTicket {
        ServiceTicket {
            station:         self.id,
            fraud_permitted: self.permits_fraud(),
            exit_point:      self.exit_point,
            badge_secs:      self.badge_secs,
        }
    }

    /// Purge dead handles and reassign dense slots `0..n` in queue order.
    fn renumber<Q: QueueMembers>(&mut self, members: &mut Q) {
        self.queue.retain(|&t| members.is_live(t));
        for (slot, &traveler) in self.queue.iter().enumerate() {
            members.assign_slot(traveler, slot, self.slot_position(slot));
        }
    }
}
