//! Unit tests for ts-station.

use std::collections::{BTreeMap, BTreeSet};

use ts_core::{Point, StationId, StationKind, StationTuning, TravelerId};

use crate::{Admission, QueueMembers, ServiceTicket, Station, StationError, TurnstileRotation};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Scripted queue members: liveness and arrival are set by the test.
#[derive(Default)]
struct Script {
    live:     BTreeSet<TravelerId>,
    arrived:  BTreeSet<TravelerId>,
    refuse:   BTreeSet<TravelerId>,
    slots:    BTreeMap<TravelerId, (usize, Point)>,
    admitted: Vec<(TravelerId, ServiceTicket)>,
}

impl Script {
    fn with_live(ids: &[u32]) -> Self {
        Self {
            live: ids.iter().map(|&i| TravelerId(i)).collect(),
            ..Self::default()
        }
    }

    fn slot_of(&self, id: u32) -> Option<usize> {
        self.slots.get(&TravelerId(id)).map(|&(s, _)| s)
    }
}

impl QueueMembers for Script {
    fn is_live(&self, traveler: TravelerId) -> bool {
        self.live.contains(&traveler)
    }

    fn assign_slot(&mut self, traveler: TravelerId, slot: usize, position: Point) {
        if self.live.contains(&traveler) {
            self.slots.insert(traveler, (slot, position));
        }
    }

    fn has_arrived(&self, traveler: TravelerId, _admission_point: Point) -> bool {
        self.arrived.contains(&traveler)
    }

    fn begin_passing(&mut self, traveler: TravelerId, ticket: ServiceTicket) -> bool {
        if self.refuse.contains(&traveler) {
            return false;
        }
        self.admitted.push((traveler, ticket));
        true
    }
}

fn slots(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(0.0, 0.0, i as f32)).collect()
}

fn station(n_slots: usize) -> Station {
    Station::new(StationId(0), slots(n_slots), Point::new(0.0, 0.0, -2.0), &StationTuning::default())
        .unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn empty_slot_list_is_rejected() {
        let err = Station::new(StationId(4), vec![], Point::ORIGIN, &StationTuning::default())
            .unwrap_err();
        assert!(matches!(err, StationError::NoQueueSlots(StationId(4))));
    }

    #[test]
    fn starts_idle_and_normal() {
        let s = station(3);
        assert!(!s.is_busy());
        assert_eq!(s.kind(), StationKind::Normal);
        assert!(s.permits_fraud());
        assert_eq!(s.queue_len(), 0);
        assert_eq!(s.admission_point(), Point::ORIGIN);
    }

    #[test]
    fn slot_position_clamps_to_last_slot() {
        let s = station(2);
        assert_eq!(s.slot_position(1), Point::new(0.0, 0.0, 1.0));
        assert_eq!(s.slot_position(9), Point::new(0.0, 0.0, 1.0));
    }
}

// ── Enqueue / admission ───────────────────────────────────────────────────────

#[cfg(test)]
mod admission {
    use super::*;

    #[test]
    fn enqueue_assigns_consecutive_slots() {
        let mut s = station(4);
        let mut m = Script::with_live(&[1, 2, 3]);
        for id in [1, 2, 3] {
            assert_eq!(s.enqueue(TravelerId(id), &mut m), Admission::Waiting(TravelerId(1)));
        }
        assert_eq!(m.slot_of(1), Some(0));
        assert_eq!(m.slot_of(2), Some(1));
        assert_eq!(m.slot_of(3), Some(2));
        assert_eq!(m.slots[&TravelerId(3)].1, Point::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn enqueue_twice_does_not_duplicate() {
        let mut s = station(4);
        let mut m = Script::with_live(&[1, 2]);
        s.enqueue(TravelerId(1), &mut m);
        s.enqueue(TravelerId(2), &mut m);
        s.enqueue(TravelerId(1), &mut m);
        assert_eq!(s.queue_len(), 2);
        assert_eq!(m.slot_of(1), Some(0));
    }

    #[test]
    fn empty_queue_reports_empty() {
        let mut s = station(1);
        let mut m = Script::default();
        assert_eq!(s.try_admit(&mut m), Admission::Empty);
    }

    #[test]
    fn head_is_admitted_once_arrived() {
        let mut s = station(2);
        let mut m = Script::with_live(&[1, 2]);
        s.enqueue(TravelerId(1), &mut m);
        s.enqueue(TravelerId(2), &mut m);

        // Second in line arriving first changes nothing.
        m.arrived.insert(TravelerId(2));
        assert_eq!(s.try_admit(&mut m), Admission::Waiting(TravelerId(1)));
        assert!(!s.is_busy());

        m.arrived.insert(TravelerId(1));
        assert_eq!(s.try_admit(&mut m), Admission::Admitted(TravelerId(1)));
        assert!(s.is_busy());
        assert_eq!(m.admitted.len(), 1);

        // Busy gate holds regardless of who else is ready.
        assert_eq!(s.try_admit(&mut m), Admission::Busy);
        assert_eq!(m.admitted.len(), 1);
    }

    #[test]
    fn refused_signal_leaves_station_free() {
        let mut s = station(1);
        let mut m = Script::with_live(&[1]);
        m.arrived.insert(TravelerId(1));
        m.refuse.insert(TravelerId(1));
        assert_eq!(s.enqueue(TravelerId(1), &mut m), Admission::Waiting(TravelerId(1)));
        assert!(!s.is_busy());
    }

    #[test]
    fn ticket_carries_live_fraud_permission() {
        let mut s = station(1);
        let mut m = Script::with_live(&[1]);
        s.enqueue(TravelerId(1), &mut m);
        s.upgrade();
        m.arrived.insert(TravelerId(1));
        s.try_admit(&mut m);
        let (_, ticket) = m.admitted[0];
        assert!(!ticket.fraud_permitted);
        assert_eq!(ticket.station, StationId(0));
        assert_eq!(ticket.exit_point, Point::new(0.0, 0.0, -2.0));
        assert_eq!(ticket.badge_secs, StationTuning::default().badge_secs);
    }

    #[test]
    fn stale_head_is_skipped_and_queue_renumbered() {
        let mut s = station(4);
        let mut m = Script::with_live(&[1, 2, 3]);
        for id in [1, 2, 3] {
            s.enqueue(TravelerId(id), &mut m);
        }

        // Head destroyed externally while the station is idle.
        m.live.remove(&TravelerId(1));
        m.slots.remove(&TravelerId(1));

        assert_eq!(s.try_admit(&mut m), Admission::Waiting(TravelerId(2)));
        assert_eq!(s.queue_len(), 2);
        assert_eq!(m.slot_of(2), Some(0));
        assert_eq!(m.slot_of(3), Some(1));

        m.arrived.insert(TravelerId(2));
        assert_eq!(s.try_admit(&mut m), Admission::Admitted(TravelerId(2)));
    }

    #[test]
    fn queue_of_only_stale_handles_drains_to_empty() {
        let mut s = station(2);
        let mut m = Script::with_live(&[1, 2]);
        s.enqueue(TravelerId(1), &mut m);
        s.enqueue(TravelerId(2), &mut m);
        m.live.clear();
        assert_eq!(s.try_admit(&mut m), Admission::Empty);
        assert_eq!(s.queue_len(), 0);
    }
}

// ── Release / evict ───────────────────────────────────────────────────────────

#[cfg(test)]
mod release {
    use super::*;

    fn serving_one_of_three() -> (Station, Script) {
        let mut s = station(4);
        let mut m = Script::with_live(&[1, 2, 3]);
        for id in [1, 2, 3] {
            s.enqueue(TravelerId(id), &mut m);
        }
        m.arrived.insert(TravelerId(1));
        assert_eq!(s.try_admit(&mut m), Admission::Admitted(TravelerId(1)));
        (s, m)
    }

    #[test]
    fn release_advances_queue_and_frees_station() {
        let (mut s, mut m) = serving_one_of_three();
        let next = s.release(TravelerId(1), &mut m).unwrap();
        assert_eq!(next, Admission::Waiting(TravelerId(2)));
        assert!(!s.is_busy());
        assert_eq!(m.slot_of(2), Some(0));
        assert_eq!(m.slot_of(3), Some(1));
    }

    #[test]
    fn release_admits_next_head_if_ready() {
        let (mut s, mut m) = serving_one_of_three();
        m.arrived.insert(TravelerId(2));
        let next = s.release(TravelerId(1), &mut m).unwrap();
        assert_eq!(next, Admission::Admitted(TravelerId(2)));
        assert!(s.is_busy());
    }

    #[test]
    fn double_release_is_rejected() {
        let (mut s, mut m) = serving_one_of_three();
        s.release(TravelerId(1), &mut m).unwrap();
        let err = s.release(TravelerId(1), &mut m).unwrap_err();
        assert!(matches!(err, StationError::NotServing { .. }));
        assert_eq!(s.queue_len(), 2);
    }

    #[test]
    fn release_by_non_head_is_rejected() {
        let (mut s, mut m) = serving_one_of_three();
        let err = s.release(TravelerId(3), &mut m).unwrap_err();
        assert!(matches!(err, StationError::NotHead { head: Some(TravelerId(1)), .. }));
        assert!(s.is_busy());
    }

    #[test]
    fn evict_clears_busy_for_vanished_head() {
        let (mut s, mut m) = serving_one_of_three();
        m.live.remove(&TravelerId(1));
        let next = s.evict(TravelerId(1), &mut m);
        assert_eq!(next, Admission::Waiting(TravelerId(2)));
        assert!(!s.is_busy());
        assert_eq!(m.slot_of(3), Some(1));
    }

    #[test]
    fn evict_of_non_head_keeps_service() {
        let (mut s, mut m) = serving_one_of_three();
        assert_eq!(s.evict(TravelerId(3), &mut m), Admission::Busy);
        assert!(s.is_busy());
    }
}

// ── Kind / animation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod upgrade_and_animation {
    use super::*;

    #[test]
    fn upgrade_is_one_way_and_idempotent() {
        let mut s = station(1);
        assert!(s.upgrade());
        assert_eq!(s.kind(), StationKind::Gate);
        assert!(!s.permits_fraud());
        assert!(!s.upgrade());
        assert_eq!(s.kind(), StationKind::Gate);
    }

    #[test]
    fn gate_kind_from_builder() {
        let s = station(1).with_kind(StationKind::Gate);
        assert!(!s.permits_fraud());
    }

    #[test]
    fn rotation_reaches_step_after_duration() {
        let mut r = TurnstileRotation::new(60.0, 0.2);
        r.play();
        r.advance(0.1);
        assert!((r.angle_deg() - 30.0).abs() < 1e-3);
        assert!(r.is_rotating());
        r.advance(0.2);
        assert!((r.angle_deg() - 60.0).abs() < 1e-3);
        assert!(!r.is_rotating());
    }

    #[test]
    fn replay_mid_rotation_restarts_from_current_angle() {
        let mut r = TurnstileRotation::new(60.0, 0.2);
        r.play();
        r.advance(0.1);
        r.play();
        r.advance(1.0);
        assert!((r.angle_deg() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn station_forwards_animation() {
        let mut s = station(1);
        s.play_animation();
        s.advance(1.0);
        assert!((s.rotation().angle_deg() - 60.0).abs() < 1e-3);
    }
}
