//! Unit tests for ts-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TravelerId};

    #[test]
    fn index_roundtrip() {
        let id = TravelerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TravelerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn station_id_rejects_overflow() {
        assert!(StationId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TravelerId::INVALID.0, u32::MAX);
        assert_eq!(StationId::INVALID.0, u16::MAX);
        assert_eq!(TravelerId::default(), TravelerId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(TravelerId(7).to_string(), "TravelerId(7)");
        assert_eq!(StationId(2).to_string(), "StationId(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn planar_distance_ignores_height() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 10.0, 4.0);
        assert!((a.planar_distance(b) - 5.0).abs() < 1e-6);
        assert!(a.distance(b) > 10.0);
    }

    #[test]
    fn lerp_clamps() {
        let a = Point::ORIGIN;
        let b = Point::new(2.0, 0.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(1.0, 0.0, 0.0));
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn move_towards_never_overshoots() {
        let a = Point::ORIGIN;
        let b = Point::new(0.0, 0.0, 1.0);
        let step = a.move_towards(b, 0.25);
        assert!((step.z - 0.25).abs() < 1e-6);
        assert_eq!(a.move_towards(b, 5.0), b);
    }

    #[test]
    fn raised_only_touches_height() {
        let p = Point::new(1.0, 0.5, -2.0).raised(1.0);
        assert_eq!(p, Point::new(1.0, 1.5, -2.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_accumulates_scaled_delta() {
        let mut clock = SimClock::new(0.5);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn frozen_clock_has_zero_delta() {
        let mut clock = SimClock::new(0.1);
        clock.freeze();
        assert!(clock.is_frozen());
        assert_eq!(clock.delta(), 0.0);
        clock.resume();
        assert!(!clock.is_frozen());
        assert!((clock.delta() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.25);
        assert_eq!(clock.ticks_for_secs(1.0), 4);
        assert_eq!(clock.ticks_for_secs(1.1), 5);
        assert_eq!(clock.ticks_for_secs(0.0), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, TravelerId, TravelerRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TravelerRng::new(12345, TravelerId(0));
        let mut r2 = TravelerRng::new(12345, TravelerId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_travelers_differ() {
        let mut r0 = TravelerRng::new(1, TravelerId(0));
        let mut r1 = TravelerRng::new(1, TravelerId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent travelers should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = TravelerRng::new(0, TravelerId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_index_bounds() {
        let mut rng = SimRng::new(3);
        assert_eq!(rng.choose_index(0), None);
        for _ in 0..200 {
            let i = rng.choose_index(3).unwrap();
            assert!(i < 3);
        }
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}

#[cfg(test)]
mod kind {
    use crate::StationKind;

    #[test]
    fn only_normal_permits_fraud() {
        assert!(StationKind::Normal.permits_fraud());
        assert!(!StationKind::Gate.permits_fraud());
        assert_eq!(StationKind::default(), StationKind::Normal);
    }

    #[test]
    fn display() {
        assert_eq!(StationKind::Gate.to_string(), "gate");
    }
}

#[cfg(test)]
mod config {
    use crate::{RoundConfig, TsError};

    #[test]
    fn defaults_are_valid() {
        let cfg = RoundConfig::default();
        assert_eq!(cfg.total_travelers, 20);
        assert_eq!(cfg.max_fraud_success, 3);
        cfg.validate().unwrap();
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = RoundConfig { total_travelers: 0, ..RoundConfig::default() };
        assert!(matches!(cfg.validate(), Err(TsError::Config(_))));
    }

    #[test]
    fn bad_tick_rejected() {
        let cfg = RoundConfig { tick_secs: 0.0, ..RoundConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = RoundConfig { tick_secs: f32::NAN, ..RoundConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let mut cfg = RoundConfig::default();
        cfg.traveler.fraud_probability = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_duration_rejected() {
        let mut cfg = RoundConfig::default();
        cfg.station.badge_secs = -0.1;
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("station.badge_secs"), "{err}");
    }
}
