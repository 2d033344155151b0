//! Unit tests for ts-motion.

use ts_core::Point;

use crate::{LinearMotion, LinearMotionProvider, MotionAgent, MotionProvider};

fn walker() -> LinearMotion {
    LinearMotion::new(Point::ORIGIN, 2.0)
}

#[cfg(test)]
mod linear_motion {
    use super::*;

    #[test]
    fn idle_agent_has_arrived() {
        let m = walker();
        assert_eq!(m.destination(), None);
        assert_eq!(m.remaining_distance(), 0.0);
        assert!(m.has_arrived(0.0));
    }

    #[test]
    fn path_is_pending_for_one_step() {
        let mut m = walker();
        m.set_destination(Point::new(0.0, 0.0, 4.0));
        assert!(m.is_pending());
        assert_eq!(m.remaining_distance(), f32::INFINITY);

        m.step(0.5);
        assert!(!m.is_pending());
        // The resolving frame does not move the body.
        assert_eq!(m.position(), Point::ORIGIN);
        assert!((m.remaining_distance() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn walks_at_speed_and_stops_on_target() {
        let mut m = walker();
        let target = Point::new(0.0, 0.0, 3.0);
        m.set_destination(target);
        m.step(0.5); // resolve
        m.step(0.5);
        assert!((m.position().z - 1.0).abs() < 1e-6);
        for _ in 0..10 {
            m.step(0.5);
        }
        assert_eq!(m.position(), target);
        assert!(m.has_arrived(0.01));
    }

    #[test]
    fn stopped_agent_holds_position() {
        let mut m = walker();
        m.set_destination(Point::new(5.0, 0.0, 0.0));
        m.step(0.1);
        m.set_stopped(true);
        m.step(1.0);
        assert_eq!(m.position(), Point::ORIGIN);
        m.set_stopped(false);
        m.step(1.0);
        assert!((m.position().x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn disabled_agent_ignores_destination_and_steps() {
        let mut m = walker();
        m.set_enabled(false);
        m.set_destination(Point::new(1.0, 0.0, 0.0));
        assert_eq!(m.destination(), None);
        m.warp(Point::new(0.0, 1.0, 0.0));
        m.step(1.0);
        assert_eq!(m.position(), Point::new(0.0, 1.0, 0.0));
        m.set_enabled(true);
        assert!(m.is_enabled());
    }
}

#[cfg(test)]
mod provider {
    use super::*;

    #[test]
    fn spawns_at_requested_point() {
        let provider = LinearMotionProvider::new(4.0);
        let at = Point::new(1.0, 0.0, 2.0);
        let m = provider.spawn(at);
        assert_eq!(m.position(), at);
        assert_eq!(m.speed(), 4.0);
        assert!(m.is_enabled());
        assert!(!m.is_stopped());
    }

    #[test]
    fn default_speed() {
        assert_eq!(LinearMotionProvider::default().speed, 3.5);
    }
}
