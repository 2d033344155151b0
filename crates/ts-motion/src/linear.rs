//! Straight-line motion: no obstacles, constant speed, one-frame path latency.

use ts_core::Point;

use crate::{MotionAgent, MotionProvider};

/// Per-body movement state for the straight-line model.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMotion {
    position:    Point,
    destination: Option<Point>,
    /// Metres per second.
    speed:       f32,
    pending:     bool,
    stopped:     bool,
    enabled:     bool,
}

impl LinearMotion {
    pub fn new(position: Point, speed: f32) -> Self {
        Self {
            position,
            destination: None,
            speed,
            pending: false,
            stopped: false,
            enabled: true,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl MotionAgent for LinearMotion {
    #[inline]
    fn position(&self) -> Point {
        self.position
    }

    #[inline]
    fn warp(&mut self, to: Point) {
        self.position = to;
    }

    fn set_destination(&mut self, target: Point) {
        if !self.enabled {
            return;
        }
        self.destination = Some(target);
        self.pending = true;
    }

    #[inline]
    fn destination(&self) -> Option<Point> {
        self.destination
    }

    #[inline]
    fn is_pending(&self) -> bool {
        self.pending
    }

    fn remaining_distance(&self) -> f32 {
        if self.pending {
            return f32::INFINITY;
        }
        match self.destination {
            Some(dest) => self.position.distance(dest),
            None => 0.0,
        }
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending = false;
        }
    }

    fn step(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }
        // Path resolution costs exactly one frame, stopped or not.
        if self.pending {
            self.pending = false;
            return;
        }
        if self.stopped {
            return;
        }
        if let Some(dest) = self.destination {
            self.position = self.position.move_towards(dest, self.speed * dt.max(0.0));
        }
    }
}

/// Spawns [`LinearMotion`] bodies that all walk at the same speed.
#[derive(Debug, Clone, Copy)]
pub struct LinearMotionProvider {
    pub speed: f32,
}

impl LinearMotionProvider {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Default for LinearMotionProvider {
    /// 3.5 m/s, a brisk commuter walk.
    fn default() -> Self {
        Self { speed: 3.5 }
    }
}

impl MotionProvider for LinearMotionProvider {
    type Agent = LinearMotion;

    fn spawn(&self, at: Point) -> LinearMotion {
        LinearMotion::new(at, self.speed)
    }
}
