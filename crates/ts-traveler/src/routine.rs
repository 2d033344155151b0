//! Frame-spread routines as explicit state plus elapsed accumulators.
//!
//! Each routine is advanced by exactly one `dt` per frame from
//! [`Traveler::tick`][crate::Traveler::tick].  A traveler runs at most one
//! of them at a time: `Traveler::begin_passing` refuses while a pass or an
//! inspection is in progress, and `Traveler::suspend` refuses while passing.

use std::f32::consts::PI;

use ts_core::{Point, StationId};

use crate::TravelerState;

/// Stage of a pass-through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassStage {
    /// Hopping over the turnstile, motion agent disengaged.
    Jump { from: Point, to: Point, elapsed: f32 },
    /// Standing at the reader while walking toward the far side.
    Badge { elapsed: f32 },
    /// Exit chosen; waiting before releasing the turnstile.
    Settle { elapsed: f32 },
}

/// An in-progress pass-through against one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassRoutine {
    pub station:    StationId,
    /// `fraud_intent && station permitted fraud at admission`.
    pub fraud:      bool,
    pub stage:      PassStage,
    pub badge_secs: f32,
}

impl PassRoutine {
    #[inline]
    pub fn is_jumping(&self) -> bool {
        matches!(self.stage, PassStage::Jump { .. })
    }
}

/// Body position `u ∈ [0, 1]` of the way along a hop: straight line on the
/// floor plus a half-sine bump peaking at the midpoint.
pub fn hop_position(from: Point, to: Point, u: f32, height: f32) -> Point {
    let u = u.clamp(0.0, 1.0);
    from.lerp(to, u).raised((u * PI).sin() * height)
}

/// An inspection countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suspension {
    /// State to return to when the countdown ends.
    pub prior:    TravelerState,
    pub duration: f32,
    pub elapsed:  f32,
}

impl Suspension {
    pub fn new(prior: TravelerState, duration: f32) -> Self {
        Self { prior, duration, elapsed: 0.0 }
    }

    /// Fraction complete in `[0, 1]`.  A zero-length inspection is complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.elapsed >= self.duration
    }
}
