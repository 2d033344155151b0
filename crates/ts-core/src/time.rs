//! Frame-driven simulation time.
//!
//! # Design
//!
//! The round advances in discrete frames.  `Tick` counts frames; `SimClock`
//! holds the nominal frame length and a time scale:
//!
//!   delta = tick_secs * time_scale
//!
//! Every cooperative routine (pass-through arc, badge wait, suspension
//! countdown, turnstile rotation) accumulates `delta` once per frame, so
//! setting the time scale to zero freezes all of them in place without any
//! cancellation protocol.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Frame counter plus scaled frame delta.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Nominal seconds per frame (e.g. 1/60).
    pub tick_secs: f32,
    /// Multiplier applied to `tick_secs`.  `0.0` freezes the round.
    pub time_scale: f32,
    /// The current frame — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Scaled seconds accumulated since tick 0.
    elapsed_secs: f64,
}

impl SimClock {
    pub fn new(tick_secs: f32) -> Self {
        Self {
            tick_secs,
            time_scale:   1.0,
            current_tick: Tick::ZERO,
            elapsed_secs: 0.0,
        }
    }

    /// Scaled seconds the current frame represents.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.tick_secs * self.time_scale
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.elapsed_secs += self.delta() as f64;
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Scaled seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn freeze(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.time_scale <= 0.0
    }

    /// How many unscaled frames span `secs` seconds? (rounds up)
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.tick_secs <= 0.0 || secs <= 0.0 {
            return 0;
        }
        (secs / self.tick_secs).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs)
    }
}
