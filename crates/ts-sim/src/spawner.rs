//! Periodic spawn cadence.

/// Fires once on the first frame, then once every `interval_secs` of scaled
/// time.  A non-positive interval releases the whole wave on the first
/// frame.  Frozen frames (`dt == 0`) never fire anything new.
#[derive(Clone, Debug)]
pub struct Spawner {
    interval_secs: f32,
    accumulated:   f32,
    primed:        bool,
    enabled:       bool,
}

impl Spawner {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            accumulated: 0.0,
            primed: false,
            enabled: true,
        }
    }

    /// A spawner that never fires; travelers are added by hand.
    pub fn manual() -> Self {
        Self { enabled: false, ..Self::new(0.0) }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of spawns due this frame, capped at `remaining`.
    pub fn poll(&mut self, dt: f32, remaining: u32) -> u32 {
        if !self.enabled || remaining == 0 {
            return 0;
        }
        if self.interval_secs <= 0.0 {
            self.primed = true;
            return remaining;
        }
        if !self.primed {
            self.primed = true;
            return 1;
        }

        self.accumulated += dt;
        let mut due = 0;
        while self.accumulated >= self.interval_secs && due < remaining {
            self.accumulated -= self.interval_secs;
            due += 1;
        }
        due
    }
}
