//! Turnstile arm rotation, advanced once per frame.

/// Rotates the turnstile arms by a fixed step over a fixed duration.
///
/// Playing while a rotation is already running restarts from the current
/// angle, so back-to-back passages accumulate rather than snap.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnstileRotation {
    step_deg: f32,
    secs:     f32,
    angle:    f32,
    from:     f32,
    to:       f32,
    progress: f32,
    active:   bool,
}

impl TurnstileRotation {
    pub fn new(step_deg: f32, secs: f32) -> Self {
        Self {
            step_deg,
            secs,
            angle:    0.0,
            from:     0.0,
            to:       0.0,
            progress: 0.0,
            active:   false,
        }
    }

    pub fn play(&mut self) {
        self.from = self.angle;
        self.to = self.angle + self.step_deg;
        self.progress = 0.0;
        self.active = true;
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.progress += dt / self.secs.max(0.001);
        let t = self.progress.min(1.0);
        self.angle = self.from + (self.to - self.from) * t;
        if self.progress >= 1.0 {
            self.active = false;
        }
    }

    /// Current arm angle in degrees (unbounded; not wrapped to 360).
    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.active
    }
}
