//! The `MotionAgent` capability and its factory.

use ts_core::Point;

/// A body that can be sent toward a point and asked whether it got there.
///
/// Travelers and the player each own one.  Implementations must be `Send` so
/// a round can be moved to another thread between frames; nothing here is
/// shared across threads during a frame.
pub trait MotionAgent: Send + 'static {
    /// Current body position.
    fn position(&self) -> Point;

    /// Teleport the body, bypassing navigation (hop arc, queue snapping).
    fn warp(&mut self, to: Point);

    /// Start navigating toward `target`.  Ignored while disabled.
    fn set_destination(&mut self, target: Point);

    /// Last destination accepted, if any.
    fn destination(&self) -> Option<Point>;

    /// `true` while a freshly requested path has not been resolved yet.
    fn is_pending(&self) -> bool;

    /// Distance left to the destination; `f32::INFINITY` while pending and
    /// `0.0` when there is no destination.
    fn remaining_distance(&self) -> f32;

    fn is_stopped(&self) -> bool;

    /// Halt (or resume) movement without forgetting the destination.
    fn set_stopped(&mut self, stopped: bool);

    fn is_enabled(&self) -> bool;

    /// Disengage the agent entirely, e.g. while a script drives the body.
    fn set_enabled(&mut self, enabled: bool);

    /// Advance one frame of `dt` seconds.
    fn step(&mut self, dt: f32);

    /// Path resolved and within `tolerance` of the destination.
    #[inline]
    fn has_arrived(&self, tolerance: f32) -> bool {
        !self.is_pending() && self.remaining_distance() <= tolerance
    }
}

/// Creates motion agents for newly spawned bodies.
///
/// The round is generic over this trait the same way it would be over any
/// other pluggable strategy; there is no runtime dispatch.
pub trait MotionProvider {
    type Agent: MotionAgent;

    /// Create an agent whose body starts at `at`.
    fn spawn(&self, at: Point) -> Self::Agent;
}
