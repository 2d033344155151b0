//! World-space point type.
//!
//! The station hall is a flat floor: `x`/`z` span the floor plane and `y` is
//! height.  Queue admission ignores height ([`Point::planar_distance`]) so a
//! traveler mid-hop or standing on a step still counts as "at the slot".

/// A world-space position in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance on the floor plane, ignoring height.
    #[inline]
    pub fn planar_distance(self, other: Point) -> f32 {
        let (dx, dz) = (other.x - self.x, other.z - self.z);
        (dx * dx + dz * dz).sqrt()
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        let t = t.clamp(0.0, 1.0);
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Step towards `target` by at most `max_delta`, never overshooting.
    pub fn move_towards(self, target: Point, max_delta: f32) -> Point {
        let dist = self.distance(target);
        if dist <= max_delta || dist <= f32::EPSILON {
            return target;
        }
        self.lerp(target, max_delta / dist)
    }

    /// Copy of `self` raised by `dy`.
    #[inline]
    pub fn raised(self, dy: f32) -> Point {
        Point { y: self.y + dy, ..self }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
