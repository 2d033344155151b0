//! Deterministic per-traveler and round-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each traveler rolls its fraud intent from its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (traveler_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive IDs uniformly across the seed space.  A
//! traveler's intent therefore depends only on the round seed and its ID,
//! never on how many draws the round-level RNG has made before it.
//!
//! Everything else (spawn point, station assignment, exit choice) goes
//! through the single round-level [`SimRng`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TravelerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TravelerRng ───────────────────────────────────────────────────────────────

/// Per-traveler deterministic RNG.
pub struct TravelerRng(SmallRng);

impl TravelerRng {
    /// Seed deterministically from the round's global seed and a traveler ID.
    pub fn new(global_seed: u64, traveler: TravelerId) -> Self {
        let seed = global_seed ^ (traveler.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TravelerRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Round-level RNG for spawn placement, station assignment and exit choice.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform index into a collection of `len` items.
    /// Returns `None` if `len == 0`.
    #[inline]
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
