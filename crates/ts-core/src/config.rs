//! Round configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature enabled) and passed to the round builder.  Every block
//! implements `Default` with the values the game ships with, and missing
//! keys in a file fall back to those defaults.

use crate::{TsError, TsResult};

/// Per-traveler behaviour constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TravelerTuning {
    /// Chance a traveler intends to hop a `Normal` turnstile.
    pub fraud_probability: f64,
    /// Arrival tolerance handed to the motion agent.
    pub arrive_distance: f32,
    /// Rate at which a queuing traveler is pulled onto its slot.
    pub queue_snap_speed: f32,
    /// Peak height of the fraud hop.
    pub jump_height: f32,
    /// Duration of the fraud hop.
    pub jump_secs: f32,
    /// Delay between choosing an exit and releasing the turnstile.
    pub settle_secs: f32,
}

impl Default for TravelerTuning {
    fn default() -> Self {
        Self {
            fraud_probability: 0.25,
            arrive_distance:   0.25,
            queue_snap_speed:  12.0,
            jump_height:       1.1,
            jump_secs:         0.35,
            settle_secs:       0.25,
        }
    }
}

/// Per-turnstile constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StationTuning {
    /// How long a paying traveler stands at the reader.
    pub badge_secs: f32,
    /// Rotation applied to the turnstile arms per legitimate passage.
    pub rotation_deg: f32,
    /// Duration of that rotation.
    pub rotation_secs: f32,
}

impl Default for StationTuning {
    fn default() -> Self {
        Self {
            badge_secs:    0.5,
            rotation_deg:  60.0,
            rotation_secs: 0.15,
        }
    }
}

/// Player-controller constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTuning {
    /// How close the player must be to start an inspection.
    pub interaction_range: f32,
    /// How long an inspection holds a traveler.
    pub control_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            interaction_range: 1.6,
            control_secs:      1.2,
        }
    }
}

/// Top-level round configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundConfig {
    /// Travelers in the wave; the round is won once this many have exited.
    pub total_travelers: u32,

    /// Seconds between two spawns.  The first traveler spawns on tick 0.
    pub spawn_interval_secs: f32,

    /// Fraud successes tolerated.  One more ends the round as a loss.
    pub max_fraud_success: u32,

    /// Nominal seconds per frame.
    pub tick_secs: f32,

    /// Hard stop for `Round::run`, in frames.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical rounds.
    pub seed: u64,

    pub traveler: TravelerTuning,
    pub station:  StationTuning,
    pub player:   PlayerTuning,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            total_travelers:     20,
            spawn_interval_secs: 0.6,
            max_fraud_success:   3,
            tick_secs:           1.0 / 60.0,
            max_ticks:           60 * 60 * 60, // one simulated hour at 60 fps
            seed:                42,
            traveler:            TravelerTuning::default(),
            station:             StationTuning::default(),
            player:              PlayerTuning::default(),
        }
    }
}

impl RoundConfig {
    /// Reject values that would stall the round or break routine timing.
    pub fn validate(&self) -> TsResult<()> {
        if self.total_travelers == 0 {
            return Err(TsError::Config("total_travelers must be at least 1".into()));
        }
        if !(self.tick_secs.is_finite() && self.tick_secs > 0.0) {
            return Err(TsError::Config(format!(
                "tick_secs must be a positive number, got {}",
                self.tick_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.traveler.fraud_probability) {
            return Err(TsError::Config(format!(
                "traveler.fraud_probability must be in [0, 1], got {}",
                self.traveler.fraud_probability
            )));
        }

        let durations = [
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("traveler.jump_secs", self.traveler.jump_secs),
            ("traveler.settle_secs", self.traveler.settle_secs),
            ("station.badge_secs", self.station.badge_secs),
            ("station.rotation_secs", self.station.rotation_secs),
            ("player.control_secs", self.player.control_secs),
            ("player.interaction_range", self.player.interaction_range),
            ("traveler.arrive_distance", self.traveler.arrive_distance),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TsError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
