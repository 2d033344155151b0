//! Population counters and the end-of-round rule.

use ts_core::RoundConfig;

/// How a round ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Every traveler exited with fraud within tolerance.
    Won,
    /// Fraud successes exceeded the tolerance.
    Lost,
}

impl RoundOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::Won  => "won",
            RoundOutcome::Lost => "lost",
        }
    }

    #[inline]
    pub fn is_win(self) -> bool {
        self == RoundOutcome::Won
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a terminal report changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FinishReport {
    /// `false` when the round had already ended and the report was dropped.
    pub accepted: bool,
    /// `Some` exactly once: on the report that ended the round.
    pub ended:    Option<RoundOutcome>,
}

/// Counts spawns and terminal reports and decides when the round ends.
///
/// Counters only ever grow, and once an outcome is latched every further
/// report is a no-op.  Until then `spawned == finished + abandoned + live`.
/// Travelers that finish or are destroyed after the latch are removed but
/// counted nowhere, so afterwards only `spawned >= finished + abandoned +
/// live` holds.
#[derive(Clone, Debug)]
pub struct RoundCoordinator {
    target:        u32,
    tolerance:     u32,
    spawned:       u32,
    finished:      u32,
    fraud_success: u32,
    abandoned:     u32,
    outcome:       Option<RoundOutcome>,
}

impl RoundCoordinator {
    pub fn new(target: u32, tolerance: u32) -> Self {
        Self {
            target,
            tolerance,
            spawned: 0,
            finished: 0,
            fraud_success: 0,
            abandoned: 0,
            outcome: None,
        }
    }

    pub fn from_config(config: &RoundConfig) -> Self {
        Self::new(config.total_travelers, config.max_fraud_success)
    }

    // ── Counters ──────────────────────────────────────────────────────────

    #[inline] pub fn target(&self) -> u32 { self.target }
    #[inline] pub fn tolerance(&self) -> u32 { self.tolerance }
    #[inline] pub fn spawned(&self) -> u32 { self.spawned }
    #[inline] pub fn finished(&self) -> u32 { self.finished }
    #[inline] pub fn fraud_success_count(&self) -> u32 { self.fraud_success }
    #[inline] pub fn abandoned(&self) -> u32 { self.abandoned }
    #[inline] pub fn outcome(&self) -> Option<RoundOutcome> { self.outcome }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    /// Travelers spawned but neither finished nor destroyed externally.
    pub fn in_flight(&self) -> u32 {
        self.spawned - self.finished - self.abandoned
    }

    /// How many more travelers the spawn loop may create.
    pub fn remaining_to_spawn(&self) -> u32 {
        if self.is_ended() {
            return 0;
        }
        self.target.saturating_sub(self.spawned)
    }

    // ── Updates ───────────────────────────────────────────────────────────

    pub fn record_spawn(&mut self) {
        self.spawned += 1;
    }

    /// A traveler was removed without reaching an exit.  Ignored once the
    /// round has ended.
    pub fn record_abandoned(&mut self) {
        if self.is_ended() {
            return;
        }
        self.abandoned += 1;
    }

    /// Terminal report from a traveler that reached its exit.
    ///
    /// The loss check runs before the win check, so a final traveler that
    /// pushes fraud over the tolerance loses the round.
    pub fn on_traveler_finished(&mut self, fraud_succeeded: bool) -> FinishReport {
        if self.is_ended() {
            return FinishReport { accepted: false, ended: None };
        }

        self.finished += 1;
        if fraud_succeeded {
            self.fraud_success += 1;
        }

        let ended = if self.fraud_success > self.tolerance {
            Some(RoundOutcome::Lost)
        } else if self.finished >= self.target {
            Some(RoundOutcome::Won)
        } else {
            None
        };
        self.outcome = ended;
        FinishReport { accepted: true, ended }
    }
}
