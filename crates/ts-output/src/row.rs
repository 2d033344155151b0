//! Plain data row types written by log backends.

/// What happened.  Serialized by [`EventKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Spawned,
    Admitted,
    Exited,
    Abandoned,
    StationAnimation,
    StationUpgraded,
    SuspensionStarted,
    SuspensionEnded,
    RoundEnd,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Spawned           => "spawned",
            EventKind::Admitted          => "admitted",
            EventKind::Exited            => "exited",
            EventKind::Abandoned         => "abandoned",
            EventKind::StationAnimation  => "station_animation",
            EventKind::StationUpgraded   => "station_upgraded",
            EventKind::SuspensionStarted => "suspension_started",
            EventKind::SuspensionEnded   => "suspension_ended",
            EventKind::RoundEnd          => "round_end",
        }
    }
}

/// One discrete round event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEventRow {
    pub tick:     u64,
    pub event:    EventKind,
    /// `None` for station- or round-level events.
    pub traveler: Option<u32>,
    pub station:  Option<u16>,
    /// Free-form qualifier: `fraud`/`paid`, `won`/`lost`, …
    pub detail:   &'static str,
}

/// Round state sampled every N ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    /// Nominal seconds since tick 0.
    pub elapsed_secs:  f64,
    pub in_flight:     u64,
    pub finished:      u32,
    pub fraud_success: u32,
}
