//! Round observer trait for presentation signals and data collection.

use ts_core::{StationId, Tick, TravelerId};

use crate::RoundOutcome;

/// Callbacks invoked by [`Round`][crate::Round] as the round unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Signals are fire-and-forget: nothing
/// an observer does can change the round.
///
/// # Example: scoreboard
///
/// ```rust,ignore
/// struct Scoreboard { finished: u32, total: u32 }
///
/// impl RoundObserver for Scoreboard {
///     fn on_wave_progress(&mut self, finished: u32, total: u32) {
///         self.finished = finished;
///         self.total = total;
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the scaled seconds elapsed before
    /// it (as [`SimClock::elapsed_secs`][ts_core::SimClock::elapsed_secs])
    /// and the number of live travelers.
    fn on_tick_end(&mut self, _tick: Tick, _elapsed_secs: f64, _in_flight: usize) {}

    fn on_traveler_spawned(
        &mut self,
        _tick:         Tick,
        _traveler:     TravelerId,
        _station:      StationId,
        _fraud_intent: bool,
    ) {}

    /// A station signalled its head to pass.  `fraud` is whether the
    /// traveler hops rather than pays.
    fn on_traveler_admitted(
        &mut self,
        _tick:     Tick,
        _traveler: TravelerId,
        _station:  StationId,
        _fraud:    bool,
    ) {}

    /// Terminal report, fired once per traveler that reached an exit.
    fn on_traveler_exited(&mut self, _tick: Tick, _traveler: TravelerId, _fraud_succeeded: bool) {}

    /// A traveler was destroyed without reaching an exit.
    fn on_traveler_abandoned(&mut self, _tick: Tick, _traveler: TravelerId) {}

    /// Turnstile arms started rotating for a paying traveler.
    fn on_station_animation(&mut self, _tick: Tick, _station: StationId) {}

    fn on_station_upgraded(&mut self, _tick: Tick, _station: StationId) {}

    fn on_suspension_started(&mut self, _tick: Tick, _traveler: TravelerId) {}

    /// Inspection progress ratio in `[0, 1]`, once per frame per inspection.
    fn on_suspension_progress(&mut self, _tick: Tick, _traveler: TravelerId, _ratio: f32) {}

    fn on_suspension_ended(&mut self, _tick: Tick, _traveler: TravelerId) {}

    /// `(finished, total)`.  Sent at round start and after each report.
    fn on_wave_progress(&mut self, _finished: u32, _total: u32) {}

    /// `(fraud successes, tolerance)`.  Sent at round start and after each
    /// report.
    fn on_fraud_tally(&mut self, _fraud: u32, _tolerance: u32) {}

    /// Fired once, on the report that ended the round.
    fn on_round_end(&mut self, _tick: Tick, _outcome: RoundOutcome) {}

    /// Called once when [`Round::run`][crate::Round::run] returns.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`RoundObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
