//! `EventLogObserver<W>` — bridges `RoundObserver` to an `EventWriter`.

use ts_core::{StationId, Tick, TravelerId};
use ts_sim::{RoundObserver, RoundOutcome};

use crate::row::{EventKind, RoundEventRow, TickSummaryRow};
use crate::writer::EventWriter;
use crate::{OutputError, OutputResult};

/// A [`RoundObserver`] that logs discrete events and periodic tick summaries
/// to any [`EventWriter`] backend.
///
/// Events are buffered and written in one batch per tick.  Errors from the
/// writer are stored internally because observer methods have no return
/// value.  After `round.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    writer:           W,
    /// Write a summary every this many ticks; `0` disables summaries.
    summary_interval: u64,
    pending:          Vec<RoundEventRow>,
    finished:         u32,
    fraud_success:    u32,
    last_error:       Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W, summary_interval: u64) -> Self {
        Self {
            writer,
            summary_interval,
            pending: Vec::new(),
            finished: 0,
            fraud_success: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `round.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write buffered events and close the writer.  Called by `on_run_end`;
    /// call it yourself when stepping with `run_ticks`.
    pub fn finish(&mut self) {
        self.flush_events();
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the round).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(
        &mut self,
        tick:     Tick,
        event:    EventKind,
        traveler: Option<TravelerId>,
        station:  Option<StationId>,
        detail:   &'static str,
    ) {
        self.pending.push(RoundEventRow {
            tick: tick.0,
            event,
            traveler: traveler.map(|t| t.0),
            station: station.map(|s| s.0),
            detail,
        });
    }

    fn flush_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn fraud_label(fraud: bool) -> &'static str {
    if fraud { "fraud" } else { "paid" }
}

impl<W: EventWriter> RoundObserver for EventLogObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, elapsed_secs: f64, in_flight: usize) {
        self.flush_events();

        if self.summary_interval > 0 && tick.0.is_multiple_of(self.summary_interval) {
            let row = TickSummaryRow {
                tick:          tick.0,
                elapsed_secs,
                in_flight:     in_flight as u64,
                finished:      self.finished,
                fraud_success: self.fraud_success,
            };
            let result = self.writer.write_tick_summary(&row);
            self.store_err(result);
        }
    }

    fn on_traveler_spawned(&mut self, tick: Tick, traveler: TravelerId, station: StationId, fraud_intent: bool) {
        let detail = if fraud_intent { "intends_fraud" } else { "" };
        self.push(tick, EventKind::Spawned, Some(traveler), Some(station), detail);
    }

    fn on_traveler_admitted(&mut self, tick: Tick, traveler: TravelerId, station: StationId, fraud: bool) {
        self.push(tick, EventKind::Admitted, Some(traveler), Some(station), fraud_label(fraud));
    }

    fn on_traveler_exited(&mut self, tick: Tick, traveler: TravelerId, fraud_succeeded: bool) {
        self.push(tick, EventKind::Exited, Some(traveler), None, fraud_label(fraud_succeeded));
    }

    fn on_traveler_abandoned(&mut self, tick: Tick, traveler: TravelerId) {
        self.push(tick, EventKind::Abandoned, Some(traveler), None, "");
    }

    fn on_station_animation(&mut self, tick: Tick, station: StationId) {
        self.push(tick, EventKind::StationAnimation, None, Some(station), "");
    }

    fn on_station_upgraded(&mut self, tick: Tick, station: StationId) {
        self.push(tick, EventKind::StationUpgraded, None, Some(station), "gate");
    }

    fn on_suspension_started(&mut self, tick: Tick, traveler: TravelerId) {
        self.push(tick, EventKind::SuspensionStarted, Some(traveler), None, "");
    }

    fn on_suspension_ended(&mut self, tick: Tick, traveler: TravelerId) {
        self.push(tick, EventKind::SuspensionEnded, Some(traveler), None, "");
    }

    fn on_wave_progress(&mut self, finished: u32, _total: u32) {
        self.finished = finished;
    }

    fn on_fraud_tally(&mut self, fraud: u32, _tolerance: u32) {
        self.fraud_success = fraud;
    }

    fn on_round_end(&mut self, tick: Tick, outcome: RoundOutcome) {
        self.push(tick, EventKind::RoundEnd, None, None, outcome.as_str());
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        self.finish();
    }
}
