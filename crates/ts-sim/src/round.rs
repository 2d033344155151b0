//! The `Round` struct and its tick loop.

use ts_core::{Point, RoundConfig, SimClock, SimRng, StationId, Tick, TravelerId, TsError};
use ts_motion::{MotionAgent, MotionProvider};
use ts_station::{Admission, Station};
use ts_traveler::{Intent, TravelerStore};

use crate::player::{self, PlayerEvent, PlayerProxy};
use crate::{RoundCoordinator, RoundObserver, RoundOutcome, SimError, SimResult, Spawner};

/// One round: stations, travelers, the coordinator and the player, driven
/// one frame at a time.
///
/// Each [`step`](Self::step) runs, in order:
///
/// 1. **Spawn**: the spawner creates due travelers; each is enqueued at a
///    uniformly chosen station.
/// 2. **Motion**: every motion agent (travelers, player) advances by `dt`.
/// 3. **Intent phase**: `Traveler::tick` for every live traveler, collecting
///    the `Intent`s it hands back.
/// 4. **Apply phase** (ascending `TravelerId`): exits are chosen,
///    turnstiles released, terminal reports counted.
/// 5. **Admission poll**: every station retries admitting its head.  This
///    is what skips stale heads and admits travelers that just arrived.
/// 6. **Player**: pursuit and inspection bookkeeping.
/// 7. **Cosmetics**: turnstile rotations advance; inspection progress is
///    reported.
///
/// Create via [`RoundBuilder`][crate::RoundBuilder].
pub struct Round<P: MotionProvider> {
    /// Round configuration (population, tolerance, tuning, …).
    pub config: RoundConfig,

    /// Frame clock.  Frozen (time scale 0) once the round ends.
    pub clock: SimClock,

    /// Round-level RNG: spawn point, station assignment, exit choice.
    pub rng: SimRng,

    /// Indexed by `StationId`.
    pub stations: Vec<Station>,

    pub travelers: TravelerStore<P::Agent>,

    pub coordinator: RoundCoordinator,

    pub spawner: Spawner,

    /// `None` for rounds without a player.
    pub player: Option<PlayerProxy<P::Agent>>,

    /// Creates motion agents for new travelers.
    pub motion: P,

    pub spawn_points: Vec<Point>,

    pub exit_points: Vec<Point>,

    /// Initial wave/fraud signals have been sent.
    started: bool,
}

impl<P: MotionProvider> Round<P> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        config:       RoundConfig,
        stations:     Vec<Station>,
        spawner:      Spawner,
        player:       Option<PlayerProxy<P::Agent>>,
        motion:       P,
        spawn_points: Vec<Point>,
        exit_points:  Vec<Point>,
    ) -> Self {
        Self {
            clock:       SimClock::new(config.tick_secs),
            rng:         SimRng::new(config.seed),
            travelers:   TravelerStore::new(config.seed),
            coordinator: RoundCoordinator::from_config(&config),
            config,
            stations,
            spawner,
            player,
            motion,
            spawn_points,
            exit_points,
            started: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Step until the round ends, the clock is frozen, or `config.max_ticks`
    /// frames have elapsed.  Returns the outcome, if any.
    pub fn run<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<Option<RoundOutcome>> {
        while !self.coordinator.is_ended()
            && !self.clock.is_frozen()
            && self.clock.current_tick.0 < self.config.max_ticks
        {
            self.step(observer)?;
        }
        observer.on_run_end(self.clock.current_tick);
        Ok(self.coordinator.outcome())
    }

    /// Step exactly `n` frames (frozen frames are no-ops).
    pub fn run_ticks<O: RoundObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Advance one frame.  No-op while the clock is frozen, so freezing
    /// mid-round and resuming later picks up exactly where it stopped.
    pub fn step<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.clock.is_frozen() {
            return Ok(());
        }
        let now = self.clock.current_tick;
        let dt = self.clock.delta();
        observer.on_tick_start(now);

        if !self.started {
            self.started = true;
            self.report_counters(observer);
        }

        // ── Phase 1: spawn ────────────────────────────────────────────────
        let due = self.spawner.poll(dt, self.coordinator.remaining_to_spawn());
        for _ in 0..due {
            self.spawn_one(observer)?;
        }

        // ── Phase 2: motion ───────────────────────────────────────────────
        for t in self.travelers.iter_mut() {
            t.motion.step(dt);
        }
        if let Some(player) = self.player.as_mut() {
            player.motion.step(dt);
        }

        // ── Phase 3: intent phase (produce) ───────────────────────────────
        let intents: Vec<(TravelerId, Vec<Intent>)> = self
            .travelers
            .iter_mut()
            .map(|t| (t.id, t.tick(dt)))
            .filter(|(_, out)| !out.is_empty())
            .collect();

        // ── Phase 4: apply phase (consume) ────────────────────────────────
        //
        // The store iterates in ascending id order, so the apply order is
        // reproducible from the seed.
        for (traveler, list) in intents {
            for intent in list {
                self.apply_intent(now, traveler, intent, observer)?;
            }
        }

        // ── Phase 5: admission poll ───────────────────────────────────────
        for i in 0..self.stations.len() {
            let station = self.stations[i].id;
            let admission = self.stations[i].try_admit(&mut self.travelers);
            self.on_admission(now, station, admission, observer);
        }

        // ── Phase 6: player ───────────────────────────────────────────────
        if let Some(player) = self.player.as_mut() {
            match player.tick(&mut self.travelers) {
                Some(PlayerEvent::SuspensionStarted(id)) => observer.on_suspension_started(now, id),
                Some(PlayerEvent::ChaseCancelled(id)) => {
                    tracing::debug!(traveler = %id, "chase cancelled");
                }
                Some(PlayerEvent::ControlEnded(_)) | None => {}
            }
        }

        // ── Phase 7: cosmetics ────────────────────────────────────────────
        for station in &mut self.stations {
            station.advance(dt);
        }
        for t in self.travelers.iter() {
            if let Some(ratio) = t.suspension_progress() {
                observer.on_suspension_progress(now, t.id, ratio);
            }
        }

        observer.on_tick_end(now, self.clock.elapsed_secs(), self.travelers.len());
        self.clock.advance();
        Ok(())
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Spawn one traveler at a random spawn point and station.
    pub fn spawn_one<O: RoundObserver>(&mut self, observer: &mut O) -> SimResult<TravelerId> {
        self.check_can_spawn()?;
        let at = *self
            .rng
            .choose(&self.spawn_points)
            .ok_or_else(|| SimError::Config("round has no spawn points".into()))?;
        let station = self
            .rng
            .choose(&self.stations)
            .map(|s| s.id)
            .ok_or_else(|| SimError::Config("round has no stations".into()))?;
        self.spawn_at(at, station, observer)
    }

    /// Spawn one traveler at `at`, bound to `station` for its lifetime, and
    /// enqueue it there.
    ///
    /// Refused once the wave is fully spawned or the round is over, so
    /// `spawned` never exceeds the target.
    pub fn spawn_at<O: RoundObserver>(
        &mut self,
        at:       Point,
        station:  StationId,
        observer: &mut O,
    ) -> SimResult<TravelerId> {
        self.check_can_spawn()?;
        let now = self.clock.current_tick;
        let s = self
            .stations
            .get_mut(station.index())
            .ok_or(TsError::StationNotFound(station))?;

        let body = self.motion.spawn(at);
        let id = self.travelers.spawn(station, s.permits_fraud(), self.config.traveler, body);
        self.coordinator.record_spawn();

        let fraud_intent = self.travelers.get(id).is_some_and(|t| t.fraud_intent());
        observer.on_traveler_spawned(now, id, station, fraud_intent);

        let admission = s.enqueue(id, &mut self.travelers);
        self.on_admission(now, station, admission, observer);
        Ok(id)
    }

    // ── External signals ──────────────────────────────────────────────────

    /// Player signal: inspect `traveler` for `duration` seconds.  Refused
    /// unless it is post-gate.
    pub fn request_suspend<O: RoundObserver>(
        &mut self,
        traveler: TravelerId,
        duration: f32,
        observer: &mut O,
    ) -> bool {
        let started = player::request_suspend(&mut self.travelers, traveler, duration);
        if started {
            observer.on_suspension_started(self.clock.current_tick, traveler);
        }
        started
    }

    /// Send the player after `traveler`.  `false` without a player or if the
    /// traveler is not chaseable.
    pub fn player_chase(&mut self, traveler: TravelerId) -> bool {
        match self.player.as_mut() {
            Some(p) => p.chase(traveler, &self.travelers),
            None => false,
        }
    }

    /// World navigation target for the player.
    pub fn player_move_to(&mut self, target: Point) -> bool {
        self.player.as_mut().is_some_and(|p| p.move_to(target))
    }

    /// Turn a station into a gate.  Travelers already queued there lose
    /// their chance to hop: eligibility is re-read at admission.
    pub fn upgrade_station<O: RoundObserver>(
        &mut self,
        station:  StationId,
        observer: &mut O,
    ) -> SimResult<bool> {
        let s = self
            .stations
            .get_mut(station.index())
            .ok_or(TsError::StationNotFound(station))?;
        let changed = s.upgrade();
        if changed {
            observer.on_station_upgraded(self.clock.current_tick, station);
        }
        Ok(changed)
    }

    /// Remove a traveler without a terminal report.
    ///
    /// A traveler destroyed mid-service is evicted from its station so the
    /// turnstile does not stay busy.  A queued one is left as a stale handle
    /// for the next admission poll to skip.
    pub fn destroy_traveler<O: RoundObserver>(
        &mut self,
        traveler: TravelerId,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = self.clock.current_tick;
        let removed = self
            .travelers
            .remove(traveler)
            .ok_or(TsError::TravelerNotFound(traveler))?;
        self.coordinator.record_abandoned();
        tracing::debug!(%traveler, state = %removed.state(), "traveler destroyed");
        observer.on_traveler_abandoned(now, traveler);

        if removed.pass().is_some() {
            let station = removed.station();
            if let Some(s) = self.stations.get_mut(station.index()) {
                let admission = s.evict(traveler, &mut self.travelers);
                self.on_admission(now, station, admission, observer);
            }
        }
        Ok(())
    }

    /// Halt all progress.  Routines in flight are left as they are.
    pub fn freeze(&mut self) {
        self.clock.freeze();
    }

    /// Undo [`freeze`](Self::freeze).  A round that has ended stays frozen.
    pub fn resume(&mut self) {
        if !self.coordinator.is_ended() {
            self.clock.resume();
        }
    }

    #[inline]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.coordinator.outcome()
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.coordinator.is_ended()
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_can_spawn(&self) -> SimResult<()> {
        if self.coordinator.is_ended() {
            return Err(SimError::RoundOver);
        }
        if self.coordinator.remaining_to_spawn() == 0 {
            return Err(SimError::WaveComplete { target: self.coordinator.target() });
        }
        Ok(())
    }

    fn apply_intent<O: RoundObserver>(
        &mut self,
        now:      Tick,
        traveler: TravelerId,
        intent:   Intent,
        observer: &mut O,
    ) -> SimResult<()> {
        match intent {
            // ── RequestExit: pick one of the round's exits ─────────────────
            Intent::RequestExit => {
                let exit = *self
                    .rng
                    .choose(&self.exit_points)
                    .ok_or_else(|| SimError::Config("round has no exit points".into()))?;
                if let Some(t) = self.travelers.get_mut(traveler) {
                    t.head_to_exit(exit);
                }
            }

            // ── Release: advance the station's queue ───────────────────────
            Intent::Release { station } => {
                let s = self
                    .stations
                    .get_mut(station.index())
                    .ok_or(TsError::StationNotFound(station))?;
                match s.release(traveler, &mut self.travelers) {
                    Ok(admission) => self.on_admission(now, station, admission, observer),
                    Err(e) => tracing::warn!(%traveler, error = %e, "release rejected"),
                }
            }

            // ── Finished: terminal report, then the traveler is gone ───────
            Intent::Finished { fraud_succeeded } => {
                self.travelers.remove(traveler);
                observer.on_traveler_exited(now, traveler, fraud_succeeded);

                let report = self.coordinator.on_traveler_finished(fraud_succeeded);
                if report.accepted {
                    self.report_counters(observer);
                }
                if let Some(outcome) = report.ended {
                    self.end_round(now, outcome, observer);
                }
            }

            Intent::SuspensionEnded => observer.on_suspension_ended(now, traveler),
        }
        Ok(())
    }

    fn on_admission<O: RoundObserver>(
        &mut self,
        now:       Tick,
        station:   StationId,
        admission: Admission,
        observer:  &mut O,
    ) {
        let Admission::Admitted(traveler) = admission else {
            return;
        };
        let fraud = self
            .travelers
            .get(traveler)
            .and_then(|t| t.pass())
            .is_some_and(|p| p.fraud);
        observer.on_traveler_admitted(now, traveler, station, fraud);

        // Hoppers go over the arms; only paying travelers turn them.
        if !fraud {
            if let Some(s) = self.stations.get_mut(station.index()) {
                s.play_animation();
                observer.on_station_animation(now, station);
            }
        }
    }

    fn report_counters<O: RoundObserver>(&self, observer: &mut O) {
        let c = &self.coordinator;
        observer.on_wave_progress(c.finished(), c.target());
        observer.on_fraud_tally(c.fraud_success_count(), c.tolerance());
    }

    fn end_round<O: RoundObserver>(&mut self, now: Tick, outcome: RoundOutcome, observer: &mut O) {
        self.clock.freeze();
        tracing::info!(
            %now,
            %outcome,
            finished = self.coordinator.finished(),
            fraud = self.coordinator.fraud_success_count(),
            "round over"
        );
        observer.on_round_end(now, outcome);
    }
}
