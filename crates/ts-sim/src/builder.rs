//! Fluent builder for constructing a [`Round`].

use ts_core::{Point, RoundConfig, StationId, StationKind};
use ts_motion::MotionProvider;
use ts_station::Station;

use crate::player::PlayerProxy;
use crate::{Round, SimError, SimResult, Spawner};

/// One turnstile as laid out in the world.
#[derive(Clone, Debug)]
struct StationLayout {
    kind:       StationKind,
    slots:      Vec<Point>,
    exit_point: Point,
}

/// Fluent builder for [`Round<P>`].
///
/// # Required inputs
///
/// - [`RoundConfig`]: population, tolerance, cadence, tuning, seed
/// - `P: MotionProvider`: creates a motion agent per spawned body
/// - at least one station, one spawn point and one exit point
///
/// # Optional inputs
///
/// | Method                 | Default                          |
/// |------------------------|----------------------------------|
/// | `.player(at)`          | no player                        |
/// | `.manual_spawning()`   | periodic spawns from the config  |
///
/// # Example
///
/// ```rust,ignore
/// let mut round = RoundBuilder::new(config, LinearMotionProvider::default())
///     .station(slots_a, exit_a)
///     .gate(slots_b, exit_b)
///     .spawn_points(spawns)
///     .exit_points(exits)
///     .player(Point::ORIGIN)
///     .build()?;
/// round.run(&mut NoopObserver)?;
/// ```
pub struct RoundBuilder<P: MotionProvider> {
    config:       RoundConfig,
    motion:       P,
    stations:     Vec<StationLayout>,
    spawn_points: Vec<Point>,
    exit_points:  Vec<Point>,
    player_at:    Option<Point>,
    manual:       bool,
}

impl<P: MotionProvider> RoundBuilder<P> {
    pub fn new(config: RoundConfig, motion: P) -> Self {
        Self {
            config,
            motion,
            stations:     Vec::new(),
            spawn_points: Vec::new(),
            exit_points:  Vec::new(),
            player_at:    None,
            manual:       false,
        }
    }

    /// Add a `Normal` turnstile.  `slots[0]` is the admission point;
    /// `exit_point` is its far side.
    pub fn station(self, slots: Vec<Point>, exit_point: Point) -> Self {
        self.station_of_kind(StationKind::Normal, slots, exit_point)
    }

    /// Add a full-height gate that cannot be hopped.
    pub fn gate(self, slots: Vec<Point>, exit_point: Point) -> Self {
        self.station_of_kind(StationKind::Gate, slots, exit_point)
    }

    pub fn station_of_kind(mut self, kind: StationKind, slots: Vec<Point>, exit_point: Point) -> Self {
        self.stations.push(StationLayout { kind, slots, exit_point });
        self
    }

    pub fn spawn_points(mut self, points: Vec<Point>) -> Self {
        self.spawn_points = points;
        self
    }

    pub fn exit_points(mut self, points: Vec<Point>) -> Self {
        self.exit_points = points;
        self
    }

    /// Place a player body at `at`.
    pub fn player(mut self, at: Point) -> Self {
        self.player_at = Some(at);
        self
    }

    /// Disable the periodic spawner; travelers are added with
    /// [`Round::spawn_at`] / [`Round::spawn_one`].
    pub fn manual_spawning(mut self) -> Self {
        self.manual = true;
        self
    }

    /// Validate inputs, build the stations, and return a ready-to-run
    /// [`Round`].
    pub fn build(self) -> SimResult<Round<P>> {
        self.config.validate()?;

        // ── Validate layout ───────────────────────────────────────────────
        if self.stations.is_empty() {
            return Err(SimError::Config("a round needs at least one station".into()));
        }
        if self.spawn_points.is_empty() {
            return Err(SimError::Config("a round needs at least one spawn point".into()));
        }
        if self.exit_points.is_empty() {
            return Err(SimError::Config("a round needs at least one exit point".into()));
        }

        // ── Build stations ────────────────────────────────────────────────
        let mut stations = Vec::with_capacity(self.stations.len());
        for (i, layout) in self.stations.into_iter().enumerate() {
            let id = StationId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many stations ({i})")))?;
            let station = Station::new(id, layout.slots, layout.exit_point, &self.config.station)?
                .with_kind(layout.kind);
            stations.push(station);
        }

        let spawner = if self.manual {
            Spawner::manual()
        } else {
            Spawner::new(self.config.spawn_interval_secs)
        };
        let player = self
            .player_at
            .map(|at| PlayerProxy::new(self.motion.spawn(at), self.config.player));

        Ok(Round::assemble(
            self.config,
            stations,
            spawner,
            player,
            self.motion,
            self.spawn_points,
            self.exit_points,
        ))
    }
}
