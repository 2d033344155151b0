//! rush_hour — one round at a three-turnstile station.
//!
//! Travelers spawn at the street side, queue at one of three turnstiles and
//! head for the platform exits.  An automated inspector chases travelers
//! seen hopping a turnstile, and station 0 can be upgraded to a gate part
//! way through the round.
//!
//! ```text
//! cargo run -p rush-hour -- --config demos/rush_hour/rush_hour.toml --out ./output
//! RUST_LOG=ts_sim=debug cargo run -p rush-hour -- --travelers 10
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ts_core::{Point, RoundConfig, SimRng, StationId, Tick, TravelerId};
use ts_motion::{LinearMotionProvider, MotionProvider};
use ts_output::{CsvWriter, EventLogObserver, EventWriter};
use ts_sim::{PlayerOrder, Round, RoundBuilder, RoundObserver, RoundOutcome};
use ts_traveler::TravelerState;

// ── Layout ────────────────────────────────────────────────────────────────────

const STATION_X:       [f32; 3] = [-3.0, 0.0, 3.0];
const SLOTS_PER_QUEUE: usize    = 4;
const SLOT_SPACING:    f32      = 0.8;
const PLAYER_START:    Point    = Point { x: 0.0, y: 0.0, z: -3.0 };
/// Summary row every this many frames.
const SUMMARY_INTERVAL: u64     = 60;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rush_hour")]
#[command(about = "Run one turnstile rush round and log it to CSV")]
struct Args {
    /// Round configuration (TOML).  Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the wave size.
    #[arg(long)]
    travelers: Option<u32>,

    /// Upgrade station 0 to a gate after this many seconds.
    #[arg(long)]
    upgrade_at: Option<f32>,

    /// Run without the inspector.
    #[arg(long, default_value_t = false)]
    no_player: bool,

    /// Directory for `round_events.csv` and `tick_summaries.csv`.
    #[arg(long, default_value = "output")]
    out: PathBuf,
}

// ── Observer wrapper to count events ──────────────────────────────────────────

struct TallyObserver<W: EventWriter> {
    inner:       EventLogObserver<W>,
    /// Travelers seen hopping and not yet chased.
    hoppers:     Vec<TravelerId>,
    admitted:    u32,
    hops:        u32,
    inspections: u32,
    exited:      u32,
    abandoned:   u32,
}

impl<W: EventWriter> TallyObserver<W> {
    fn new(inner: EventLogObserver<W>) -> Self {
        Self {
            inner,
            hoppers: Vec::new(),
            admitted: 0,
            hops: 0,
            inspections: 0,
            exited: 0,
            abandoned: 0,
        }
    }
}

impl<W: EventWriter> RoundObserver for TallyObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, elapsed_secs: f64, in_flight: usize) {
        self.inner.on_tick_end(tick, elapsed_secs, in_flight);
    }

    fn on_traveler_spawned(&mut self, tick: Tick, traveler: TravelerId, station: StationId, fraud_intent: bool) {
        self.inner.on_traveler_spawned(tick, traveler, station, fraud_intent);
    }

    fn on_traveler_admitted(&mut self, tick: Tick, traveler: TravelerId, station: StationId, fraud: bool) {
        self.admitted += 1;
        if fraud {
            self.hops += 1;
            self.hoppers.push(traveler);
        }
        self.inner.on_traveler_admitted(tick, traveler, station, fraud);
    }

    fn on_traveler_exited(&mut self, tick: Tick, traveler: TravelerId, fraud_succeeded: bool) {
        self.exited += 1;
        self.hoppers.retain(|&t| t != traveler);
        self.inner.on_traveler_exited(tick, traveler, fraud_succeeded);
    }

    fn on_traveler_abandoned(&mut self, tick: Tick, traveler: TravelerId) {
        self.abandoned += 1;
        self.hoppers.retain(|&t| t != traveler);
        self.inner.on_traveler_abandoned(tick, traveler);
    }

    fn on_station_animation(&mut self, tick: Tick, station: StationId) {
        self.inner.on_station_animation(tick, station);
    }

    fn on_station_upgraded(&mut self, tick: Tick, station: StationId) {
        tracing::info!(%station, "station upgraded to gate");
        self.inner.on_station_upgraded(tick, station);
    }

    fn on_suspension_started(&mut self, tick: Tick, traveler: TravelerId) {
        self.inspections += 1;
        self.inner.on_suspension_started(tick, traveler);
    }

    fn on_suspension_ended(&mut self, tick: Tick, traveler: TravelerId) {
        self.inner.on_suspension_ended(tick, traveler);
    }

    fn on_wave_progress(&mut self, finished: u32, total: u32) {
        tracing::debug!(finished, total, "wave progress");
        self.inner.on_wave_progress(finished, total);
    }

    fn on_fraud_tally(&mut self, fraud: u32, tolerance: u32) {
        tracing::debug!(fraud, tolerance, "fraud tally");
        self.inner.on_fraud_tally(fraud, tolerance);
    }

    fn on_round_end(&mut self, tick: Tick, outcome: RoundOutcome) {
        self.inner.on_round_end(tick, outcome);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<RoundConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => RoundConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(n) = args.travelers {
        config.total_travelers = n;
    }
    Ok(config)
}

fn build_round(config: RoundConfig, with_player: bool) -> Result<Round<LinearMotionProvider>> {
    let mut builder = RoundBuilder::new(config, LinearMotionProvider::default());
    for x in STATION_X {
        let slots = (0..SLOTS_PER_QUEUE)
            .map(|i| Point::new(x, 0.0, 1.0 + i as f32 * SLOT_SPACING))
            .collect();
        builder = builder.station(slots, Point::new(x, 0.0, -1.0));
    }
    builder = builder
        .spawn_points(vec![
            Point::new(-4.0, 0.0, 8.0),
            Point::new(0.0, 0.0, 8.0),
            Point::new(4.0, 0.0, 8.0),
        ])
        .exit_points(vec![Point::new(-5.0, 0.0, -8.0), Point::new(5.0, 0.0, -8.0)]);
    if with_player {
        builder = builder.player(PLAYER_START);
    }
    Ok(builder.build()?)
}

// ── Inspector ─────────────────────────────────────────────────────────────────

/// Send an idle inspector after a known hopper, falling back to a random
/// post-gate traveler now and then.
fn drive_player<P, W>(round: &mut Round<P>, tally: &mut TallyObserver<W>, rng: &mut SimRng)
where
    P: MotionProvider,
    W: EventWriter,
{
    let idle = round.player.as_ref().is_some_and(|p| p.order() == PlayerOrder::Idle);
    if !idle {
        return;
    }

    // Hoppers still mid-jump are not inspectable yet; keep them for later.
    let ready = tally.hoppers.iter().position(|&id| {
        round.travelers.get(id).is_some_and(|t| t.is_suspendable())
    });
    if let Some(i) = ready {
        let target = tally.hoppers.remove(i);
        if round.player_chase(target) {
            tracing::debug!(traveler = %target, "inspector chasing hopper");
            return;
        }
    }

    if rng.gen_range(0.0..1.0) < 0.02 {
        let candidates: Vec<TravelerId> = round
            .travelers
            .iter()
            .filter(|t| t.state() == TravelerState::PostGate)
            .map(|t| t.id)
            .collect();
        if let Some(&target) = rng.choose(&candidates) {
            round.player_chase(target);
        }
    } else if round.player.as_ref().is_some_and(|p| p.position().distance(PLAYER_START) > 0.5) {
        round.player_move_to(PLAYER_START);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    println!("=== rush_hour — turnstile rush ===");
    println!(
        "Travelers: {}  |  Tolerance: {}  |  Seed: {}  |  Inspector: {}",
        config.total_travelers,
        config.max_fraud_success,
        config.seed,
        if args.no_player { "off" } else { "on" },
    );

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let writer = CsvWriter::new(&args.out)?;
    let mut tally = TallyObserver::new(EventLogObserver::new(writer, SUMMARY_INTERVAL));

    let mut inspector_rng = SimRng::new(config.seed ^ 0x1A5_9EC7);
    let mut round = build_round(config, !args.no_player)?;
    let upgrade_tick = args.upgrade_at.map(|secs| round.clock.ticks_for_secs(secs));
    let max_ticks = round.config.max_ticks;

    let t0 = Instant::now();
    while !round.is_ended() && round.clock.current_tick.0 < max_ticks {
        if upgrade_tick == Some(round.clock.current_tick.0) {
            round.upgrade_station(StationId(0), &mut tally)?;
        }
        drive_player(&mut round, &mut tally, &mut inspector_rng);
        round.step(&mut tally)?;
    }
    let final_tick = round.clock.current_tick;
    tally.on_run_end(final_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = tally.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    match round.outcome() {
        Some(outcome) => println!("Outcome: {outcome}"),
        None => println!("Outcome: none (stopped after {max_ticks} frames)"),
    }
    println!(
        "Frames: {}  ({:.1} s simulated, {:.1} ms wall)",
        final_tick.0,
        round.clock.elapsed_secs(),
        elapsed.as_secs_f64() * 1e3,
    );
    println!(
        "Admitted: {}  |  Hops: {}  |  Inspections: {}  |  Exited: {}  |  Abandoned: {}",
        tally.admitted, tally.hops, tally.inspections, tally.exited, tally.abandoned,
    );
    println!(
        "Fraud successes: {} / {} tolerated",
        round.coordinator.fraud_success_count(),
        round.coordinator.tolerance(),
    );
    println!("Output: {}", args.out.display());
    Ok(())
}
