//! queue-terminal — watch the queue simulation in a terminal.
//!
//! Seeds a few clients, starts periodic steps, and feeds animation frames to
//! the driver for a fixed span of simulated time.  New clients keep arriving
//! on their own timer.  By default time runs as fast as the CPU allows; pass
//! `--realtime` to sleep between frames.

mod render;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use qs_client::ClientView;
use qs_driver::{Driver, Timer};
use qs_sim::{FrameReport, QueueObserver, QueueSimBuilder, StepReport};

use render::TextRenderer;

// ── Constants ─────────────────────────────────────────────────────────────────

const LANE_COLUMNS: usize = 60;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "queue-terminal", about = "Queue of impatient clients, drawn as ASCII")]
struct Args {
    /// RNG seed; the same seed replays the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Clients waiting when the run starts.
    #[arg(long, default_value_t = 4)]
    clients: usize,

    /// Simulated seconds to run for.
    #[arg(long, default_value_t = 20.0)]
    seconds: f64,

    /// Seconds between scripted arrivals; 0 disables them.
    #[arg(long, default_value_t = 2.0)]
    arrival_secs: f64,

    /// Sleep between frames so the run takes real time.
    #[arg(long)]
    realtime: bool,

    /// Print the final queue as JSON.
    #[arg(long)]
    json: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct RunStats {
    arrivals:   usize,
    steps:      usize,
    exits:      usize,
    departures: usize,
    renders:    usize,
}

impl QueueObserver for RunStats {
    fn on_client_added(&mut self, client: &ClientView) {
        self.arrivals += 1;
        log::debug!("{} arrived with patience {}", client.id, client.patience);
    }

    fn on_step(&mut self, report: &StepReport) {
        self.steps += 1;
        self.exits += report.exited.len();
        if let Some(event) = report.event {
            log::info!("{}: {event}", report.tick);
        }
    }

    fn on_frame(&mut self, report: &FrameReport) {
        self.departures += report.removed.len();
    }

    fn on_render(&mut self, _clients: usize) {
        self.renders += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let run_for = Duration::try_from_secs_f64(args.seconds).context("invalid --seconds")?;
    let arrival_every =
        Duration::try_from_secs_f64(args.arrival_secs).context("invalid --arrival-secs")?;

    // 1. Build the simulation.
    let sim = QueueSimBuilder::new(args.seed).build()?;
    let frame_interval = sim.config().frame_interval();
    let renderer = TextRenderer::new(io::stdout(), sim.viewport(), LANE_COLUMNS);
    let mut driver = Driver::with_observer(sim, renderer, RunStats::default());

    log::info!(
        "seed {}  |  {} initial clients  |  {:.1} s simulated",
        args.seed,
        args.clients,
        run_for.as_secs_f64()
    );

    // 2. Seed the line and start stepping.
    for _ in 0..args.clients {
        driver.add_client();
    }
    driver.start();

    let mut arrivals = Timer::new(arrival_every);
    if !arrival_every.is_zero() {
        arrivals.start();
    }

    // 3. Run.
    let t0 = Instant::now();
    let mut elapsed = Duration::ZERO;
    while elapsed < run_for {
        if args.realtime {
            std::thread::sleep(frame_interval);
        }
        driver.advance(frame_interval);
        arrivals.elapse(frame_interval);
        if arrivals.fire_if_due() {
            driver.add_client();
        }
        elapsed += frame_interval;
    }
    driver.stop();

    let (sim, mut renderer, stats) = driver.into_parts();
    if let Some(e) = renderer.take_error() {
        return Err(e).context("writing to stdout");
    }

    // 4. Summary.
    log::info!("run complete in {:.3} s wall time", t0.elapsed().as_secs_f64());
    println!();
    println!("{:<12} {:>6}", "arrivals", stats.arrivals);
    println!("{:<12} {:>6}", "steps", stats.steps);
    println!("{:<12} {:>6}", "exits", stats.exits);
    println!("{:<12} {:>6}", "departures", stats.departures);
    println!("{:<12} {:>6}", "renders", stats.renders);
    println!("{:<12} {:>6}", "still queued", sim.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    }

    Ok(())
}
