//! Echo Clash headless runner
//!
//! Plays the simulation in idle/demo mode at a fixed 60 Hz step and prints the
//! final frame as JSON.

use clap::Parser;
use echo_clash::Tuning;
use echo_clash::sim::{GameState, TickInput, tick};

/// Host frame time (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES_PER_SECOND: u64 = 60;

/// Headless Echo Clash - autopilot runs with a JSON result
#[derive(Parser, Debug)]
#[command(name = "echo-clash")]
#[command(about = "Run Echo Clash on autopilot and print the final frame as JSON")]
struct Args {
    /// Tuning JSON file (defaults are used if missing or invalid)
    #[arg(long)]
    tuning: Option<String>,

    /// Random seed for deterministic runs (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated minutes before giving up
    #[arg(long, default_value_t = 60)]
    minutes: u64,

    /// Hard frame cap; overrides --minutes
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Echo Clash (headless) starting...");

    let tuning_json = args.tuning.as_deref().and_then(|path| {
        match std::fs::read_to_string(path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                None
            }
        }
    });
    let tuning = Tuning::load_or_default(tuning_json.as_deref());

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let max_frames = args
        .max_frames
        .unwrap_or(args.minutes * 60 * FRAMES_PER_SECOND)
        .max(1);

    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("Seed {}, up to {} frames", state.seed, max_frames);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut last = tick(&mut state, &input, FRAME_DT);
    let mut frames = 1;
    while frames < max_frames && !state.is_over() {
        if frames % (FRAMES_PER_SECOND * 30) == 0 {
            log::info!(
                "t={}s wave={} lives={} enemies={} intensity={:.1}",
                frames / FRAMES_PER_SECOND,
                last.snapshot.wave,
                last.snapshot.lives,
                last.snapshot.enemies.len(),
                last.snapshot.intensity
            );
        }
        last = tick(&mut state, &input, FRAME_DT);
        frames += 1;
    }

    match last.terminal {
        Some(terminal) => log::info!("Run ended after {frames} frames: {terminal:?}"),
        None => log::info!("Stopped after {frames} frames on wave {}", last.snapshot.wave),
    }

    match serde_json::to_string_pretty(&last.snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
    }
}
