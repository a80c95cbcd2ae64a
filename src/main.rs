//! Asteroid Arena headless runner
//!
//! Drives the simulation with a scripted pilot at a steady 60 Hz frame time
//! and logs progress. Stands in for the windowed front end, which feeds the
//! same `TickInput` per frame and draws `Simulation::snapshot()`.
//!
//! Usage: `asteroid-arena [CONFIG.json] [--seed N] [--seconds S]`

use std::path::PathBuf;
use std::process::ExitCode;

use asteroid_arena::ArenaConfig;
use asteroid_arena::sim::{Simulation, TickInput, tick};
use clap::Parser;

const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "asteroid-arena")]
#[command(about = "Run the asteroid arena headless with a scripted pilot")]
struct Args {
    /// Arena config JSON (defaults apply when omitted)
    config_path: Option<PathBuf>,

    /// RNG seed for the initial asteroid field
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,
}

/// Scripted pilot: circle slowly while firing, with bursts of thrust
fn pilot(frame: u64) -> TickInput {
    let second = frame / 60;
    TickInput {
        rotate_left: true,
        thrust_forward: second % 3 == 0,
        strafe_right: second % 5 == 4,
        fire: true,
        ..Default::default()
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config_path {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    let mut sim = Simulation::new(config, args.seed)?;
    let frames = (args.seconds / FRAME_DT).round() as u64;

    for frame in 0..frames {
        let input = pilot(frame);
        tick(&mut sim, &input, FRAME_DT);

        if sim.stats.frames % 60 == 0 {
            log::info!(
                "t={:.1}s asteroids={} projectiles={} splits={} destroyed={}",
                sim.clock,
                sim.asteroid_count(),
                sim.projectile_count(),
                sim.stats.asteroids_split,
                sim.stats.asteroids_destroyed
            );
        }
    }

    log::info!("Finished {} frames: {:?}", sim.stats.frames, sim.stats);
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Asteroid Arena (headless) starting...");

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
