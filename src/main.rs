//! Headless demo runner.
//!
//! Starts one session and ticks the simulation at a fixed 60 Hz until the
//! session ends or the tick budget runs out, logging the outcome. Useful
//! for balancing runs and as a reference for how an orchestration layer
//! drives the core:
//!
//! 1. Build the ECS world and register event observers
//! 2. Load `config.ini` (missing file keeps defaults) and start a session
//! 3. Per tick: write the movement signal, advance the clock, run the
//!    schedule, read session phase/score/height
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use pandajumper::events::contact::log_contact_observer;
use pandajumper::events::session::observe_phase_change;
use pandajumper::game;
use pandajumper::resources::gameconfig::GameConfig;
use pandajumper::resources::session::Session;
use pandajumper::systems::time::update_world_time;

/// Panda Jumper simulation core, headless demo run
#[derive(Parser)]
#[command(version, about = "Runs one headless panda-jumper session to completion")]
struct Cli {
    /// Level seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks to simulate (60 per second)
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,

    /// Path to the INI configuration file
    #[arg(long, default_value = "./config.ini")]
    config: PathBuf,
}

const TICK_SECONDS: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("Config file not found or invalid, using defaults: {e}");
    }

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));

    let mut world = World::new();
    world.add_observer(observe_phase_change);
    world.add_observer(log_contact_observer);
    world.flush();

    let handles = match game::start_session(&mut world, config, seed) {
        Ok(handles) => handles,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Session started, seed {seed}, player {:?}", handles.player);

    let mut schedule = game::simulation_schedule();
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let mut ticks = 0u64;
    while ticks < cli.ticks {
        update_world_time(&mut world, TICK_SECONDS);
        schedule.run(&mut world);
        world.clear_trackers();
        ticks += 1;

        if !world.resource::<Session>().is_running() {
            break;
        }
    }

    let session = world.resource::<Session>();
    log::info!(
        "Session finished after {ticks} ticks: phase {:?}, score {}, height {:.1}",
        session.phase(),
        session.score(),
        session.height_so_far()
    );
}
