//! Session lifecycle and tick schedule.
//!
//! A session is started once per play-through with [`start_session`], which
//! validates the configuration, installs the session resources, and runs
//! the level generator. Every tick the orchestrator advances the clock with
//! [`update_world_time`](crate::systems::time::update_world_time) and runs
//! the schedule built by [`simulation_schedule`].

use bevy_ecs::prelude::*;

use crate::level::{self, LevelHandles};
use crate::resources::gameconfig::{ConfigError, GameConfig};
use crate::resources::input::MoveInput;
use crate::resources::rng::GameRng;
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::player_collision;
use crate::systems::input::apply_move_input;
use crate::systems::movement::{apply_gravity, horizontal_patrol, movement, player_wrap};
use crate::systems::state::{advance_state_timers, platform_pulverize, player_state_transitions};
use crate::systems::worldstate::{cull_below_window, session_is_running, world_state};

/// Validate `config`, install the session resources, and generate a level
/// from `seed`. Fails fast on an invalid configuration; nothing is spawned
/// in that case.
pub fn start_session(
    world: &mut World,
    config: GameConfig,
    seed: u64,
) -> Result<LevelHandles, ConfigError> {
    config.validate()?;

    world.insert_resource(WorldTime::default());
    world.insert_resource(MoveInput::default());
    world.insert_resource(Session::new(config.lives));

    // One seeded stream: the generator consumes it first, in-play rolls
    // continue from where generation left off.
    let mut rng = fastrand::Rng::with_seed(seed);
    let handles = level::generate_level(world, &config, &mut rng);
    world.insert_resource(GameRng(rng));
    world.insert_resource(config);

    Ok(handles)
}

/// Build the per-tick schedule. The systems run in a fixed order, each
/// completing before the next, and all of them are gated on the session
/// still running — terminal phases freeze gameplay state.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            apply_move_input,
            apply_gravity,
            movement,
            horizontal_patrol,
            player_wrap,
            player_collision,
            advance_state_timers,
            player_state_transitions,
            platform_pulverize,
            world_state,
            cull_below_window,
        )
            .chain()
            .run_if(session_is_running),
    );
    schedule
}
