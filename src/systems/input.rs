//! Movement input system.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::state::{EntityState, State};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::MoveInput;

/// Translate the per-tick [`MoveInput`] signal into horizontal player
/// velocity. Vertical velocity is left untouched; a hit player no longer
/// responds to input.
pub fn apply_move_input(
    input: Res<MoveInput>,
    config: Res<GameConfig>,
    mut query: Query<(&mut RigidBody, &State), With<Player>>,
) {
    for (mut rigidbody, state) in query.iter_mut() {
        if state.current() == EntityState::Hit {
            continue;
        }
        rigidbody.velocity.x = input.direction() * config.move_velocity;
    }
}
