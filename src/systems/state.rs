//! State machine systems.
//!
//! [`advance_state_timers`] moves every state timer forward by the tick
//! duration. [`player_state_transitions`] applies the player's transition
//! table (jump ↔ fall by vertical velocity sign; hit is sticky).
//! [`platform_pulverize`] removes pulverizing platforms once their timer
//! runs out. Transition rules are checked in declaration order and the
//! first match wins.

use bevy_ecs::prelude::*;

use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::state::{EntityState, State};
use crate::resources::worldtime::WorldTime;

/// Advance the time-in-state of every stateful entity.
pub fn advance_state_timers(time: Res<WorldTime>, mut query: Query<&mut State>) {
    for mut state in query.iter_mut() {
        state.time += time.delta;
    }
}

/// Apply the player's state transition table.
pub fn player_state_transitions(
    mut query: Query<(&mut State, &RigidBody), With<Player>>,
) {
    for (mut state, rigidbody) in query.iter_mut() {
        if state.current() == EntityState::Hit {
            continue;
        }
        if rigidbody.velocity.y > 0.0 && state.current() != EntityState::Jump {
            state.set(EntityState::Jump);
        } else if rigidbody.velocity.y < 0.0 && state.current() != EntityState::Fall {
            state.set(EntityState::Fall);
        }
    }
}

/// Remove platforms that have finished pulverizing.
pub fn platform_pulverize(
    mut commands: Commands,
    query: Query<(Entity, &State), With<Platform>>,
) {
    for (entity, state) in query.iter() {
        if state.current() == EntityState::Pulverizing && state.time >= Platform::PULVERIZE_TIME {
            commands.entity(entity).despawn();
        }
    }
}
