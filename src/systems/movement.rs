//! Physics and movement systems.
//!
//! Run in order each tick: [`apply_gravity`] accumulates the downward
//! acceleration into velocities first, [`movement`] then integrates
//! positions, [`horizontal_patrol`] bounces patrolling entities off the
//! world's horizontal extent, and [`player_wrap`] wraps the player across
//! the side edges.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::gravity::Gravity;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::HorizontalPatrol;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Accumulate world gravity into the vertical velocity of every entity
/// carrying the [`Gravity`] marker.
pub fn apply_gravity(
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut query: Query<&mut RigidBody, With<Gravity>>,
) {
    for mut rigidbody in query.iter_mut() {
        rigidbody.velocity.y += config.gravity * time.delta;
    }
}

/// Integrate positions from velocities and the tick duration.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos += rigidbody.velocity * time.delta;
    }
}

/// Reverse the horizontal velocity of patrolling entities (squirrels,
/// moving platforms) when their collider leaves the world's horizontal
/// extent, so they bounce back and forth across the level.
pub fn horizontal_patrol(
    config: Res<GameConfig>,
    mut query: Query<(&mut RigidBody, &MapPosition, &BoxCollider), With<HorizontalPatrol>>,
) {
    for (mut rigidbody, position, collider) in query.iter_mut() {
        let (min, max) = collider.aabb(position.pos);
        if min.x < 0.0 && rigidbody.velocity.x < 0.0 {
            rigidbody.velocity.x = -rigidbody.velocity.x;
        } else if max.x > config.world_width && rigidbody.velocity.x > 0.0 {
            rigidbody.velocity.x = -rigidbody.velocity.x;
        }
    }
}

/// Wrap the player across the world's side edges.
pub fn player_wrap(
    config: Res<GameConfig>,
    mut query: Query<&mut MapPosition, With<Player>>,
) {
    for mut position in query.iter_mut() {
        if position.pos.x < 0.0 {
            position.pos.x = config.world_width;
        } else if position.pos.x > config.world_width {
            position.pos.x = 0.0;
        }
    }
}
