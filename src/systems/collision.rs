//! Player contact resolution.
//!
//! Tests the player's bounds against nearby platforms, springs, coins,
//! squirrels, and the castle, and applies the first matching rule in
//! priority order:
//!
//! 1. squirrel contact while vulnerable – player is hit, loses a life
//! 2. coin contact – coin collected and removed
//! 3. spring contact while falling – high jump
//! 4. platform top contact while falling – regular bounce, maybe pulverize
//! 5. castle contact – level complete
//!
//! Only entities within one screen height of the player are considered;
//! everything further away cannot be touched this tick. Entity removal goes
//! through [`Commands`], so it is deferred to the end of the pass and never
//! invalidates the queries being iterated.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::castle::Castle;
use crate::components::coin::Coin;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::spring::Spring;
use crate::components::squirrel::Squirrel;
use crate::components::state::{EntityState, State};
use crate::events::contact::ContactEvent;
use crate::events::session::SessionPhaseChanged;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::GameRng;
use crate::resources::session::{Session, SessionPhase};

/// Resolve player contacts for this tick. At most one rule fires.
#[allow(clippy::too_many_arguments)]
pub fn player_collision(
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
    mut player_query: Query<
        (&MapPosition, &BoxCollider, &mut RigidBody, &mut State),
        With<Player>,
    >,
    squirrels: Query<(&MapPosition, &BoxCollider), With<Squirrel>>,
    coins: Query<(Entity, &MapPosition, &BoxCollider), With<Coin>>,
    springs: Query<(&MapPosition, &BoxCollider), With<Spring>>,
    mut platforms: Query<
        (&MapPosition, &BoxCollider, &mut State, &Platform),
        Without<Player>,
    >,
    castles: Query<(&MapPosition, &BoxCollider), With<Castle>>,
) {
    let Ok((position, collider, mut rigidbody, mut state)) = player_query.single_mut() else {
        return;
    };
    let pos = position.pos;
    let near = |other_y: f32| (other_y - pos.y).abs() <= config.view_height;

    // Rule 1: hazards. A hit player is invulnerable to further contacts.
    if state.current() != EntityState::Hit {
        for (sq_pos, sq_collider) in squirrels.iter() {
            if near(sq_pos.pos.y) && collider.overlaps(pos, sq_collider, sq_pos.pos) {
                state.set(EntityState::Hit);
                rigidbody.velocity.x = 0.0;
                commands.trigger(ContactEvent::Hit);
                if session.lose_life() == 0 && session.finish(SessionPhase::GameOver) {
                    commands.trigger(SessionPhaseChanged {
                        phase: SessionPhase::GameOver,
                    });
                }
                return;
            }
        }
    }

    // Rule 2: coins. Removal is deferred via Commands.
    for (coin_entity, coin_pos, coin_collider) in coins.iter() {
        if near(coin_pos.pos.y) && collider.overlaps(pos, coin_collider, coin_pos.pos) {
            commands.entity(coin_entity).despawn();
            session.add_score(Coin::SCORE);
            commands.trigger(ContactEvent::CoinCollected);
            return;
        }
    }

    let falling = rigidbody.velocity.y < 0.0;

    // Rule 3: springs launch a falling player.
    if falling {
        for (spring_pos, spring_collider) in springs.iter() {
            if near(spring_pos.pos.y) && collider.overlaps(pos, spring_collider, spring_pos.pos) {
                rigidbody.velocity.y = config.jump_velocity * Spring::LAUNCH_FACTOR;
                state.set(EntityState::Jump);
                commands.trigger(ContactEvent::HighJumped);
                return;
            }
        }
    }

    // Rule 4: platform tops bounce a falling player that is above the
    // platform's center line.
    if falling {
        for (pf_pos, pf_collider, mut pf_state, _platform) in platforms.iter_mut() {
            if near(pf_pos.pos.y)
                && pos.y > pf_pos.pos.y
                && collider.overlaps(pos, pf_collider, pf_pos.pos)
            {
                rigidbody.velocity.y = config.jump_velocity;
                state.set(EntityState::Jump);
                commands.trigger(ContactEvent::Jumped);
                // Half the landings crumble the platform. Empirical balance
                // kept from the reference game.
                if pf_state.current() != EntityState::Pulverizing && rng.0.f32() > 0.5 {
                    pf_state.set(EntityState::Pulverizing);
                }
                return;
            }
        }
    }

    // Rule 5: the castle ends the level.
    for (castle_pos, castle_collider) in castles.iter() {
        if near(castle_pos.pos.y) && collider.overlaps(pos, castle_collider, castle_pos.pos) {
            if session.finish(SessionPhase::NextLevel) {
                commands.trigger(SessionPhaseChanged {
                    phase: SessionPhase::NextLevel,
                });
            }
            commands.trigger(ContactEvent::CastleReached);
            return;
        }
    }
}
