//! World state tracking.
//!
//! Raises the session's scrolled height and the camera-follow height to the
//! player's best vertical position, ends the session when the player drops
//! below the visible window, and removes level entities that have scrolled
//! out of reach below it.

use bevy_ecs::prelude::*;

use crate::components::background::Background;
use crate::components::camerafollow::CameraFollow;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::session::SessionPhaseChanged;
use crate::resources::gameconfig::GameConfig;
use crate::resources::session::{Session, SessionPhase};

/// Run condition: gameplay systems only run while the session is running.
pub fn session_is_running(session: Res<Session>) -> bool {
    session.is_running()
}

/// Track scroll height and detect the fall below the window.
pub fn world_state(
    mut commands: Commands,
    mut session: ResMut<Session>,
    config: Res<GameConfig>,
    player_query: Query<&MapPosition, With<Player>>,
    mut cameras: Query<&mut CameraFollow>,
    positions: Query<&MapPosition>,
) {
    // Camera follow: raise the tracked height; the relation is inert when
    // the target no longer exists.
    for mut camera in cameras.iter_mut() {
        if let Ok(target) = positions.get(camera.target)
            && target.pos.y > camera.height
        {
            camera.height = target.pos.y;
        }
    }

    let Ok(position) = player_query.single() else {
        return;
    };
    session.raise_height(position.pos.y);

    // The window scrolls up only; dropping below its lower edge ends the
    // session.
    if position.pos.y < session.height_so_far() - config.view_height / 2.0
        && session.finish(SessionPhase::GameOver)
    {
        commands.trigger(SessionPhaseChanged {
            phase: SessionPhase::GameOver,
        });
    }
}

/// Despawn level entities a full screen below the window. The view only
/// scrolls up, so they can never come back into play; the player and the
/// background anchor are exempt.
pub fn cull_below_window(
    mut commands: Commands,
    session: Res<Session>,
    config: Res<GameConfig>,
    query: Query<(Entity, &MapPosition), (Without<Player>, Without<Background>)>,
) {
    let cutoff = session.height_so_far() - config.view_height;
    for (entity, position) in query.iter() {
        if position.pos.y < cutoff {
            commands.entity(entity).despawn();
        }
    }
}
