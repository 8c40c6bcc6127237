use bevy_ecs::prelude::Component;

/// Tag for the player character.
///
/// Jump and move velocities are session tuning and live in
/// [`GameConfig`](crate::resources::gameconfig::GameConfig); only the fixed
/// body size is kept here.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

impl Player {
    pub const WIDTH: f32 = 0.8;
    pub const HEIGHT: f32 = 0.8;
}
