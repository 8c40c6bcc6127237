use bevy_ecs::prelude::Component;

/// Tag for launch springs placed on static platforms.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Spring;

impl Spring {
    pub const WIDTH: f32 = 0.3;
    pub const HEIGHT: f32 = 0.3;
    /// Launch velocity is the player's jump velocity times this factor.
    pub const LAUNCH_FACTOR: f32 = 1.5;
}
