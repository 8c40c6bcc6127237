use bevy_ecs::prelude::Component;

/// Tag for flying squirrel hazards. Contact while the player is vulnerable
/// puts the player into the hit state.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Squirrel;

impl Squirrel {
    pub const WIDTH: f32 = 1.0;
    pub const HEIGHT: f32 = 0.6;
    /// Horizontal patrol speed; sign is randomized at spawn.
    pub const VELOCITY: f32 = 3.0;
}
