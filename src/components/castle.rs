use bevy_ecs::prelude::Component;

/// Tag for the castle that ends the level. Exactly one exists per level,
/// placed at the top by the generator.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Castle;

impl Castle {
    pub const WIDTH: f32 = 1.7;
    pub const HEIGHT: f32 = 1.7;
}
