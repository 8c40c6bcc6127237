use bevy_ecs::prelude::Component;

/// Tag for collectible coins.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Coin;

impl Coin {
    pub const WIDTH: f32 = 0.5;
    pub const HEIGHT: f32 = 0.8;
    /// Score awarded when collected.
    pub const SCORE: u32 = 10;
}
