use bevy_ecs::prelude::Component;

/// Tag for the background entity. Pure presentation data; the simulation
/// only spawns it so the renderer has something to anchor the backdrop to.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Background;
