use bevy_ecs::prelude::Component;

/// Marker: world gravity accelerates this entity downwards each tick.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Gravity;
