use bevy_ecs::prelude::Component;

/// Marker: this entity patrols horizontally and reverses its horizontal
/// velocity when its collider leaves the world's horizontal extent.
///
/// Attached to squirrels and moving platforms.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct HorizontalPatrol;
