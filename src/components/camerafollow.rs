//! Camera tracking relation.
//!
//! The simulation core has no camera object; presentation owns one and
//! resolves this relation each frame. [`CameraFollow`] stores the tracked
//! entity id (a non-owning reference, looked up per tick) and the highest
//! vertical position the target has reached, which presentation uses as the
//! camera height so the view never scrolls back down.

use bevy_ecs::prelude::{Component, Entity};

/// Non-owning camera tracking relation.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraFollow {
    /// The entity to track. If it no longer exists the relation is inert.
    pub target: Entity,
    /// Highest vertical position the target has reached; monotonic.
    pub height: f32,
}

impl CameraFollow {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            height: 0.0,
        }
    }
}
