//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the current velocity of an entity.
//! Input and collision systems write it; the movement system integrates it
//! into [`MapPosition`](super::mapposition::MapPosition). Entities that also
//! carry the [`Gravity`](super::gravity::Gravity) marker accumulate the world
//! gravity into their vertical velocity before integration.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }

    /// Create a RigidBody with an initial velocity.
    pub fn with_velocity(x: f32, y: f32) -> Self {
        Self {
            velocity: Vec2::new(x, y),
        }
    }
}
