use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned collision bounds, centered on the entity's
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// The size is fixed at spawn time; collision tests never mutate it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let half = self.size * 0.5;
        (position - half, position + half)
    }

    /// AABB vs AABB overlap test against another collider at a different
    /// entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}
