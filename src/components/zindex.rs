//! Z-index component for render ordering.

use bevy_ecs::prelude::Component;

/// Draw layer hint for 2D rendering.
///
/// Higher values are drawn later (on top). The layer is fixed per entity
/// kind at spawn time and never mutated afterwards.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
