//! Per-tick movement input resource.
//!
//! The input collaborator writes one discrete signal per tick; the
//! [`apply_move_input`](crate::systems::input::apply_move_input) system
//! translates it into horizontal player velocity. Vertical velocity is never
//! touched by input.

use bevy_ecs::prelude::Resource;

/// Discrete horizontal movement signal for the current tick.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoveInput {
    #[default]
    None,
    Left,
    Right,
}

impl MoveInput {
    /// Signed horizontal direction: -1.0, 0.0 or 1.0.
    pub fn direction(self) -> f32 {
        match self {
            MoveInput::None => 0.0,
            MoveInput::Left => -1.0,
            MoveInput::Right => 1.0,
        }
    }
}
