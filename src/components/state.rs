//! Behavioral state component.
//!
//! Each stateful entity kind runs a small state machine: the player cycles
//! through jumping, falling and hit; platforms go from normal to pulverizing
//! before removal. The [`State`] component stores the current state together
//! with the seconds spent in it. [`State::set`] resets the timer, so
//! time-based transitions (platform pulverize) measure from the last change.

use bevy_ecs::prelude::Component;

/// Behavioral states shared by all stateful entity kinds.
///
/// Which states are meaningful depends on the entity kind: the player uses
/// `Jump`/`Fall`/`Hit`, platforms use `Normal`/`Pulverizing`, squirrels and
/// coins stay in `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    Jump,
    Fall,
    Hit,
    Normal,
    Pulverizing,
}

/// Current behavioral state plus seconds elapsed since entering it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct State {
    current: EntityState,
    /// Seconds spent in the current state, advanced once per tick.
    pub time: f32,
}

impl State {
    pub fn new(initial: EntityState) -> Self {
        Self {
            current: initial,
            time: 0.0,
        }
    }

    /// Read-only access to the current state.
    pub fn current(&self) -> EntityState {
        self.current
    }

    /// Switch to a new state and reset the state timer.
    pub fn set(&mut self, next: EntityState) {
        self.current = next;
        self.time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_resets_timer() {
        let mut state = State::new(EntityState::Jump);
        state.time = 1.5;
        state.set(EntityState::Fall);
        assert_eq!(state.current(), EntityState::Fall);
        assert_eq!(state.time, 0.0);
    }
}
