//! Session phase transition event and observer.
//!
//! Triggered exactly once when the session leaves the running phase.
//! The orchestration collaborator can either poll
//! [`Session::phase`](crate::resources::session::Session::phase) each tick
//! or subscribe to this event to switch screens.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::session::SessionPhase;

/// Event fired when the session phase changes to a terminal value.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPhaseChanged {
    pub phase: SessionPhase,
}

/// Observer that logs session phase transitions.
pub fn observe_phase_change(trigger: On<SessionPhaseChanged>) {
    info!("Session phase changed to {:?}", trigger.event().phase);
}
