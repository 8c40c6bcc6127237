//! Player contact events.
//!
//! The collision system triggers one [`ContactEvent`] per resolved contact.
//! Presentation subscribes to play sounds and effects; the simulation core
//! itself only needs them for the demo binary's logging observer.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// What the player just touched.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// Bounced off a platform.
    Jumped,
    /// Launched by a spring.
    HighJumped,
    /// Hit by a hazard.
    Hit,
    /// Collected a coin.
    CoinCollected,
    /// Reached the castle.
    CastleReached,
}

/// Observer that logs contacts at debug level.
pub fn log_contact_observer(trigger: On<ContactEvent>) {
    debug!("Contact: {:?}", trigger.event());
}
