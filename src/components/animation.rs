//! Animation track table component.
//!
//! Maps each behavioral state to an opaque animation handle (a string key
//! resolved by the asset-loading collaborator). The simulation never plays
//! animations itself; presentation reads the current
//! [`State`](super::state::State) and looks up the matching track with
//! [`Animation::track_for`], which is a pure lookup.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

use crate::components::state::EntityState;

/// Per-state animation handles for one entity.
#[derive(Component, Debug, Clone, Default)]
pub struct Animation {
    tracks: FxHashMap<EntityState, String>,
}

impl Animation {
    pub fn new() -> Self {
        Self {
            tracks: FxHashMap::default(),
        }
    }

    /// Register the animation handle to play while in `state` (builder).
    pub fn with_track(mut self, state: EntityState, key: impl Into<String>) -> Self {
        self.tracks.insert(state, key.into());
        self
    }

    /// Animation handle for the given state, if one is registered.
    pub fn track_for(&self, state: EntityState) -> Option<&str> {
        self.tracks.get(&state).map(String::as_str)
    }
}
