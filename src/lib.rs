//! Panda Jumper simulation core.
//!
//! Headless gameplay model for a vertical-scrolling platform jumper:
//! a procedural level generator constrained by jump reachability, an
//! entity-component world (bevy_ecs), fixed-order simulation systems, and
//! the authoritative session state machine. Rendering, asset loading, raw
//! input capture, and screen navigation are external collaborators that
//! read world state between ticks and feed movement signals in.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod resources;
pub mod systems;
