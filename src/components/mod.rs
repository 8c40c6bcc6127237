//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components are plain data records; the presence of a
//! component is the only "type" signal an entity has, and systems select
//! entities by component-kind queries.
//!
//! Submodules overview:
//! - [`animation`] – per-state animation handle table read by presentation
//! - [`background`] – tag for the scrolling background entity
//! - [`boxcollider`] – axis-aligned collision bounds centered on the position
//! - [`camerafollow`] – non-owning camera tracking relation
//! - [`castle`] – tag for the level-ending castle
//! - [`coin`] – tag for collectible coins
//! - [`gravity`] – marker for entities pulled down by world gravity
//! - [`mapposition`] – world-space position
//! - [`patrol`] – marker for horizontal back-and-forth movement
//! - [`platform`] – platform tag with static/moving subtype
//! - [`player`] – tag for the player character
//! - [`rigidbody`] – kinematic body storing velocity
//! - [`spring`] – tag for launch springs
//! - [`squirrel`] – tag for flying hazards
//! - [`state`] – behavioral state plus time-in-state
//! - [`zindex`] – fixed draw layer per entity kind

pub mod animation;
pub mod background;
pub mod boxcollider;
pub mod camerafollow;
pub mod castle;
pub mod coin;
pub mod gravity;
pub mod mapposition;
pub mod patrol;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod spring;
pub mod squirrel;
pub mod state;
pub mod zindex;
