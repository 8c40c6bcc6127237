//! ECS resources.
//!
//! Session-wide state shared by systems:
//! - [`gameconfig`] – tuning constants loaded from an INI file, validated at
//!   session start
//! - [`input`] – per-tick movement signal from the input collaborator
//! - [`rng`] – seeded random stream for in-play coin flips
//! - [`session`] – score, scrolled height, lives, and the session phase
//! - [`worldtime`] – elapsed/delta simulation time

pub mod gameconfig;
pub mod input;
pub mod rng;
pub mod session;
pub mod worldtime;
