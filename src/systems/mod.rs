//! Simulation systems.
//!
//! One pass per concern, run in a fixed order each tick (see
//! [`simulation_schedule`](crate::game::simulation_schedule)):
//! input → physics → collision → state → world state.
//!
//! Submodules overview:
//! - [`collision`] – player contact resolution in priority order
//! - [`input`] – translate the movement signal into player velocity
//! - [`movement`] – gravity, position integration, patrols, wrapping
//! - [`state`] – state timers, player jump/fall, platform pulverize
//! - [`time`] – advance the simulation clock
//! - [`worldstate`] – scrolled height, camera follow, fall detection,
//!   off-window culling

pub mod collision;
pub mod input;
pub mod movement;
pub mod state;
pub mod time;
pub mod worldstate;
