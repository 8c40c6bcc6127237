//! Event types.
//!
//! Domain events triggered by the simulation systems and consumed by
//! observers (logging in the demo binary; sounds and screen transitions in
//! a full presentation layer).
//!
//! - [`contact`] – per-contact notifications (jump, coin, hit, castle)
//! - [`session`] – session phase transitions

pub mod contact;
pub mod session;
