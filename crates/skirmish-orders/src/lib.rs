//! Unit orders for skirmish.
//!
//! Interprets each unit's action sequence one frame at a time, builds the
//! projectiles its weapon fires, and holds the hand-authored action
//! sequences the opponent roster uses.

pub mod executor;
pub mod profiles;
pub mod volley;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
