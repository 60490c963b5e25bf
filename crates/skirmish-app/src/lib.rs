//! Skirmish battle runner.
//!
//! This crate wires the simulation engine to a fixed-rate game loop thread
//! and forwards each step's notifications to a rate-limited sink.

pub mod game_loop;
pub mod notify;
pub mod state;

pub use skirmish_core as core;
