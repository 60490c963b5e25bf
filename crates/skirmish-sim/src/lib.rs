//! Battle engine for skirmish.
//!
//! Owns the battle world, runs the per-step systems in a fixed order, and
//! produces `BattleSnapshot`s for a renderer.

pub mod engine;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::BattleEngine;
pub use skirmish_core as core;
