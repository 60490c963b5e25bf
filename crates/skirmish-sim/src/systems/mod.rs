//! Systems that operate on the battle world each step.
//!
//! Systems are plain functions over `&mut BattleWorld` (or `&BattleWorld`
//! for read-only). They hold no state of their own. The engine runs them in
//! a fixed order: unit orders, projectiles, traps, outcome.

pub mod outcome;
pub mod projectiles;
pub mod snapshot;
pub mod traps;
pub mod unit_orders;
