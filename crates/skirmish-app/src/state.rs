//! State shared between the game loop thread and whoever drives it.

use std::sync::{Arc, Mutex};

use skirmish_core::enums::BattleResult;
use skirmish_core::state::BattleSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopCommand {
    /// Discard the battle without a result.
    Abandon,
    /// Stop the loop, keeping whatever result the battle reached.
    Shutdown,
}

/// Latest snapshot for synchronous polling. Written by the game loop
/// after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<BattleSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// How a game loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutcome {
    pub result: Option<BattleResult>,
    /// Simulation ticks actually stepped. Frozen ticks after the result
    /// are not counted.
    pub ticks: u64,
    pub abandoned: bool,
}
