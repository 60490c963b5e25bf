//! The battle world: both rosters and everything in flight.
//!
//! One instance per battle, owned by the engine. Units are never removed
//! from their roster; projectiles and traps are dense vectors compacted as
//! they expire.

use skirmish_core::components::{Projectile, Trap, Unit};
use skirmish_core::enums::{BattleResult, Side};
use skirmish_core::types::Vec2;

#[derive(Debug, Clone)]
pub struct BattleWorld {
    pub player_units: Vec<Unit>,
    pub opponent_units: Vec<Unit>,
    pub projectiles: Vec<Projectile>,
    pub traps: Vec<Trap>,
    pub running: bool,
    pub result: Option<BattleResult>,
}

impl BattleWorld {
    /// A running battle with empty skies.
    pub fn new(player_units: Vec<Unit>, opponent_units: Vec<Unit>) -> Self {
        Self {
            player_units,
            opponent_units,
            projectiles: Vec::new(),
            traps: Vec::new(),
            running: true,
            result: None,
        }
    }

    pub fn roster(&self, side: Side) -> &[Unit] {
        match side {
            Side::Player => &self.player_units,
            Side::Opponent => &self.opponent_units,
        }
    }

    pub fn roster_mut(&mut self, side: Side) -> &mut Vec<Unit> {
        match side {
            Side::Player => &mut self.player_units,
            Side::Opponent => &mut self.opponent_units,
        }
    }

    /// Positions of a side's living units, in roster order.
    pub fn living_positions(&self, side: Side) -> Vec<Vec2> {
        self.roster(side)
            .iter()
            .filter(|u| u.is_alive())
            .map(|u| u.position)
            .collect()
    }

    /// True when no unit on `side` has health left. An empty roster counts.
    pub fn all_down(&self, side: Side) -> bool {
        self.roster(side).iter().all(|u| !u.is_alive())
    }
}
