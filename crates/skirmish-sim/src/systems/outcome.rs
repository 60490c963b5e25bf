//! Outcome system: decides whether the battle is over.

use skirmish_core::enums::{BattleResult, Side};
use skirmish_core::events::Notification;

use crate::world::BattleWorld;

/// Check the termination condition and freeze the world if it is met.
///
/// The player side is checked first, so a step that wipes out both
/// rosters is a loss.
pub fn run(world: &mut BattleWorld, notifications: &mut Vec<Notification>) -> Option<BattleResult> {
    let result = if world.all_down(Side::Player) {
        BattleResult::Lose
    } else if world.all_down(Side::Opponent) {
        BattleResult::Win
    } else {
        return None;
    };

    world.running = false;
    world.result = Some(result);
    notifications.push(match result {
        BattleResult::Win => Notification::Win,
        BattleResult::Lose => Notification::Lose,
    });
    Some(result)
}
