//! Unit orders system: runs the action executor for every unit.
//!
//! All player units go first, then all opponent units, each in roster
//! order. A unit sees the positions left by units that acted before it in
//! the same step.

use tracing::trace;

use skirmish_core::enums::Side;
use skirmish_core::events::Notification;
use skirmish_orders::executor::{evaluate, ActionOutcome};
use skirmish_orders::volley;

use crate::world::BattleWorld;

/// Run one frame of orders for both rosters.
pub fn run(world: &mut BattleWorld, notifications: &mut Vec<Notification>) {
    for side in [Side::Player, Side::Opponent] {
        for slot in 0..world.roster(side).len() {
            step_unit(world, side, slot, notifications);
        }
    }
}

fn step_unit(
    world: &mut BattleWorld,
    side: Side,
    slot: usize,
    notifications: &mut Vec<Notification>,
) {
    if !world.roster(side)[slot].is_alive() {
        return;
    }

    let enemies = world.living_positions(side.opponent());
    let update = evaluate(&world.roster(side)[slot], &enemies);

    // Apply first, then spawn and notify from the updated unit.
    let unit = &mut world.roster_mut(side)[slot];
    unit.position = update.position;
    unit.rotation = update.rotation;
    unit.action_index = update.action_index;
    unit.action_cooldown = update.action_cooldown;
    unit.attack_cooldown = update.attack_cooldown;

    match update.outcome {
        ActionOutcome::Moved => {
            notifications.push(Notification::Move { unit: unit.id });
        }
        ActionOutcome::Fired => {
            let shots = volley::fire(unit);
            let muzzle = volley::muzzle_notification(unit);
            trace!(unit = %unit.id, count = shots.len(), "fired");
            world.projectiles.extend(shots);
            notifications.extend(muzzle);
        }
        ActionOutcome::Searched { .. }
        | ActionOutcome::AttackDeferred
        | ActionOutcome::CoolingDown
        | ActionOutcome::Idle
        | ActionOutcome::Inert => {}
    }
}
