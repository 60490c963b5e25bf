//! Trap system: ageing, contact damage, and expiry.
//!
//! A trap damages at most one overlapping unit per re-arm window, then
//! waits `TRAP_REARM_FRAMES` whether or not anything is still standing on
//! it.

use tracing::debug;

use skirmish_core::constants::{TRAP_REARM_FRAMES, UNIT_SIZE};
use skirmish_core::enums::Side;
use skirmish_core::events::Notification;

use crate::world::BattleWorld;

/// Advance every trap by one frame.
pub fn run(world: &mut BattleWorld, notifications: &mut Vec<Notification>) {
    let BattleWorld {
        player_units,
        opponent_units,
        traps,
        ..
    } = world;

    let mut expired = vec![false; traps.len()];

    for i in (0..traps.len()).rev() {
        let trap = &mut traps[i];
        trap.remaining_frames = trap.remaining_frames.saturating_sub(1);
        if trap.remaining_frames == 0 {
            expired[i] = true;
            continue;
        }

        let targets = match trap.owner.side.opponent() {
            Side::Player => &mut *player_units,
            Side::Opponent => &mut *opponent_units,
        };
        let reach = UNIT_SIZE / 2.0 + trap.radius;
        for unit in targets.iter_mut() {
            if !unit.is_alive() || trap.position.distance(unit.position) >= reach {
                continue;
            }
            if trap.rearm_frames == 0 {
                unit.hp -= trap.damage;
                notifications.push(Notification::Damage {
                    target: unit.id,
                    amount: trap.damage,
                });
                if !unit.is_alive() {
                    debug!(unit = %unit.id, trap_owner = %trap.owner, "unit down");
                }
                trap.rearm_frames = TRAP_REARM_FRAMES;
            }
        }

        trap.rearm_frames = trap.rearm_frames.saturating_sub(1);
    }

    let mut expired = expired.into_iter();
    traps.retain(|_| !expired.next().unwrap_or(false));
}
