//! Projectile system: ballistics, range expiry, trap placement, and hits.
//!
//! Projectiles are visited from last to first. A projectile that expires
//! or hits is flagged and the vector is compacted once at the end, so the
//! survivors keep their order.

use tracing::debug;

use skirmish_core::components::{Projectile, Trap, Unit};
use skirmish_core::constants::UNIT_SIZE;
use skirmish_core::enums::Side;
use skirmish_core::events::Notification;
use skirmish_core::types::on_stage;

use crate::world::BattleWorld;

/// Advance every projectile by one frame.
pub fn run(world: &mut BattleWorld, notifications: &mut Vec<Notification>) {
    let BattleWorld {
        player_units,
        opponent_units,
        projectiles,
        traps,
        ..
    } = world;

    let mut spent = vec![false; projectiles.len()];

    for i in (0..projectiles.len()).rev() {
        let p = &mut projectiles[i];
        p.position += p.velocity;

        if p.max_travel.is_some_and(|range| p.distance_travelled() > range) {
            if let Some(trap) = land_trap(p) {
                debug!(owner = %trap.owner, x = trap.position.x, y = trap.position.y, "trap placed");
                notifications.push(Notification::Trap { owner: trap.owner });
                traps.push(trap);
            }
            spent[i] = true;
            continue;
        }

        if !on_stage(p.position) {
            spent[i] = true;
            continue;
        }

        let targets = match p.owner.side.opponent() {
            Side::Player => &mut *player_units,
            Side::Opponent => &mut *opponent_units,
        };
        if let Some(target) = first_hit(p, targets) {
            target.hp -= p.damage;
            notifications.push(Notification::Damage {
                target: target.id,
                amount: p.damage,
            });
            if !target.is_alive() {
                debug!(unit = %target.id, shooter = %p.owner, "unit down");
            }
            spent[i] = true;
        }
    }

    let mut spent = spent.into_iter();
    projectiles.retain(|_| !spent.next().unwrap_or(false));
}

/// The trap a shell leaves behind when it runs out of range, if it is a
/// trap shell at all.
fn land_trap(p: &Projectile) -> Option<Trap> {
    p.trap.map(|payload| Trap {
        position: p.position,
        damage: payload.damage,
        radius: payload.radius,
        color: p.color,
        owner: p.owner,
        remaining_frames: payload.duration_frames,
        rearm_frames: 0,
    })
}

/// First living unit, in roster order, that the projectile overlaps.
fn first_hit<'a>(p: &Projectile, targets: &'a mut [Unit]) -> Option<&'a mut Unit> {
    let reach = UNIT_SIZE / 2.0 + p.radius;
    targets
        .iter_mut()
        .find(|u| u.is_alive() && p.position.distance(u.position) < reach)
}
