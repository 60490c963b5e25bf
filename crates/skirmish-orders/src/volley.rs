//! Weapon spawn logic: the projectiles a unit's attack puts in flight.

use skirmish_core::components::{Projectile, TrapPayload, Unit};
use skirmish_core::constants::*;
use skirmish_core::enums::AttackKind;
use skirmish_core::events::Notification;
use skirmish_core::types::Vec2;

/// Build the projectiles for one successful attack by `unit`.
pub fn fire(unit: &Unit) -> Vec<Projectile> {
    let spec = unit.spec;
    match spec.attack_kind {
        AttackKind::Straight => vec![shot(unit, unit.rotation, STRAIGHT_PROJECTILE_RADIUS)],
        AttackKind::SniperShot => vec![shot(unit, unit.rotation, SNIPER_PROJECTILE_RADIUS)],
        AttackKind::Scatter => scatter_angles(unit.rotation)
            .map(|angle| shot(unit, angle, SCATTER_PROJECTILE_RADIUS))
            .collect(),
        AttackKind::Trap => {
            let mut shell = shot(unit, unit.rotation, TRAP_PROJECTILE_RADIUS);
            shell.damage = 0;
            shell.trap = Some(TrapPayload {
                damage: spec.attack_damage,
                radius: TRAP_RADIUS,
                duration_frames: spec.trap_duration_frames.unwrap_or(TRAP_DURATION_FRAMES),
            });
            vec![shell]
        }
    }
}

/// The notification a weapon makes when it fires. Trap shells are silent
/// until they land.
pub fn muzzle_notification(unit: &Unit) -> Option<Notification> {
    match unit.spec.attack_kind {
        AttackKind::Straight | AttackKind::Scatter => Some(Notification::Attack { unit: unit.id }),
        AttackKind::SniperShot => Some(Notification::SniperShot { unit: unit.id }),
        AttackKind::Trap => None,
    }
}

/// Evenly spaced headings across `SCATTER_SPREAD`, centred on `rotation`.
fn scatter_angles(rotation: f64) -> impl Iterator<Item = f64> {
    debug_assert!(SCATTER_COUNT >= 2, "scatter needs at least two pellets");
    let step = SCATTER_SPREAD / (SCATTER_COUNT - 1) as f64;
    let center = (SCATTER_COUNT - 1) as f64 / 2.0;
    (0..SCATTER_COUNT).map(move |i| rotation + (i as f64 - center) * step)
}

fn shot(unit: &Unit, angle: f64, radius: f64) -> Projectile {
    let spec = unit.spec;
    Projectile {
        position: unit.position,
        velocity: spec.projectile_speed * Vec2::from_angle(angle),
        damage: spec.attack_damage,
        radius,
        color: unit.color,
        owner: unit.id,
        origin: unit.position,
        max_travel: Some(spec.attack_range),
        trap: None,
    }
}
