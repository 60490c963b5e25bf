//! Snapshot system: reads the world and builds a complete `BattleSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use skirmish_core::components::{Projectile, Trap, Unit};
use skirmish_core::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use skirmish_core::enums::{HpBand, Side};
use skirmish_core::events::Notification;
use skirmish_core::state::*;
use skirmish_core::types::{CameraOffset, SimTime, Viewport};

use crate::world::BattleWorld;

/// Build a snapshot of the current world.
pub fn build_snapshot(
    world: &BattleWorld,
    time: &SimTime,
    notifications: Vec<Notification>,
) -> BattleSnapshot {
    BattleSnapshot {
        time: *time,
        running: world.running,
        result: world.result,
        player_units: world.player_units.iter().map(unit_view).collect(),
        opponent_units: world.opponent_units.iter().map(unit_view).collect(),
        projectiles: world.projectiles.iter().map(projectile_view).collect(),
        traps: world.traps.iter().map(trap_view).collect(),
        notifications,
    }
}

/// The viewport a renderer should draw, following the living player units.
pub fn viewport(world: &BattleWorld, camera: CameraOffset) -> Viewport {
    Viewport::follow(
        world.living_positions(Side::Player),
        camera,
        VIEWPORT_WIDTH,
        VIEWPORT_HEIGHT,
    )
}

fn unit_view(unit: &Unit) -> UnitView {
    let percent = hp_percent(unit.hp, unit.max_hp);
    UnitView {
        id: unit.id,
        unit_type: unit.unit_type,
        name: unit.spec.name.to_string(),
        color: unit.color.to_string(),
        position: unit.position,
        rotation: unit.rotation,
        alive: unit.is_alive(),
        hp: display_hp(unit.hp),
        max_hp: unit.max_hp,
        hp_percent: percent,
        hp_band: HpBand::for_percent(percent),
        next_action: unit.actions.get(unit.action_index).copied(),
    }
}

fn projectile_view(p: &Projectile) -> ProjectileView {
    ProjectileView {
        position: p.position,
        radius: p.radius,
        color: p.color.to_string(),
        owner: p.owner,
    }
}

fn trap_view(trap: &Trap) -> TrapView {
    TrapView {
        position: trap.position,
        radius: trap.radius,
        color: trap.color.to_string(),
        owner: trap.owner,
        remaining_frames: trap.remaining_frames,
    }
}
