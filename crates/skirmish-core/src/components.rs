//! Battle entities: units, projectiles, traps, and the archetype table.
//!
//! Components are plain data. Game logic lives in the orders crate and in
//! the sim systems, not here.

use serde::Serialize;

use crate::constants::*;
use crate::enums::*;
use crate::types::{UnitId, Vec2};

/// Static combat statistics for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitTypeSpec {
    pub name: &'static str,
    /// Hex colour used for the unit body and its projectiles.
    pub color: &'static str,
    /// Maximum travel distance of this archetype's projectiles.
    pub attack_range: f64,
    pub attack_damage: i32,
    pub attack_kind: AttackKind,
    /// Projectile displacement per frame.
    pub projectile_speed: f64,
    /// Weapon cooldown after each successful attack (frames).
    pub cooldown_frames: u32,
    /// Lifetime of placed traps (frames). Only set for trap weapons.
    pub trap_duration_frames: Option<u32>,
}

const GATLING: UnitTypeSpec = UnitTypeSpec {
    name: "Gatling",
    color: "#f6e05e",
    attack_range: 100.0,
    attack_damage: 8,
    attack_kind: AttackKind::Scatter,
    projectile_speed: 5.0,
    cooldown_frames: 30,
    trap_duration_frames: None,
};

const CANNON: UnitTypeSpec = UnitTypeSpec {
    name: "Cannon",
    color: "#fc8181",
    attack_range: 200.0,
    attack_damage: 40,
    attack_kind: AttackKind::Straight,
    projectile_speed: 10.0,
    cooldown_frames: 60,
    trap_duration_frames: None,
};

const TRAP_CANNON: UnitTypeSpec = UnitTypeSpec {
    name: "Trap Cannon",
    color: "#63b3ed",
    attack_range: 100.0,
    attack_damage: 20,
    attack_kind: AttackKind::Trap,
    projectile_speed: 7.0,
    cooldown_frames: 90,
    trap_duration_frames: Some(TRAP_DURATION_FRAMES),
};

const SNIPER: UnitTypeSpec = UnitTypeSpec {
    name: "Sniper",
    color: "#805ad5",
    attack_range: 300.0,
    attack_damage: 30,
    attack_kind: AttackKind::SniperShot,
    projectile_speed: 20.0,
    cooldown_frames: 150,
    trap_duration_frames: None,
};

/// Look up the statistics for an archetype.
pub fn unit_spec(unit_type: UnitType) -> &'static UnitTypeSpec {
    match unit_type {
        UnitType::Gatling => &GATLING,
        UnitType::Cannon => &CANNON,
        UnitType::TrapCannon => &TRAP_CANNON,
        UnitType::Sniper => &SNIPER,
    }
}

/// A combatant. Never removed from its roster; dead units are skipped by
/// an `hp > 0` check.
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    pub id: UnitId,
    pub unit_type: UnitType,
    pub position: Vec2,
    /// Facing angle in radians (0 = +x, π/2 = +y / down the stage).
    pub rotation: f64,
    /// May go below zero on the killing hit.
    pub hp: i32,
    pub max_hp: i32,
    pub color: &'static str,
    pub actions: Vec<ActionKey>,
    /// Index of the next action; wraps modulo `actions.len()`.
    pub action_index: usize,
    /// Generic cooldown gating the next action attempt (frames).
    pub action_cooldown: u32,
    /// Weapon cooldown (frames).
    pub attack_cooldown: u32,
    pub spec: &'static UnitTypeSpec,
}

impl Unit {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn side(&self) -> Side {
        self.id.side
    }
}

/// Deferred trap carried by a trap shell until it reaches its range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrapPayload {
    pub damage: i32,
    pub radius: f64,
    pub duration_frames: u32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize)]
pub struct Projectile {
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    pub damage: i32,
    pub radius: f64,
    pub color: &'static str,
    /// Firing unit. Only used to find the team to collide with.
    pub owner: UnitId,
    /// Spawn point, for range expiry.
    pub origin: Vec2,
    pub max_travel: Option<f64>,
    /// Set only on trap shells.
    pub trap: Option<TrapPayload>,
}

impl Projectile {
    pub fn distance_travelled(&self) -> f64 {
        self.position.distance(self.origin)
    }
}

/// A placed contact trap.
#[derive(Debug, Clone, Serialize)]
pub struct Trap {
    pub position: Vec2,
    pub damage: i32,
    pub radius: f64,
    pub color: &'static str,
    pub owner: UnitId,
    pub remaining_frames: u32,
    /// Frames until the trap can damage again. Zero means armed.
    pub rearm_frames: u32,
}
