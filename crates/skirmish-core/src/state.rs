//! Battle snapshot: the complete visible state handed to a renderer each tick.

use serde::{Deserialize, Serialize};

use crate::constants::{HP_HEALTHY_PERCENT, HP_WOUNDED_PERCENT};
use crate::enums::*;
use crate::events::Notification;
use crate::types::{SimTime, UnitId, Vec2};

/// Complete battle state after one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub running: bool,
    pub result: Option<BattleResult>,
    pub player_units: Vec<UnitView>,
    pub opponent_units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    pub traps: Vec<TrapView>,
    /// Notifications fired by the step that produced this snapshot.
    pub notifications: Vec<Notification>,
}

/// A unit as the HUD and renderer see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub unit_type: UnitType,
    pub name: String,
    pub color: String,
    pub position: Vec2,
    pub rotation: f64,
    pub alive: bool,
    /// Health clamped at zero.
    pub hp: i32,
    pub max_hp: i32,
    pub hp_percent: f64,
    pub hp_band: HpBand,
    /// The symbol the unit will try next, if it has any.
    pub next_action: Option<ActionKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub radius: f64,
    pub color: String,
    pub owner: UnitId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapView {
    pub position: Vec2,
    pub radius: f64,
    pub color: String,
    pub owner: UnitId,
    pub remaining_frames: u32,
}

/// Health as displayed: a killing hit can overshoot below zero internally.
pub fn display_hp(hp: i32) -> i32 {
    hp.max(0)
}

/// Displayed health as a percentage of `max_hp`.
pub fn hp_percent(hp: i32, max_hp: i32) -> f64 {
    if max_hp <= 0 {
        return 0.0;
    }
    f64::from(display_hp(hp)) / f64::from(max_hp) * 100.0
}

impl HpBand {
    pub fn for_percent(percent: f64) -> HpBand {
        if percent > HP_HEALTHY_PERCENT {
            HpBand::Healthy
        } else if percent > HP_WOUNDED_PERCENT {
            HpBand::Wounded
        } else {
            HpBand::Critical
        }
    }
}
