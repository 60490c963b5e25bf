//! Notifications emitted by the simulation for audio and UI feedback.
//!
//! The simulation only records these; it never waits on whoever consumes
//! them, and a consumer that drops every notification does not change the
//! outcome of a battle.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// A discrete feedback event fired during one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    /// A unit moved.
    Move { unit: UnitId },
    /// A gatling or cannon fired.
    Attack { unit: UnitId },
    /// A sniper fired.
    SniperShot { unit: UnitId },
    /// Front-end hit marker. The simulation reports hits as `Damage`.
    Hit { target: UnitId },
    /// A trap shell landed and became a trap.
    Trap { owner: UnitId },
    /// A unit lost health to a projectile or trap.
    Damage { target: UnitId, amount: i32 },
    /// Every opponent unit is down.
    Win,
    /// Every player unit is down.
    Lose,
}

impl Notification {
    /// The tag consumers key their behaviour (and rate limits) on.
    pub fn tag(&self) -> &'static str {
        match self {
            Notification::Move { .. } => "move",
            Notification::Attack { .. } => "attack",
            Notification::SniperShot { .. } => "sniper_shot",
            Notification::Hit { .. } => "hit",
            Notification::Trap { .. } => "trap",
            Notification::Damage { .. } => "damage",
            Notification::Win => "win",
            Notification::Lose => "lose",
        }
    }
}
