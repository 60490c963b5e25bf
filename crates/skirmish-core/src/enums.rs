//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Unit archetype. Each archetype has fixed combat statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    /// Short-range scatter gun.
    Gatling,
    /// Medium-range single heavy shell.
    Cannon,
    /// Lobs a shell that becomes a contact trap at the end of its flight.
    TrapCannon,
    /// Long-range, fast, slow-firing rifle with a self-stun after each shot.
    Sniper,
}

impl UnitType {
    /// Every archetype, in declaration order.
    pub const ALL: [UnitType; 4] = [
        UnitType::Gatling,
        UnitType::Cannon,
        UnitType::TrapCannon,
        UnitType::Sniper,
    ];
}

/// One symbol of a unit's action sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKey {
    MoveForward,
    MoveBackward,
    MoveRight,
    MoveLeft,
    MoveTopRight,
    MoveTopLeft,
    MoveBottomRight,
    MoveBottomLeft,
    SearchEnemy,
    Attack,
}

impl ActionKey {
    /// Short glyph used by text HUDs.
    pub fn mark(self) -> &'static str {
        match self {
            ActionKey::MoveForward => "↑",
            ActionKey::MoveBackward => "↓",
            ActionKey::MoveRight => "→",
            ActionKey::MoveLeft => "←",
            ActionKey::MoveTopRight => "↗",
            ActionKey::MoveTopLeft => "↖",
            ActionKey::MoveBottomRight => "↘",
            ActionKey::MoveBottomLeft => "↙",
            ActionKey::SearchEnemy => "⟳",
            ActionKey::Attack => "✸",
        }
    }
}

/// How an archetype's weapon spawns projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    /// A fan of pellets around the facing.
    Scatter,
    /// One projectile along the facing.
    Straight,
    /// One trap-carrying shell along the facing.
    Trap,
    /// One fast projectile along the facing; stuns the shooter.
    SniperShot,
}

/// Which roster a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Terminal battle result, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleResult {
    Win,
    Lose,
}

/// Colour band for an HP bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HpBand {
    Healthy,
    Wounded,
    Critical,
}
