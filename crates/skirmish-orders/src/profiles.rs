//! Hand-authored action sequences for opponent units.
//!
//! Opponents are not configurable; each archetype always runs the same
//! sequence.

use skirmish_core::enums::{ActionKey, UnitType};

use skirmish_core::enums::ActionKey::*;

const GATLING_ACTIONS: &[ActionKey] = &[MoveForward, MoveForward, SearchEnemy, Attack, MoveTopLeft];

const CANNON_ACTIONS: &[ActionKey] = &[
    MoveForward,
    SearchEnemy,
    Attack,
    MoveLeft,
    SearchEnemy,
    Attack,
    MoveForward,
];

const TRAP_CANNON_ACTIONS: &[ActionKey] = &[
    MoveForward,
    SearchEnemy,
    Attack,
    MoveLeft,
    SearchEnemy,
    Attack,
    SearchEnemy,
    Attack,
];

const SNIPER_ACTIONS: &[ActionKey] = &[
    SearchEnemy,
    Attack,
    MoveBackward,
    MoveRight,
    MoveRight,
    MoveLeft,
    MoveLeft,
    MoveRight,
    MoveLeft,
];

/// The action sequence an opponent of this archetype runs.
pub fn opponent_actions(unit_type: UnitType) -> &'static [ActionKey] {
    match unit_type {
        UnitType::Gatling => GATLING_ACTIONS,
        UnitType::Cannon => CANNON_ACTIONS,
        UnitType::TrapCannon => TRAP_CANNON_ACTIONS,
        UnitType::Sniper => SNIPER_ACTIONS,
    }
}
