//! Unit factory and roster setup.
//!
//! Builds both rosters at battle start: the player's from their
//! configuration, the opponent's from a seeded draw of archetypes.

use std::f64::consts::FRAC_PI_2;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::{unit_spec, Unit};
use skirmish_core::config::RosterConfig;
use skirmish_core::constants::*;
use skirmish_core::enums::{ActionKey, Side, UnitType};
use skirmish_core::types::{UnitId, Vec2};
use skirmish_orders::profiles::opponent_actions;

use crate::world::BattleWorld;

/// Build a fresh unit at full health with idle cooldowns.
///
/// The action list is copied, so later edits to the source config cannot
/// reach a running battle.
pub fn create_unit(
    id: UnitId,
    unit_type: UnitType,
    position: Vec2,
    rotation: f64,
    actions: &[ActionKey],
) -> Unit {
    let spec = unit_spec(unit_type);
    Unit {
        id,
        unit_type,
        position,
        rotation,
        hp: INITIAL_HP,
        max_hp: INITIAL_HP,
        color: spec.color,
        actions: actions.to_vec(),
        action_index: 0,
        action_cooldown: 0,
        attack_cooldown: 0,
        spec,
    }
}

/// Starting position and facing for a roster slot. Players start at the
/// bottom facing up; opponents at the top facing down.
pub fn spawn_pose(side: Side, slot: usize) -> (Vec2, f64) {
    let x = STAGE_WIDTH / 4.0 * (slot + 1) as f64;
    match side {
        Side::Player => (Vec2::new(x, STAGE_HEIGHT - SPAWN_INSET), -FRAC_PI_2),
        Side::Opponent => (Vec2::new(x, SPAWN_INSET), FRAC_PI_2),
    }
}

fn unit_id(side: Side, slot: usize) -> UnitId {
    UnitId {
        side,
        slot: slot as u8,
    }
}

/// Build the player roster. The configuration must already have passed
/// `RosterConfig::validate`; every unit in it is placed.
pub fn build_player_roster(roster: &RosterConfig) -> Vec<Unit> {
    roster
        .units
        .iter()
        .enumerate()
        .map(|(slot, config)| {
            let (position, rotation) = spawn_pose(Side::Player, slot);
            create_unit(
                unit_id(Side::Player, slot),
                config.unit_type,
                position,
                rotation,
                &config.actions,
            )
        })
        .collect()
}

/// Draw opponent archetypes without replacement.
pub fn draw_opponent_types(rng: &mut ChaCha8Rng) -> Vec<UnitType> {
    let mut types = UnitType::ALL;
    types.shuffle(rng);
    types[..MAX_ROSTER].to_vec()
}

/// Build an opponent roster for the given archetypes, each running its
/// fixed action profile.
pub fn build_opponent_roster(types: &[UnitType]) -> Vec<Unit> {
    types
        .iter()
        .enumerate()
        .map(|(slot, &unit_type)| {
            let (position, rotation) = spawn_pose(Side::Opponent, slot);
            create_unit(
                unit_id(Side::Opponent, slot),
                unit_type,
                position,
                rotation,
                opponent_actions(unit_type),
            )
        })
        .collect()
}

/// Set up a complete battle world from a validated roster.
pub fn setup_battle(roster: &RosterConfig, rng: &mut ChaCha8Rng) -> BattleWorld {
    let opponent_types = draw_opponent_types(rng);
    debug!(?opponent_types, "opponent roster drawn");
    BattleWorld::new(
        build_player_roster(roster),
        build_opponent_roster(&opponent_types),
    )
}
