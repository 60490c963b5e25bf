//! Per-unit, per-frame action executor.
//!
//! Pure functions that decide what one unit does this frame from its own
//! state and the positions of living enemies. No world dependency; the sim
//! applies the returned update and emits notifications afterwards.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use skirmish_core::components::Unit;
use skirmish_core::constants::*;
use skirmish_core::enums::{ActionKey, UnitType};
use skirmish_core::types::{clamp_to_stage, Vec2};

/// What a unit did this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    /// Dead units do nothing at all, not even cool down.
    Inert,
    /// Generic cooldown still running.
    CoolingDown,
    /// Ready but has no actions.
    Idle,
    Moved,
    /// Searched; `target` is the index into the enemy slice, if any.
    Searched { target: Option<usize> },
    /// Fired its weapon.
    Fired,
    /// Tried to attack while the weapon was cooling down. The cursor stays
    /// put so the attack is retried next frame.
    AttackDeferred,
}

impl ActionOutcome {
    /// Whether the action counts as taken and advances the cursor.
    pub fn is_taken(self) -> bool {
        matches!(
            self,
            ActionOutcome::Moved | ActionOutcome::Searched { .. } | ActionOutcome::Fired
        )
    }
}

/// The state a unit should have after this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitUpdate {
    pub position: Vec2,
    pub rotation: f64,
    pub action_index: usize,
    pub action_cooldown: u32,
    pub attack_cooldown: u32,
    pub outcome: ActionOutcome,
}

impl UnitUpdate {
    fn unchanged(unit: &Unit, outcome: ActionOutcome) -> Self {
        Self {
            position: unit.position,
            rotation: unit.rotation,
            action_index: unit.action_index,
            action_cooldown: unit.action_cooldown,
            attack_cooldown: unit.attack_cooldown,
            outcome,
        }
    }
}

/// Evaluate one frame for one unit.
///
/// `enemies` holds the positions of the opposing side's living units in
/// roster order.
pub fn evaluate(unit: &Unit, enemies: &[Vec2]) -> UnitUpdate {
    if !unit.is_alive() {
        return UnitUpdate::unchanged(unit, ActionOutcome::Inert);
    }

    // Both counters tick down in parallel; a counter that reaches zero on
    // this frame lets the unit act on this frame.
    let mut update = UnitUpdate::unchanged(unit, ActionOutcome::CoolingDown);
    update.action_cooldown = unit.action_cooldown.saturating_sub(1);
    update.attack_cooldown = unit.attack_cooldown.saturating_sub(1);

    if update.action_cooldown > 0 {
        return update;
    }

    let Some(&action) = unit.actions.get(unit.action_index) else {
        update.outcome = ActionOutcome::Idle;
        return update;
    };

    match action {
        ActionKey::SearchEnemy => {
            let target = nearest(unit.position, enemies);
            if let Some(i) = target {
                let delta = enemies[i] - unit.position;
                update.rotation = delta.y.atan2(delta.x);
            }
            update.action_cooldown = SEARCH_COOLDOWN_FRAMES;
            update.outcome = ActionOutcome::Searched { target };
        }
        ActionKey::Attack => {
            if update.attack_cooldown > 0 {
                update.outcome = ActionOutcome::AttackDeferred;
                return update;
            }
            update.attack_cooldown = unit.spec.cooldown_frames;
            update.action_cooldown = if unit.unit_type == UnitType::Sniper {
                SNIPER_STUN_FRAMES
            } else {
                ATTACK_COOLDOWN_FRAMES
            };
            update.outcome = ActionOutcome::Fired;
        }
        movement => {
            if let Some(delta) = move_delta(movement, unit.rotation) {
                update.position += delta;
            }
            update.action_cooldown = MOVE_COOLDOWN_FRAMES;
            update.outcome = ActionOutcome::Moved;
        }
    }

    update.position = clamp_to_stage(update.position);
    update.action_index = (unit.action_index + 1) % unit.actions.len();
    update
}

/// Displacement for a move symbol, or `None` for non-move symbols.
///
/// The four cardinal moves are relative to the facing. The four diagonal
/// moves are fixed screen directions regardless of facing.
pub fn move_delta(action: ActionKey, rotation: f64) -> Option<Vec2> {
    let diagonal = MOVE_SPEED / SQRT_2;
    let delta = match action {
        ActionKey::MoveForward => MOVE_SPEED * Vec2::from_angle(rotation),
        ActionKey::MoveBackward => MOVE_SPEED * Vec2::from_angle(rotation + PI),
        ActionKey::MoveRight => MOVE_SPEED * Vec2::from_angle(rotation + FRAC_PI_2),
        ActionKey::MoveLeft => MOVE_SPEED * Vec2::from_angle(rotation - FRAC_PI_2),
        ActionKey::MoveTopRight => Vec2::new(diagonal, -diagonal),
        ActionKey::MoveTopLeft => Vec2::new(-diagonal, -diagonal),
        ActionKey::MoveBottomRight => Vec2::new(diagonal, diagonal),
        ActionKey::MoveBottomLeft => Vec2::new(-diagonal, diagonal),
        ActionKey::SearchEnemy | ActionKey::Attack => return None,
    };
    Some(delta)
}

/// Index of the closest position. Ties go to the earliest entry.
pub fn nearest(from: Vec2, candidates: &[Vec2]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, pos) in candidates.iter().enumerate() {
        let dist = from.distance(*pos);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}
