#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI, SQRT_2};

    use skirmish_core::components::{unit_spec, Unit};
    use skirmish_core::constants::*;
    use skirmish_core::enums::*;
    use skirmish_core::events::Notification;
    use skirmish_core::types::{UnitId, Vec2};

    use crate::executor::{evaluate, move_delta, nearest, ActionOutcome};
    use crate::profiles::opponent_actions;
    use crate::volley::{fire, muzzle_notification};

    use skirmish_core::enums::ActionKey::*;

    const EPS: f64 = 1e-9;

    fn make_unit(unit_type: UnitType, x: f64, y: f64, rotation: f64, actions: &[ActionKey]) -> Unit {
        let spec = unit_spec(unit_type);
        Unit {
            id: UnitId {
                side: Side::Player,
                slot: 0,
            },
            unit_type,
            position: Vec2::new(x, y),
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

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.distance(b) < EPS, "{a:?} != {b:?}");
    }

    // ---- Movement ----

    #[test]
    fn test_move_forward_follows_facing() {
        let unit = make_unit(UnitType::Cannon, 100.0, 200.0, 0.0, &[MoveForward]);
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Moved);
        assert_close(update.position, Vec2::new(125.0, 200.0));
        assert_eq!(update.action_cooldown, MOVE_COOLDOWN_FRAMES);
    }

    #[test]
    fn test_cardinal_moves_are_relative_to_facing() {
        // Facing up the stage (-y).
        let rotation = -FRAC_PI_2;
        assert_close(move_delta(MoveForward, rotation).unwrap(), Vec2::new(0.0, -MOVE_SPEED));
        assert_close(move_delta(MoveBackward, rotation).unwrap(), Vec2::new(0.0, MOVE_SPEED));
        assert_close(move_delta(MoveRight, rotation).unwrap(), Vec2::new(MOVE_SPEED, 0.0));
        assert_close(move_delta(MoveLeft, rotation).unwrap(), Vec2::new(-MOVE_SPEED, 0.0));
    }

    #[test]
    fn test_diagonal_moves_ignore_facing() {
        let d = MOVE_SPEED / SQRT_2;
        for rotation in [0.0, 1.0, -2.5, PI] {
            assert_close(move_delta(MoveTopRight, rotation).unwrap(), Vec2::new(d, -d));
            assert_close(move_delta(MoveTopLeft, rotation).unwrap(), Vec2::new(-d, -d));
            assert_close(move_delta(MoveBottomRight, rotation).unwrap(), Vec2::new(d, d));
            assert_close(move_delta(MoveBottomLeft, rotation).unwrap(), Vec2::new(-d, d));
        }
        assert!((move_delta(MoveTopLeft, 0.0).unwrap().length() - MOVE_SPEED).abs() < EPS);
    }

    #[test]
    fn test_non_move_symbols_have_no_delta() {
        assert!(move_delta(SearchEnemy, 0.0).is_none());
        assert!(move_delta(Attack, 0.0).is_none());
    }

    #[test]
    fn test_move_is_clamped_to_stage() {
        let unit = make_unit(UnitType::Gatling, 20.0, 20.0, PI, &[MoveForward]);
        let update = evaluate(&unit, &[]);
        assert_close(update.position, Vec2::new(UNIT_SIZE / 2.0, 20.0));
    }

    // ---- Cooldown gating ----

    #[test]
    fn test_generic_cooldown_blocks_action() {
        let mut unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.0, &[MoveForward]);
        unit.action_cooldown = 3;
        unit.attack_cooldown = 7;
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::CoolingDown);
        assert_eq!(update.action_cooldown, 2);
        assert_eq!(update.attack_cooldown, 6, "weapon cools in parallel");
        assert_eq!(update.position, unit.position);
        assert_eq!(update.action_index, 0);
    }

    #[test]
    fn test_cooldown_reaching_zero_acts_same_frame() {
        let mut unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.0, &[MoveForward]);
        unit.action_cooldown = 1;
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Moved);
    }

    #[test]
    fn test_empty_action_list_is_idle() {
        let unit = make_unit(UnitType::Sniper, 100.0, 100.0, 0.3, &[]);
        let update = evaluate(&unit, &[Vec2::new(0.0, 0.0)]);
        assert_eq!(update.outcome, ActionOutcome::Idle);
        assert_eq!(update.position, unit.position);
        assert_eq!(update.rotation, unit.rotation);
        assert_eq!(update.action_index, 0);
    }

    #[test]
    fn test_dead_unit_is_inert() {
        let mut unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.0, &[MoveForward]);
        unit.hp = 0;
        unit.action_cooldown = 4;
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Inert);
        assert_eq!(update.action_cooldown, 4);
    }

    // ---- Cursor ----

    #[test]
    fn test_cursor_wraps() {
        let mut unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.0, &[MoveLeft, MoveRight, MoveLeft]);
        unit.action_index = 2;
        let update = evaluate(&unit, &[]);
        assert_eq!(update.action_index, 0);
    }

    // ---- Search ----

    #[test]
    fn test_search_faces_nearest_enemy() {
        let unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.0, &[SearchEnemy]);
        let enemies = [Vec2::new(100.0, 300.0), Vec2::new(100.0, 50.0)];
        let update = evaluate(&unit, &enemies);
        assert_eq!(update.outcome, ActionOutcome::Searched { target: Some(1) });
        assert!((update.rotation - (-FRAC_PI_2)).abs() < EPS);
        assert_eq!(update.action_cooldown, SEARCH_COOLDOWN_FRAMES);
        assert_eq!(update.position, unit.position);
    }

    #[test]
    fn test_search_tie_goes_to_first() {
        let enemies = [Vec2::new(150.0, 100.0), Vec2::new(50.0, 100.0)];
        assert_eq!(nearest(Vec2::new(100.0, 100.0), &enemies), Some(0));
    }

    #[test]
    fn test_search_without_enemies_still_counts() {
        let unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.7, &[SearchEnemy, Attack]);
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Searched { target: None });
        assert!(update.outcome.is_taken());
        assert_eq!(update.rotation, 0.7);
        assert_eq!(update.action_index, 1);
    }

    // ---- Attack ----

    #[test]
    fn test_attack_fires_and_sets_cooldowns() {
        let unit = make_unit(UnitType::Cannon, 100.0, 100.0, 0.0, &[Attack, MoveLeft]);
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Fired);
        assert_eq!(update.attack_cooldown, unit_spec(UnitType::Cannon).cooldown_frames);
        assert_eq!(update.action_cooldown, ATTACK_COOLDOWN_FRAMES);
        assert_eq!(update.action_index, 1);
    }

    #[test]
    fn test_sniper_is_stunned_after_firing() {
        let unit = make_unit(UnitType::Sniper, 100.0, 100.0, 0.0, &[Attack]);
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Fired);
        assert_eq!(update.action_cooldown, SNIPER_STUN_FRAMES);
        assert_eq!(update.attack_cooldown, 150);
    }

    #[test]
    fn test_attack_on_cooldown_is_deferred() {
        let mut unit = make_unit(UnitType::Gatling, 100.0, 100.0, 0.0, &[MoveLeft, Attack]);
        unit.action_index = 1;
        unit.attack_cooldown = 5;
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::AttackDeferred);
        assert!(!update.outcome.is_taken());
        assert_eq!(update.action_index, 1);
        assert_eq!(update.attack_cooldown, 4);
        assert_eq!(update.action_cooldown, 0);
    }

    #[test]
    fn test_attack_fires_when_weapon_reaches_zero() {
        let mut unit = make_unit(UnitType::Gatling, 100.0, 100.0, 0.0, &[Attack]);
        unit.attack_cooldown = 1;
        let update = evaluate(&unit, &[]);
        assert_eq!(update.outcome, ActionOutcome::Fired);
    }

    // ---- Volleys ----

    #[test]
    fn test_straight_volley() {
        let unit = make_unit(UnitType::Cannon, 100.0, 100.0, FRAC_PI_2, &[Attack]);
        let shots = fire(&unit);
        assert_eq!(shots.len(), 1);
        let p = &shots[0];
        assert_close(p.velocity, Vec2::new(0.0, 10.0));
        assert_eq!(p.damage, 40);
        assert_eq!(p.radius, STRAIGHT_PROJECTILE_RADIUS);
        assert_eq!(p.origin, unit.position);
        assert_eq!(p.max_travel, Some(200.0));
        assert!(p.trap.is_none());
        assert_eq!(p.owner, unit.id);
    }

    #[test]
    fn test_scatter_volley_fans_evenly() {
        let unit = make_unit(UnitType::Gatling, 100.0, 100.0, 0.0, &[Attack]);
        let shots = fire(&unit);
        assert_eq!(shots.len(), SCATTER_COUNT);

        let angles: Vec<f64> = shots.iter().map(|p| p.velocity.y.atan2(p.velocity.x)).collect();
        let expected = [-FRAC_PI_8, -FRAC_PI_8 / 2.0, 0.0, FRAC_PI_8 / 2.0, FRAC_PI_8];
        for (got, want) in angles.iter().zip(expected) {
            assert!((got - want).abs() < EPS, "{got} vs {want}");
        }
        for p in &shots {
            assert!((p.velocity.length() - 5.0).abs() < EPS);
            assert_eq!(p.damage, 8);
            assert_eq!(p.radius, SCATTER_PROJECTILE_RADIUS);
        }
    }

    #[test]
    fn test_trap_volley_defers_damage() {
        let unit = make_unit(UnitType::TrapCannon, 100.0, 100.0, 0.0, &[Attack]);
        let shots = fire(&unit);
        assert_eq!(shots.len(), 1);
        let shell = &shots[0];
        assert_eq!(shell.damage, 0);
        let payload = shell.trap.expect("trap shell carries a payload");
        assert_eq!(payload.damage, 20);
        assert_eq!(payload.radius, TRAP_RADIUS);
        assert_eq!(payload.duration_frames, TRAP_DURATION_FRAMES);
        assert_eq!(shell.max_travel, Some(100.0));
    }

    #[test]
    fn test_sniper_volley_is_fastest() {
        let unit = make_unit(UnitType::Sniper, 100.0, 100.0, 0.0, &[Attack]);
        let shots = fire(&unit);
        assert_eq!(shots.len(), 1);
        assert!((shots[0].velocity.length() - 20.0).abs() < EPS);
        assert_eq!(shots[0].radius, SNIPER_PROJECTILE_RADIUS);
    }

    #[test]
    fn test_muzzle_notifications() {
        let cannon = make_unit(UnitType::Cannon, 0.0, 0.0, 0.0, &[]);
        let gatling = make_unit(UnitType::Gatling, 0.0, 0.0, 0.0, &[]);
        let sniper = make_unit(UnitType::Sniper, 0.0, 0.0, 0.0, &[]);
        let trap = make_unit(UnitType::TrapCannon, 0.0, 0.0, 0.0, &[]);
        assert_eq!(muzzle_notification(&cannon), Some(Notification::Attack { unit: cannon.id }));
        assert_eq!(muzzle_notification(&gatling), Some(Notification::Attack { unit: gatling.id }));
        assert_eq!(
            muzzle_notification(&sniper),
            Some(Notification::SniperShot { unit: sniper.id })
        );
        assert_eq!(muzzle_notification(&trap), None);
    }

    // ---- Profiles ----

    #[test]
    fn test_opponent_profiles_fit_action_limit() {
        for unit_type in UnitType::ALL {
            let actions = opponent_actions(unit_type);
            assert!(!actions.is_empty());
            assert!(actions.len() <= MAX_ACTIONS, "{unit_type:?}");
            assert!(actions.contains(&Attack), "{unit_type:?} never attacks");
        }
        assert_eq!(opponent_actions(UnitType::Sniper)[0], SearchEnemy);
        assert_eq!(opponent_actions(UnitType::Cannon).len(), 7);
    }
}
