use jaguar_hunt::compute::*;
use jaguar_hunt::entities::*;
use jaguar_hunt::InputState;

fn held(left: bool, right: bool, up: bool, down: bool) -> InputState {
    InputState { left, right, up, down }
}

fn idle() -> InputState {
    InputState::default()
}

// ── Player::new ───────────────────────────────────────────────────────────────

#[test]
fn new_player_start_position() {
    let p = Player::new();
    assert_eq!(p.x, 100.0);
    assert_eq!(p.y, 350.0); // FIELD_HEIGHT / 2
    assert_eq!(p.speed, 6.0);
    assert_eq!(p.facing, Facing::Right);
    assert_eq!(p.pounce_state(), PounceState::Ready);
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn move_left_sets_facing() {
    let mut p = Player::new();
    p.update(&held(true, false, false, false));
    assert_eq!(p.x, 94.0);
    assert_eq!(p.facing, Facing::Left);
}

#[test]
fn move_right_sets_facing() {
    let mut p = Player::new();
    p.facing = Facing::Left;
    p.update(&held(false, true, false, false));
    assert_eq!(p.x, 106.0);
    assert_eq!(p.facing, Facing::Right);
}

#[test]
fn vertical_move_keeps_facing() {
    let mut p = Player::new();
    p.facing = Facing::Left;
    p.update(&held(false, false, true, false));
    assert_eq!(p.y, 344.0);
    assert_eq!(p.facing, Facing::Left);
    p.update(&held(false, false, false, true));
    assert_eq!(p.y, 350.0);
}

#[test]
fn diagonal_is_not_normalised() {
    let mut p = Player::new();
    p.update(&held(false, true, false, true));
    assert_eq!(p.x, 106.0);
    assert_eq!(p.y, 356.0);
}

#[test]
fn right_wins_over_left_and_down_over_up() {
    let mut p = Player::new();
    p.update(&held(true, true, true, true));
    assert_eq!(p.x, 106.0);
    assert_eq!(p.y, 356.0);
    assert_eq!(p.facing, Facing::Right);
}

#[test]
fn no_input_no_movement() {
    let mut p = Player::new();
    p.update(&idle());
    assert_eq!((p.x, p.y), (100.0, 350.0));
}

#[test]
fn clamps_at_left_and_top() {
    let mut p = Player::new();
    p.x = 2.0;
    p.y = 52.0;
    p.update(&held(true, false, true, false));
    assert_eq!(p.x, PLAYER_MIN_X);
    assert_eq!(p.y, PLAYER_MIN_Y);
    assert_eq!(PLAYER_MIN_Y, 50.0);
}

#[test]
fn clamps_at_right_and_bottom() {
    let mut p = Player::new();
    p.x = 938.0;
    p.y = 598.0;
    p.update(&held(false, true, false, true));
    assert_eq!(p.x, 940.0); // 1000 - 60
    assert_eq!(p.y, 600.0); // 700 - 50 - 50
    assert_eq!(PLAYER_MAX_X, 940.0);
    assert_eq!(PLAYER_MAX_Y, 600.0);
}

// ── Pounce ────────────────────────────────────────────────────────────────────

#[test]
fn pounce_timeline() {
    let mut p = Player::new();
    assert!(p.pounce());
    assert_eq!(p.pounce_timer, 15);
    assert_eq!(p.pounce_cooldown, 30);

    for frame in 0..15 {
        assert_eq!(p.pounce_state(), PounceState::Active, "frame {}", frame);
        p.update(&idle());
    }
    for frame in 15..30 {
        assert_eq!(p.pounce_state(), PounceState::Cooldown, "frame {}", frame);
        p.update(&idle());
    }
    assert_eq!(p.pounce_state(), PounceState::Ready);
    assert!(p.pounce());
}

#[test]
fn pounce_rejected_while_active_or_cooling() {
    let mut p = Player::new();
    assert!(p.pounce());
    assert!(!p.pounce());
    assert_eq!(p.pounce_timer, 15); // rejected pounce changes nothing

    for _ in 0..20 {
        p.update(&idle());
    }
    assert_eq!(p.pounce_state(), PounceState::Cooldown);
    assert!(!p.pounce());
    assert_eq!(p.pounce_cooldown, 10);
}

#[test]
fn cooldown_fraction_tracks_recovery() {
    let mut p = Player::new();
    assert_eq!(p.cooldown_fraction(), 1.0);
    p.pounce();
    assert_eq!(p.cooldown_fraction(), 0.0);
    for _ in 0..15 {
        p.update(&idle());
    }
    assert!((p.cooldown_fraction() - 0.5).abs() < 1e-6);
}

// ── Creatures ─────────────────────────────────────────────────────────────────

#[test]
fn prey_move_left_by_own_speed() {
    let mut prey = vec![
        Prey { x: 500.0, y: 200.0, kind: PreyKind::Rabbit, speed: 2.5 },
        Prey { x: 500.0, y: 300.0, kind: PreyKind::Deer, speed: 4.0 },
    ];
    advance_prey(&mut prey);
    assert_eq!(prey[0].x, 497.5);
    assert_eq!(prey[1].x, 496.0);
}

#[test]
fn prey_despawn_past_left_edge() {
    // -47 → -50 is kept, -48 → -51 is gone
    let mut prey = vec![
        Prey { x: -47.0, y: 200.0, kind: PreyKind::Rabbit, speed: 3.0 },
        Prey { x: -48.0, y: 200.0, kind: PreyKind::Monkey, speed: 3.0 },
    ];
    advance_prey(&mut prey);
    assert_eq!(prey.len(), 1);
    assert_eq!(prey[0].kind, PreyKind::Rabbit);
}

#[test]
fn obstacles_despawn_further_out() {
    let mut trees = vec![
        Obstacle { x: -55.0, y: 200.0, speed: 3.0 }, // → -58 kept
        Obstacle { x: -58.0, y: 200.0, speed: 3.0 }, // → -61 gone
    ];
    advance_obstacles(&mut trees);
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].x, -58.0);
}
