use doodle_jump::config::GameConfig;
use doodle_jump::entities::*;

fn player_at(x: f32, y: f32) -> Player {
    Player {
        body: Entity::new(x, y, 30.0, 30.0),
        vel_y: 0.0,
        score: 0,
    }
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn spawn_is_centred_and_at_rest() {
    let config = GameConfig::default();
    let p = Player::spawn(&config);
    assert_eq!(p.body.x, 185.0); // (400 - 30) / 2
    assert_eq!(p.body.y, 285.0); // (600 - 30) / 2
    assert_eq!(p.vel_y, 0.0);
    assert_eq!(p.score, 0);
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn gravity_accumulates_each_tick() {
    let config = GameConfig::default();
    let mut p = player_at(100.0, 100.0);
    p.tick(TickInput::None, &config);
    assert_eq!(p.vel_y, 0.5);
    assert_eq!(p.body.y, 100.5);
    p.tick(TickInput::None, &config);
    assert_eq!(p.vel_y, 1.0);
    assert_eq!(p.body.y, 101.5);
}

#[test]
fn steering_moves_by_speed() {
    let config = GameConfig::default();
    let mut p = player_at(100.0, 100.0);
    p.tick(TickInput::Left, &config);
    assert_eq!(p.body.x, 95.0);
    p.tick(TickInput::Right, &config);
    p.tick(TickInput::Right, &config);
    assert_eq!(p.body.x, 105.0);
}

#[test]
fn wraps_to_left_edge_when_past_right() {
    let config = GameConfig::default();
    let mut p = player_at(380.0, 100.0); // right edge 410 > 400
    p.tick(TickInput::None, &config);
    assert_eq!(p.body.left(), 0.0);
}

#[test]
fn moving_right_over_the_edge_wraps() {
    let config = GameConfig::default();
    let mut p = player_at(370.0, 100.0);
    p.tick(TickInput::Right, &config); // right edge 405
    assert_eq!(p.body.left(), 0.0);
}

#[test]
fn wraps_to_right_edge_when_past_left() {
    let config = GameConfig::default();
    let mut p = player_at(2.0, 100.0);
    p.tick(TickInput::Left, &config); // left edge -3
    assert_eq!(p.body.right(), 400.0);
}

#[test]
fn exactly_at_edges_does_not_wrap() {
    let config = GameConfig::default();
    let mut p = player_at(370.0, 100.0); // right edge 400
    p.tick(TickInput::None, &config);
    assert_eq!(p.body.x, 370.0);

    let mut p = player_at(0.0, 100.0);
    p.tick(TickInput::None, &config);
    assert_eq!(p.body.x, 0.0);
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_resets_velocity_regardless_of_current() {
    let config = GameConfig::default();
    for v in [12.0, 0.0, -3.0, -40.0] {
        let mut p = player_at(0.0, 0.0);
        p.vel_y = v;
        p.jump(&config.physics);
        assert_eq!(p.vel_y, -15.0);
    }
}

#[test]
fn is_falling_only_for_positive_velocity() {
    let mut p = player_at(0.0, 0.0);
    assert!(!p.is_falling());
    p.vel_y = 0.1;
    assert!(p.is_falling());
    p.vel_y = -0.1;
    assert!(!p.is_falling());
}
