use doodle_jump::compute::{init_state, tick};
use doodle_jump::config::GameConfig;
use doodle_jump::entities::TickInput;
use doodle_jump::game_loop::LoopState;
use doodle_jump::input::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn pressed_key_is_held_for_the_window() {
    let mut keys = KeyTracker::new();
    keys.record(InputEvent::KeyDown(Key::Left), 10);
    assert!(keys.is_pressed(Key::Left, 10));
    assert!(keys.is_pressed(Key::Left, 10 + HOLD_WINDOW));
    assert!(!keys.is_pressed(Key::Left, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_the_window() {
    let mut keys = KeyTracker::new();
    keys.record(InputEvent::KeyDown(Key::Right), 1);
    keys.record(InputEvent::KeyDown(Key::Right), 1 + HOLD_WINDOW);
    assert!(keys.is_pressed(Key::Right, 1 + 2 * HOLD_WINDOW));
}

#[test]
fn release_drops_key_immediately() {
    let mut keys = KeyTracker::new();
    keys.record(InputEvent::KeyDown(Key::Left), 5);
    keys.record(InputEvent::KeyUp(Key::Left), 6);
    assert!(!keys.is_pressed(Key::Left, 6));
}

#[test]
fn unseen_key_is_not_pressed() {
    let keys = KeyTracker::new();
    assert!(!keys.is_pressed(Key::Right, 0));
}

#[test]
fn steering_follows_held_direction() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.steering(1), TickInput::None);

    keys.record(InputEvent::KeyDown(Key::Left), 1);
    assert_eq!(keys.steering(2), TickInput::Left);

    keys.record(InputEvent::KeyDown(Key::Right), 2);
    assert_eq!(keys.steering(3), TickInput::None); // both cancel out

    keys.record(InputEvent::KeyUp(Key::Left), 3);
    assert_eq!(keys.steering(3), TickInput::Right);

    keys.clear();
    assert_eq!(keys.steering(3), TickInput::None);
}

#[test]
fn held_key_expires_on_the_game_state_clock() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = init_state(&config, &mut rng);
    let mut keys = KeyTracker::new();

    // Pressed once on the first tick, never repeated
    keys.record(InputEvent::KeyDown(Key::Right), state.frame + 1);

    let mut steered = Vec::new();
    for _ in 0..HOLD_WINDOW + 2 {
        let input = keys.steering(state.frame + 1);
        steered.push(input);
        state = tick(&state, input, &config, &mut rng);
    }

    assert_eq!(state.frame, HOLD_WINDOW + 2);
    assert!(steered[..=HOLD_WINDOW as usize].iter().all(|&i| i == TickInput::Right));
    assert_eq!(steered[HOLD_WINDOW as usize + 1], TickInput::None);
}

// ── LoopState ─────────────────────────────────────────────────────────────────

#[test]
fn menu_starts_or_quits() {
    assert_eq!(LoopState::Menu.on_event(InputEvent::KeyDown(Key::Start)), LoopState::Playing);
    assert_eq!(LoopState::Menu.on_event(InputEvent::KeyDown(Key::Quit)), LoopState::Terminated);
    assert_eq!(LoopState::Menu.on_event(InputEvent::Quit), LoopState::Terminated);
    assert_eq!(LoopState::Menu.on_event(InputEvent::KeyDown(Key::Restart)), LoopState::Menu);
    assert_eq!(LoopState::Menu.on_event(InputEvent::KeyDown(Key::Left)), LoopState::Menu);
}

#[test]
fn playing_only_leaves_on_quit_or_game_over() {
    let p = LoopState::Playing;
    assert_eq!(p.on_event(InputEvent::KeyDown(Key::Left)), LoopState::Playing);
    assert_eq!(p.on_event(InputEvent::KeyDown(Key::Restart)), LoopState::Playing);
    assert_eq!(p.on_event(InputEvent::KeyUp(Key::Quit)), LoopState::Playing);
    assert_eq!(p.on_event(InputEvent::KeyDown(Key::Quit)), LoopState::Terminated);
    assert_eq!(p.on_session_over(), LoopState::GameOver);
}

#[test]
fn game_over_restarts_or_quits() {
    let g = LoopState::GameOver;
    assert_eq!(g.on_event(InputEvent::KeyDown(Key::Restart)), LoopState::Playing);
    assert_eq!(g.on_event(InputEvent::KeyDown(Key::Quit)), LoopState::Terminated);
    assert_eq!(g.on_event(InputEvent::KeyDown(Key::Start)), LoopState::GameOver);
    assert_eq!(g.on_session_over(), LoopState::GameOver);
}

#[test]
fn terminated_is_final() {
    let t = LoopState::Terminated;
    assert_eq!(t.on_event(InputEvent::KeyDown(Key::Start)), LoopState::Terminated);
    assert_eq!(t.on_event(InputEvent::KeyDown(Key::Restart)), LoopState::Terminated);
    assert_eq!(t.on_session_over(), LoopState::Terminated);
}
