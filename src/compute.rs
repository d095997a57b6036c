/// Per-tick game logic.
///
/// `tick` takes an immutable reference to the current `GameState` and
/// returns a brand-new one.  Side effects are limited to the injected RNG.
use rand::Rng;
use tracing::{debug, info};

use crate::collision::resolve_landing;
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, PlatformSet, Player, TickInput};
use crate::scroll::follow_player;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh session: centred resting player and a full set of platforms.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player::spawn(config),
        platforms: PlatformSet::initial(config, rng),
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  A state that is already over is
/// returned unchanged.
pub fn tick(
    state: &GameState,
    input: TickInput,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let mut player = state.player.clone();
    let mut platforms = state.platforms.clone();
    let frame = state.frame + 1;

    // ── 1. Gravity, steering, wrap ───────────────────────────────────────────
    player.tick(input, config);

    // ── 2. Landing ───────────────────────────────────────────────────────────
    if let Some(id) = resolve_landing(&mut player, &platforms, &config.physics) {
        debug!(frame, platform = id, "landed");
    }

    // ── 3. Camera ────────────────────────────────────────────────────────────
    follow_player(&mut player, &mut platforms, config);

    // ── 4. Cull and refill ───────────────────────────────────────────────────
    let removed = platforms.remove_offscreen(&mut player, config, rng);
    if removed > 0 {
        debug!(frame, removed, score = player.score, "platforms scrolled away");
    }
    platforms.ensure_minimum_count(config.layout.target_count, config, rng);

    // ── 5. Fell off the bottom? ──────────────────────────────────────────────
    let status = if player.body.top() > config.height {
        info!(frame, score = player.score, "player fell off the screen");
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        player,
        platforms,
        status,
        frame,
    }
}
