use crate::config::GameConfig;
use crate::entities::{PlatformSet, Player};

/// Camera follow.  Once the player's top reaches the scroll threshold it is
/// pinned there and the platforms move down by the player's speed instead.
/// Returns the distance the platforms moved.
pub fn follow_player(player: &mut Player, platforms: &mut PlatformSet, config: &GameConfig) -> f32 {
    let threshold = config.scroll_threshold();
    if player.body.top() > threshold {
        return 0.0;
    }

    player.body.set_top(threshold);
    let shift = player.vel_y.abs();
    for platform in &mut platforms.platforms {
        platform.body.y += shift;
    }
    shift
}
