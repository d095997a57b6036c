use crate::config::Physics;
use crate::entities::{PlatformSet, Player};

/// Land a falling player on the first platform it overlaps.
///
/// Platforms are checked in creation order.  The landing only counts when
/// the player's bottom is within one tick of fall distance below the
/// platform, which filters out a player already tunnelled past it.  Returns
/// the id of the platform landed on.
pub fn resolve_landing(player: &mut Player, platforms: &PlatformSet, physics: &Physics) -> Option<u64> {
    if !player.is_falling() {
        return None;
    }

    let hit = platforms.iter().find(|p| player.body.intersects(&p.body))?;
    if player.body.bottom() > hit.body.bottom() + player.vel_y {
        return None;
    }

    player.body.set_bottom(hit.body.top());
    player.jump(physics);
    Some(hit.id)
}
