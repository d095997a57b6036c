/// Platform spawning and culling.
///
/// New platforms are always stacked above the current topmost one, so the
/// set extends upward as the camera scrolls.  Randomness comes through the
/// injected `rng` so callers control determinism.
use std::cmp::Ordering;

use rand::Rng;
use tracing::trace;

use crate::config::GameConfig;
use crate::entities::{Entity, Platform, PlatformSet, Player};

impl PlatformSet {
    /// Starting layout: one platform centred near the bottom, the rest
    /// stacked above it.
    pub fn initial(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let layout = &config.layout;
        let mut set = PlatformSet::default();
        set.push(Entity::new(
            (config.width - layout.width) / 2.0,
            config.height - layout.height * 2.0,
            layout.width,
            layout.height,
        ));
        set.ensure_minimum_count(layout.target_count, config, rng);
        set
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    /// Append a platform with the next creation id.
    pub fn push(&mut self, body: Entity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.platforms.push(Platform { id, body });
        id
    }

    /// Minimum y; ties go to the lower x, then the older platform.
    pub fn topmost(&self) -> Option<&Platform> {
        self.platforms.iter().min_by(|a, b| {
            a.body
                .y
                .partial_cmp(&b.body.y)
                .unwrap_or(Ordering::Equal)
                .then(a.body.x.partial_cmp(&b.body.x).unwrap_or(Ordering::Equal))
                .then(a.id.cmp(&b.id))
        })
    }

    /// Add one platform a random gap above the topmost one.  With an empty
    /// set the bottom of the screen is the reference.
    pub fn spawn_above(&mut self, config: &GameConfig, rng: &mut impl Rng) -> u64 {
        let layout = &config.layout;
        let reference_y = self.topmost().map(|p| p.body.y).unwrap_or(config.height);
        let gap = rng.gen_range(layout.min_gap..=layout.max_gap);
        let max_x = (config.width - layout.width).max(0.0);
        let x = rng.gen_range(0.0..=max_x);
        let id = self.push(Entity::new(x, reference_y - gap, layout.width, layout.height));
        trace!(id, x, y = reference_y - gap, "spawned platform");
        id
    }

    /// Spawn platforms until at least `target` are live.
    pub fn ensure_minimum_count(&mut self, target: usize, config: &GameConfig, rng: &mut impl Rng) {
        while self.platforms.len() < target {
            self.spawn_above(config, rng);
        }
    }

    /// Drop platforms whose top reached the bottom of the screen.  Each one
    /// scores a point and is replaced by a new platform on top.  Returns the
    /// number removed.
    pub fn remove_offscreen(
        &mut self,
        player: &mut Player,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> usize {
        let before = self.platforms.len();
        self.platforms.retain(|p| p.body.top() < config.height);
        let removed = before - self.platforms.len();

        for _ in 0..removed {
            player.score += 1;
            self.spawn_above(config, rng);
        }
        removed
    }
}
