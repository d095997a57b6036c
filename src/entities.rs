//! All game entity types: plain data plus geometry helpers.

// ── Shapes ────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world units.  `(x, y)` is the top-left corner
/// and y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Entity {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Entity { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Strict overlap test: rectangles that only share an edge don't intersect.
    pub fn intersects(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

// ── Player & platforms ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Entity,
    /// Positive while falling, negative while rising.
    pub vel_y: f32,
    /// One point per platform that scrolled off the bottom.
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    /// Creation sequence number; platforms are always iterated in this order.
    pub id: u64,
    pub body: Entity,
}

/// Live platforms in creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlatformSet {
    pub platforms: Vec<Platform>,
    pub next_id: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Horizontal intent for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickInput {
    #[default]
    None,
    Left,
    Right,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one session owns.  Cloneable so `compute::tick` can return a
/// new copy without touching the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub platforms: PlatformSet,
    pub status: GameStatus,
    pub frame: u64,
}
