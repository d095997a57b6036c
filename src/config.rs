/// Tuning constants and command-line configuration.
///
/// World coordinates are abstract "units" with the origin at the top-left
/// corner and y growing downward.  The renderer scales them to whatever
/// terminal size is available.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{GameError, Result};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_WIDTH: f32 = 400.0;
pub const DEFAULT_HEIGHT: f32 = 600.0;
pub const DEFAULT_TICK_RATE: u32 = 60;
pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const DEFAULT_JUMP_IMPULSE: f32 = -15.0;
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
pub const DEFAULT_PLATFORM_COUNT: usize = 10;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "doodle_jump", version, about = "Jump from platform to platform in your terminal")]
pub struct Cli {
    /// World width in units.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f32,

    /// World height in units.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f32,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    pub tick_rate: u32,

    /// Downward acceleration in units per tick².
    #[arg(long, default_value_t = DEFAULT_GRAVITY)]
    pub gravity: f32,

    /// Seed for platform placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with custom sprite glyphs.
    #[arg(long, value_name = "FILE")]
    pub sprites: Option<PathBuf>,

    /// Write diagnostics to this file (filtered by RUST_LOG).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

// ── Game configuration ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    /// Velocity set by a jump.  Negative means upward.
    pub jump_impulse: f32,
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            move_speed: DEFAULT_MOVE_SPEED,
            player_width: 30.0,
            player_height: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformLayout {
    pub target_count: usize,
    pub width: f32,
    pub height: f32,
    /// Vertical gap to the next platform above, drawn from `min_gap..=max_gap`.
    pub min_gap: f32,
    pub max_gap: f32,
}

impl Default for PlatformLayout {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_PLATFORM_COUNT,
            width: 60.0,
            height: 10.0,
            min_gap: 50.0,
            max_gap: 80.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub tick_rate: u32,
    pub physics: Physics,
    pub layout: PlatformLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate: DEFAULT_TICK_RATE,
            physics: Physics::default(),
            layout: PlatformLayout::default(),
        }
    }
}

impl GameConfig {
    /// Build a validated configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = GameConfig {
            width: cli.width,
            height: cli.height,
            tick_rate: cli.tick_rate,
            physics: Physics {
                gravity: cli.gravity,
                ..Physics::default()
            },
            ..GameConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            ("width", self.width),
            ("height", self.height),
            ("gravity", self.physics.gravity),
            ("jump impulse", self.physics.jump_impulse),
            ("move speed", self.physics.move_speed),
            ("player width", self.physics.player_width),
            ("player height", self.physics.player_height),
            ("platform width", self.layout.width),
            ("platform height", self.layout.height),
            ("min gap", self.layout.min_gap),
            ("max gap", self.layout.max_gap),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GameError::InvalidConfig(format!("{name} must be finite, got {value}")));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "world size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.tick_rate == 0 {
            return Err(GameError::InvalidConfig("tick rate must be at least 1".into()));
        }
        if !(self.physics.gravity > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "gravity must be positive, got {}",
                self.physics.gravity
            )));
        }
        if !(self.physics.jump_impulse < 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "jump impulse must point upward (negative), got {}",
                self.physics.jump_impulse
            )));
        }
        if self.physics.player_width > self.width || self.layout.width > self.width {
            return Err(GameError::InvalidConfig(
                "player and platforms must fit inside the world width".into(),
            ));
        }
        if self.layout.target_count == 0 {
            return Err(GameError::InvalidConfig("platform count must be at least 1".into()));
        }
        if !(self.layout.min_gap > 0.0) || self.layout.min_gap > self.layout.max_gap {
            return Err(GameError::InvalidConfig(format!(
                "gap range {}..={} is empty or non-positive",
                self.layout.min_gap, self.layout.max_gap
            )));
        }
        // A gap the player can't jump across makes the run unwinnable.
        let reach = self.max_jump_height();
        if self.layout.max_gap >= reach {
            return Err(GameError::InvalidConfig(format!(
                "max platform gap {} is not below the jump height {:.1}",
                self.layout.max_gap, reach
            )));
        }
        Ok(())
    }

    /// Apex height of a jump from rest: v² / 2g.
    pub fn max_jump_height(&self) -> f32 {
        let v = self.physics.jump_impulse;
        v * v / (2.0 * self.physics.gravity)
    }

    /// Line the player may not rise past; the camera follows above it.
    pub fn scroll_threshold(&self) -> f32 {
        self.height / 4.0
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}
