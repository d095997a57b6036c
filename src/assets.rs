/// Sprite glyphs used by the renderer.
///
/// A built-in set is always available.  A custom set can be loaded from a
/// JSON file; any problem with that file is fatal.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteSet {
    /// Drawn once, centred on the player's column.
    pub player: String,
    /// Repeated across the platform's width.
    pub platform: char,
    /// Fills the play area behind everything else.
    pub background: char,
    /// Banner lines shown on the game-over screen.
    pub game_over: Vec<String>,
}

impl Default for SpriteSet {
    fn default() -> Self {
        SpriteSet {
            player: "◆".to_string(),
            platform: '▀',
            background: ' ',
            game_over: vec![
                "╔══════════════════╗".to_string(),
                "║    GAME  OVER    ║".to_string(),
                "╚══════════════════╝".to_string(),
            ],
        }
    }
}

impl SpriteSet {
    /// Built-in sprites when `path` is `None`, otherwise the file's contents.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(SpriteSet::default());
        };

        let raw = fs::read_to_string(path).map_err(|source| GameError::AssetRead {
            path: path.to_path_buf(),
            source,
        })?;
        let sprites: SpriteSet =
            serde_json::from_str(&raw).map_err(|source| GameError::AssetParse {
                path: path.to_path_buf(),
                source,
            })?;
        sprites.validate()?;
        info!(path = %path.display(), "loaded sprite set");
        Ok(sprites)
    }

    pub fn validate(&self) -> Result<()> {
        if self.player.trim().is_empty() {
            return Err(GameError::InvalidAsset("player sprite is empty".into()));
        }
        if self.platform.is_control() || self.platform == ' ' {
            return Err(GameError::InvalidAsset("platform glyph must be visible".into()));
        }
        if self.background.is_control() {
            return Err(GameError::InvalidAsset("background glyph is a control character".into()));
        }
        if self.game_over.is_empty() {
            return Err(GameError::InvalidAsset("game-over banner has no lines".into()));
        }
        Ok(())
    }
}
