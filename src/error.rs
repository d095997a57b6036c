use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

/// Everything that can stop the game.  Gameplay itself never fails; these
/// are all startup or terminal problems and are treated as fatal.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to read sprite file {}: {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sprite file {}: {source}", .path.display())]
    AssetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid sprite set: {0}")]
    InvalidAsset(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
