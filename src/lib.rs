//! Core of a terminal "Doodle Jump" style platformer.
//!
//! The library holds plain game data (`entities`) and the functions that
//! advance it (`compute` and friends).  Everything that touches the terminal
//! lives in the binary.

pub mod assets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod platforms;
pub mod player;
pub mod scroll;

pub use error::{GameError, Result};
