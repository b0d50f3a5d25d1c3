//! # Dung
//!
//! A small tile-map dungeon prototype: a grid of glyph cells, animated water
//! and lava, doors with state, and a single player token.
//!
//! ## Architecture Overview
//!
//! - **Game**: cells, the map grid and its paint operations, the player, the
//!   action table, frame stepping and the central [`GameState`]
//! - **Generation**: hand-authored layouts expressed as paint operations
//! - **Input**: keyboard mapping to player intents
//! - **Rendering**: macroquad display of the grid
//!
//! Everything under `game` and `generation` is window-agnostic and can be
//! driven directly from tests.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Dung engine.
#[derive(thiserror::Error, Debug)]
pub enum DungError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Options are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A cell coordinate or index lies outside the map
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Dung codebase.
pub type DungResult<T> = Result<T, DungError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default map width in pixels
    pub const DEFAULT_MAP_WIDTH: u32 = 400;

    /// Default map height in pixels
    pub const DEFAULT_MAP_HEIGHT: u32 = 500;

    /// Default edge length of one cell in pixels
    pub const DEFAULT_BLOCK_SIZE: u32 = 25;

    /// Default glyph size relative to the block size
    pub const DEFAULT_FONT_SCALE: f32 = 1.0;

    /// Glyph scale used while the debug overlay is on
    pub const DEBUG_FONT_SCALE: f32 = 0.5;

    /// Frames per second target for animation stepping
    pub const TARGET_FPS: u32 = 30;

    /// Seed used when none is supplied
    pub const DEFAULT_SEED: u64 = 12345;
}
