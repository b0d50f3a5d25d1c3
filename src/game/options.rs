//! # Options
//!
//! Runtime configuration: map geometry, drawing scale, frame rate and debug
//! switches. Options load from JSON and are validated before a map is built.

use crate::config::{
    DEFAULT_BLOCK_SIZE, DEFAULT_FONT_SCALE, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, TARGET_FPS,
};
use crate::game::Tint;
use crate::{DungError, DungResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one run of the prototype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Color behind the grid
    pub background: Tint,
    /// Map width in pixels
    pub map_width: u32,
    /// Map height in pixels
    pub map_height: u32,
    /// Edge length of one cell in pixels
    pub block_size: u32,
    /// Glyph size relative to the block size
    pub font_scale: f32,
    /// Animation frames per second
    pub fps: u32,
    /// Show cell indices and outlines instead of glyphs
    pub debug: bool,
    /// Seed for random animation start steps
    pub seed: Option<u64>,
    /// TrueType font used for glyphs outside the default font
    pub font_path: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background: Tint::Black,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            block_size: DEFAULT_BLOCK_SIZE,
            font_scale: DEFAULT_FONT_SCALE,
            fps: TARGET_FPS,
            debug: false,
            seed: None,
            font_path: None,
        }
    }
}

impl Options {
    /// Creates options for a small map, handy in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::Options;
    ///
    /// let options = Options::for_testing(4, 3);
    /// assert_eq!(options.columns(), 4);
    /// assert_eq!(options.rows(), 3);
    /// ```
    pub fn for_testing(columns: u32, rows: u32) -> Self {
        Self {
            map_width: columns * DEFAULT_BLOCK_SIZE,
            map_height: rows * DEFAULT_BLOCK_SIZE,
            seed: Some(crate::config::DEFAULT_SEED),
            ..Self::default()
        }
    }

    /// Parses options from a JSON string. Missing fields take defaults.
    pub fn load_from_json(json: &str) -> DungResult<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> DungResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }

    pub fn save_to_json(&self) -> DungResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of grid columns these options produce.
    pub fn columns(&self) -> usize {
        (self.map_width / self.block_size.max(1)) as usize
    }

    /// Number of grid rows these options produce.
    pub fn rows(&self) -> usize {
        (self.map_height / self.block_size.max(1)) as usize
    }

    /// Glyph size in pixels, halved while debugging.
    pub fn font_size(&self) -> f32 {
        let scale = if self.debug {
            crate::config::DEBUG_FONT_SCALE
        } else {
            self.font_scale
        };
        self.block_size as f32 * scale
    }

    /// Checks that the options describe a drawable grid.
    pub fn validate(&self) -> DungResult<()> {
        if self.block_size == 0 {
            return Err(DungError::InvalidConfig(
                "block_size must be positive".to_string(),
            ));
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err(DungError::InvalidConfig(format!(
                "map size {}x{} must be non-zero",
                self.map_width, self.map_height
            )));
        }
        if self.map_width % self.block_size != 0 || self.map_height % self.block_size != 0 {
            return Err(DungError::InvalidConfig(format!(
                "map size {}x{} is not a multiple of block_size {}",
                self.map_width, self.map_height, self.block_size
            )));
        }
        if self.fps == 0 {
            return Err(DungError::InvalidConfig("fps must be positive".to_string()));
        }
        if self.font_scale.is_nan() || self.font_scale <= 0.0 {
            return Err(DungError::InvalidConfig(format!(
                "font_scale {} must be positive",
                self.font_scale
            )));
        }
        Ok(())
    }
}
