//! # Display Management
//!
//! Draws the grid with macroquad: one centered glyph per cell, the player's
//! facing arrow layered over its glyph, and an optional debug overlay of
//! cell indices and outlines.

use crate::game::{Cell, GameState, Options};
use crate::rendering::{tint_color, UI};
use crate::{DungError, DungResult};
use log::info;
use macroquad::prelude::*;

/// Macroquad display manager for the grid.
pub struct MacroquadDisplay {
    /// Color behind the grid
    pub background: Color,
    /// Glyph size in pixels
    pub font_size: u16,
    /// Glyph scale relative to the block size outside debug mode
    pub font_scale: f32,
    /// Draw indices and outlines instead of glyphs
    pub debug: bool,
    /// Optional TrueType font with wider glyph coverage
    pub font: Option<Font>,
    /// Message log and controls line
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display from the options, loading the configured font.
    pub async fn new(options: &Options) -> DungResult<Self> {
        let font = match &options.font_path {
            Some(path) => {
                let path_str = path.to_str().ok_or_else(|| {
                    DungError::InvalidConfig(format!("font path {:?} is not UTF-8", path))
                })?;
                let font = load_ttf_font(path_str).await.map_err(|e| {
                    DungError::InvalidConfig(format!("failed to load font {}: {}", path_str, e))
                })?;
                info!("loaded font {}", path_str);
                Some(font)
            }
            None => None,
        };

        Ok(Self {
            background: tint_color(options.background),
            font_size: options.font_size().round() as u16,
            font_scale: options.font_scale,
            debug: options.debug,
            font,
            ui: UI::new(),
        })
    }

    /// Switches the debug overlay, adjusting the glyph size to match.
    pub fn toggle_debug(&mut self, block_size: u32) -> bool {
        self.debug = !self.debug;
        let scale = if self.debug {
            crate::config::DEBUG_FONT_SCALE
        } else {
            self.font_scale
        };
        self.font_size = (block_size as f32 * scale).round() as u16;
        self.debug
    }

    pub fn add_message(&mut self, message: String) {
        self.ui.add_message(message);
    }

    /// Renders the complete frame: background, every cell, then the UI.
    pub fn render_game(&self, game_state: &GameState) {
        clear_background(self.background);

        for cell in &game_state.map.cells {
            self.draw_cell(game_state, cell);
        }

        let meta = &game_state.map.meta;
        let below_map = meta.y_offset + meta.map_height as f32 + 10.0;
        self.ui.render(meta.x_offset, below_map);
    }

    /// Paints one cell over a cleared block.
    pub fn draw_cell(&self, game_state: &GameState, cell: &Cell) {
        let block = game_state.map.meta.block_size as f32;
        let (x, y) = game_state.map.cell_origin(cell);
        let center = (x + block / 2.0, y + block / 2.0);

        self.clear_cell(x, y, block);

        let appearance = cell.appearance(game_state.player.direction);

        if self.debug {
            let color = tint_color(appearance.tint);
            self.draw_glyph(&cell.index.to_string(), center, color);
            draw_rectangle_lines(x, y, block, block, 1.0, color);
            return;
        }

        self.draw_glyph(
            &appearance.glyph.to_string(),
            center,
            tint_color(appearance.tint),
        );

        if let Some((glyph, tint)) = appearance.layer {
            self.draw_glyph(&glyph.to_string(), center, tint_color(tint));
        }
    }

    /// Fills a block with the background, one pixel past each edge so
    /// antialiased glyph fringes are covered.
    pub fn clear_cell(&self, x: f32, y: f32, block: f32) {
        draw_rectangle(x - 1.0, y - 1.0, block + 2.0, block + 2.0, self.background);
    }

    fn draw_glyph(&self, text: &str, center: (f32, f32), color: Color) {
        let dimensions = measure_text(text, self.font.as_ref(), self.font_size, 1.0);
        let x = center.0 - dimensions.width / 2.0;
        let y = center.1 - dimensions.height / 2.0 + dimensions.offset_y;

        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: self.font_size,
                color,
                ..Default::default()
            },
        );
    }
}
