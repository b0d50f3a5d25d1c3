//! # Rendering Module
//!
//! macroquad drawing of the grid, plus the status line under it.

pub mod display;
pub mod palette;
pub mod ui;

pub use display::*;
pub use palette::*;
pub use ui::*;
