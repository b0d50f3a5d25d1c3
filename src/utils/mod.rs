//! # Utilities Module
//!
//! Grid arithmetic shared by the map, the state and the display.

pub mod math;

pub use math::*;
