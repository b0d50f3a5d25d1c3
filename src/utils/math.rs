//! # Grid Mathematics
//!
//! Index and pixel arithmetic for the flat row-major grid.

use rand::Rng;

/// Row-major index of a cell.
///
/// # Examples
///
/// ```
/// use dung::grid_index;
///
/// assert_eq!(grid_index(4, 13, 16), 77);
/// ```
pub fn grid_index(row: usize, column: usize, columns: usize) -> usize {
    column + row * columns
}

/// Pixel x of a cell's left edge.
pub fn real_x(column: usize, block_size: u32, x_offset: f32) -> f32 {
    (column as f32 * block_size as f32) + x_offset
}

/// Pixel y of a cell's top edge.
pub fn real_y(row: usize, block_size: u32, y_offset: f32) -> f32 {
    (row as f32 * block_size as f32) + y_offset
}

/// Offsets that center a map of the given size on a screen.
///
/// Offsets never go negative, so a map larger than the screen is anchored
/// to the top-left corner.
///
/// # Examples
///
/// ```
/// use dung::map_placement;
///
/// assert_eq!(map_placement(800.0, 600.0, 400.0, 500.0), (200.0, 50.0));
/// assert_eq!(map_placement(300.0, 300.0, 400.0, 500.0), (0.0, 0.0));
/// ```
pub fn map_placement(
    screen_width: f32,
    screen_height: f32,
    map_width: f32,
    map_height: f32,
) -> (f32, f32) {
    let x_offset = (screen_width / 2.0) - (map_width / 2.0);
    let y_offset = (screen_height / 2.0) - (map_height / 2.0);
    (x_offset.max(0.0), y_offset.max(0.0))
}

/// Inclusive random integer between `from` and `to`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, from: usize, to: usize) -> usize {
    rng.gen_range(from..=to)
}
