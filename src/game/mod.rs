//! # Game Module
//!
//! Core grid state, cell definitions and the player.
//!
//! This module contains the building blocks of the prototype:
//! - Cell types, door states and animated objects
//! - The flat map grid with its line and box paint operations
//! - Frame stepping for animated cells and frame pacing
//! - The player token and the context-sensitive action
//! - Options and the central game state

pub mod actions;
pub mod animation;
pub mod cell;
pub mod clock;
pub mod map;
pub mod options;
pub mod player;
pub mod state;

pub use actions::*;
pub use animation::*;
pub use cell::*;
pub use clock::*;
pub use map::*;
pub use options::*;
pub use player::*;
pub use state::*;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
///
/// # Examples
///
/// ```
/// use dung::Position;
///
/// let pos = Position::new(3, 2);
/// assert_eq!(pos.column, 3);
/// assert_eq!(pos.row, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    /// Creates a new position from a column and a row.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the neighboring position one step in `direction`, or None when
    /// the step would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dc, dr) = direction.to_delta();
        let column = self.column.checked_add_signed(dc as isize)?;
        let row = self.row.checked_add_signed(dr as isize)?;
        Some(Position::new(column, row))
    }
}

/// Cardinal directions for movement and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Converts a direction to a `(column, row)` delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::Direction;
    ///
    /// assert_eq!(Direction::Up.to_delta(), (0, -1));
    /// ```
    pub fn to_delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Infers the direction of a straight line between two points.
    ///
    /// Points in the same column give UP when the line climbs and DOWN
    /// otherwise; points in the same row give LEFT or RIGHT the same way.
    /// Identical points count as DOWN. Anything diagonal has no direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{Direction, Position};
    ///
    /// let from = Position::new(4, 9);
    /// assert_eq!(Direction::between(from, Position::new(4, 2)), Some(Direction::Up));
    /// assert_eq!(Direction::between(from, Position::new(1, 9)), Some(Direction::Left));
    /// assert_eq!(Direction::between(from, Position::new(5, 5)), None);
    /// ```
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        if from.column == to.column {
            if from.row > to.row {
                Some(Direction::Up)
            } else {
                Some(Direction::Down)
            }
        } else if from.row == to.row {
            if from.column > to.column {
                Some(Direction::Left)
            } else {
                Some(Direction::Right)
            }
        } else {
            None
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        f.write_str(name)
    }
}
