//! # Player
//!
//! The single movable token.

use crate::game::Direction;
use serde::{Deserialize, Serialize};

/// The player token: where it stands and which way it faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Index of the occupied cell, None until placed
    pub cell: Option<usize>,
    pub direction: Direction,
}

impl Player {
    /// Creates an unplaced player facing right.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_placed(&self) -> bool {
        self.cell.is_some()
    }

    /// Turns to face `direction`. Returns true if the facing changed.
    pub fn face(&mut self, direction: Direction) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        true
    }
}
