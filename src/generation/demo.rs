//! # Demo Layout
//!
//! The showcase room on the default 16×20 grid: a path, a walled floor room
//! with a door in its top wall, a pond and a lava pool.

use crate::game::{CellType, Position};
use crate::generation::{Layout, PaintOp};

const DEMO_COLUMNS: usize = 16;
const DEMO_ROWS: usize = 20;

/// Position of a row-major index on the demo grid.
fn at(index: usize) -> Position {
    Position::new(index % DEMO_COLUMNS, index / DEMO_COLUMNS)
}

impl Layout {
    /// The demo layout for the default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{GameState, Layout, Options};
    ///
    /// let mut game_state = GameState::new(Options::default(), 800.0, 600.0).unwrap();
    /// Layout::demo().apply(&mut game_state).unwrap();
    /// assert_eq!(game_state.player.cell, Some(18));
    /// ```
    pub fn demo() -> Self {
        let room_from = at(74);
        let room_to = at(116);

        Layout::new("demo", DEMO_COLUMNS, DEMO_ROWS)
            .with(PaintOp::Line {
                from: at(77),
                to: at(189),
                cell_type: CellType::Path,
            })
            .with(PaintOp::Box {
                from: room_from,
                to: room_to,
                cell_type: CellType::Floor,
                fill: true,
            })
            .with(PaintOp::Box {
                from: room_from,
                to: room_to,
                cell_type: CellType::Wall,
                fill: false,
            })
            .with(PaintOp::Box {
                from: at(147),
                to: at(203),
                cell_type: CellType::Water,
                fill: true,
            })
            .with(PaintOp::Box {
                from: at(246),
                to: at(301),
                cell_type: CellType::Lava,
                fill: true,
            })
            .with(PaintOp::Player { at: at(18) })
            .with(PaintOp::Door { at: at(71) })
    }
}
