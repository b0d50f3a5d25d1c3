//! # Generation Module
//!
//! Hand-authored layouts. A [`Layout`] is an ordered list of paint
//! operations replayed onto a fresh [`GameState`]; later operations paint
//! over earlier ones.

mod demo;

use crate::game::{CellType, GameState, Position};
use crate::{DungError, DungResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One step of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintOp {
    /// Straight line, both ends included
    Line {
        from: Position,
        to: Position,
        cell_type: CellType,
    },
    /// Box between opposite corners
    Box {
        from: Position,
        to: Position,
        cell_type: CellType,
        fill: bool,
    },
    /// Door in its default state
    Door { at: Position },
    /// Player start cell
    Player { at: Position },
}

impl PaintOp {
    /// Every position the operation names.
    fn anchors(&self) -> Vec<Position> {
        match self {
            PaintOp::Line { from, to, .. } | PaintOp::Box { from, to, .. } => vec![*from, *to],
            PaintOp::Door { at } | PaintOp::Player { at } => vec![*at],
        }
    }
}

/// An ordered set of paint operations for a grid of a given size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    /// Grid columns the layout was drawn for
    pub columns: usize,
    /// Grid rows the layout was drawn for
    pub rows: usize,
    pub ops: Vec<PaintOp>,
}

impl Layout {
    /// Creates an empty layout for a grid size.
    pub fn new(name: impl Into<String>, columns: usize, rows: usize) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
            ops: Vec::new(),
        }
    }

    /// Appends an operation, builder style.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{CellType, Layout, PaintOp, Position};
    ///
    /// let layout = Layout::new("corridor", 4, 4).with(PaintOp::Line {
    ///     from: Position::new(0, 1),
    ///     to: Position::new(3, 1),
    ///     cell_type: CellType::Path,
    /// });
    /// assert_eq!(layout.ops.len(), 1);
    /// ```
    pub fn with(mut self, op: PaintOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Checks that the layout fits the game state's grid.
    pub fn validate(&self, game_state: &GameState) -> DungResult<()> {
        let meta = &game_state.map.meta;
        if meta.columns != self.columns || meta.rows != self.rows {
            return Err(DungError::InvalidConfig(format!(
                "layout '{}' needs a {}x{} grid, map is {}x{}",
                self.name, self.columns, self.rows, meta.columns, meta.rows
            )));
        }

        for op in &self.ops {
            for anchor in op.anchors() {
                game_state.index_of(anchor)?;
            }
        }

        Ok(())
    }

    /// Validates, then replays every operation in order.
    pub fn apply(&self, game_state: &mut GameState) -> DungResult<()> {
        self.validate(game_state)?;

        for op in &self.ops {
            debug!("layout '{}': {:?}", self.name, op);
            match op {
                PaintOp::Line {
                    from,
                    to,
                    cell_type,
                } => game_state.draw_line(*from, *to, *cell_type)?,
                PaintOp::Box {
                    from,
                    to,
                    cell_type,
                    fill,
                } => game_state.draw_box(*from, *to, *cell_type, *fill)?,
                PaintOp::Door { at } => {
                    let index = game_state.index_of(*at)?;
                    game_state.place_door(index)?;
                }
                PaintOp::Player { at } => {
                    let index = game_state.index_of(*at)?;
                    game_state.move_player(index)?;
                }
            }
        }

        info!("layout '{}' applied ({} ops)", self.name, self.ops.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replays_in_order() {
        let mut game_state = GameState::for_testing(4, 4).unwrap();
        let layout = Layout::new("overlap", 4, 4)
            .with(PaintOp::Box {
                from: Position::new(0, 0),
                to: Position::new(3, 3),
                cell_type: CellType::Floor,
                fill: true,
            })
            .with(PaintOp::Line {
                from: Position::new(0, 2),
                to: Position::new(3, 2),
                cell_type: CellType::Wall,
            });

        layout.apply(&mut game_state).unwrap();
        assert_eq!(game_state.map.indices_of_type(CellType::Wall), vec![8, 9, 10, 11]);
        assert_eq!(game_state.map.indices_of_type(CellType::Floor).len(), 12);
    }

    #[test]
    fn test_rejects_wrong_grid_size() {
        let mut game_state = GameState::for_testing(4, 4).unwrap();
        let layout = Layout::new("big", 8, 8);
        assert!(matches!(
            layout.apply(&mut game_state),
            Err(DungError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_anchor_off_map_before_painting() {
        let mut game_state = GameState::for_testing(4, 4).unwrap();
        let layout = Layout::new("stray", 4, 4)
            .with(PaintOp::Line {
                from: Position::new(0, 0),
                to: Position::new(3, 0),
                cell_type: CellType::Wall,
            })
            .with(PaintOp::Door {
                at: Position::new(4, 0),
            });

        assert!(layout.apply(&mut game_state).is_err());
        assert!(game_state.map.indices_of_type(CellType::Wall).is_empty());
    }

    #[test]
    fn test_player_op_places_player() {
        let mut game_state = GameState::for_testing(4, 4).unwrap();
        Layout::new("start", 4, 4)
            .with(PaintOp::Player {
                at: Position::new(1, 1),
            })
            .apply(&mut game_state)
            .unwrap();
        assert_eq!(game_state.player.cell, Some(5));
    }
}
