//! # Map
//!
//! The flat row-major grid of cells and its paint operations.
//!
//! Lines and boxes are rasterized directly over cell indices: a vertical run
//! strides by the column count, a horizontal run by one.

use crate::game::{Cell, CellType, Direction, Options, Position};
use crate::utils::{grid_index, map_placement, random_between, real_x, real_y};
use crate::{DungError, DungResult};
use log::{debug, trace};
use rand::Rng;

/// Geometry of a map and its placement on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMeta {
    pub block_count: usize,
    pub block_size: u32,
    pub rows: usize,
    pub columns: usize,
    pub x_offset: f32,
    pub y_offset: f32,
    pub parent_width: f32,
    pub parent_height: f32,
    pub map_width: u32,
    pub map_height: u32,
}

/// The grid of cells.
#[derive(Debug, Clone)]
pub struct Map {
    pub cells: Vec<Cell>,
    pub meta: MapMeta,
}

impl Map {
    /// Builds a GROUND-filled grid sized from the options and centered in a
    /// parent surface of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{Map, Options};
    ///
    /// let map = Map::new(&Options::default(), 800.0, 600.0).unwrap();
    /// assert_eq!(map.meta.columns, 16);
    /// assert_eq!(map.meta.rows, 20);
    /// assert_eq!(map.len(), 320);
    /// ```
    pub fn new(options: &Options, parent_width: f32, parent_height: f32) -> DungResult<Self> {
        options.validate()?;

        let columns = options.columns();
        let rows = options.rows();
        let block_count = rows * columns;

        let mut cells = Vec::with_capacity(block_count);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(row, column, columns));
            }
        }

        let (x_offset, y_offset) = map_placement(
            parent_width,
            parent_height,
            options.map_width as f32,
            options.map_height as f32,
        );

        let meta = MapMeta {
            block_count,
            block_size: options.block_size,
            rows,
            columns,
            x_offset,
            y_offset,
            parent_width,
            parent_height,
            map_width: options.map_width,
            map_height: options.map_height,
        };

        debug!("map initialized: {:?}", meta);

        Ok(Self { cells, meta })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Looks up a cell, reporting an error when the index is off the map.
    pub fn cell(&self, index: usize) -> DungResult<&Cell> {
        self.cells
            .get(index)
            .ok_or_else(|| self.index_out_of_bounds(index))
    }

    pub fn cell_mut(&mut self, index: usize) -> DungResult<&mut Cell> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or_else(|| DungError::OutOfBounds(format!("index {} (map has {})", index, len)))
    }

    /// Whether a position lies on the grid.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.column < self.meta.columns && position.row < self.meta.rows
    }

    /// Index of the cell at a position.
    pub fn index_of(&self, position: Position) -> DungResult<usize> {
        if !self.in_bounds(position) {
            return Err(DungError::OutOfBounds(format!(
                "column {}, row {} (map is {}x{})",
                position.column, position.row, self.meta.columns, self.meta.rows
            )));
        }
        Ok(grid_index(position.row, position.column, self.meta.columns))
    }

    /// Position of the cell at an index.
    pub fn position_of(&self, index: usize) -> DungResult<Position> {
        self.cell(index).map(Cell::position)
    }

    /// Index of the neighbor one step in `direction`, or None at the edge.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let position = self.cells.get(index)?.position();

        match position.step(direction) {
            Some(next) if self.in_bounds(next) => {
                Some(grid_index(next.row, next.column, self.meta.columns))
            }
            _ => {
                trace!("edge: no cell {} of {}", direction, index);
                None
            }
        }
    }

    /// Pixel coordinates of a cell's top-left corner.
    pub fn cell_origin(&self, cell: &Cell) -> (f32, f32) {
        (
            real_x(cell.column, self.meta.block_size, self.meta.x_offset),
            real_y(cell.row, self.meta.block_size, self.meta.y_offset),
        )
    }

    /// Paints one cell with a type.
    ///
    /// Animated types get their counters primed, stateful types their
    /// default state. Painting anything else drops stale state and
    /// animation. While an animated object plays, only the type and state
    /// change.
    pub fn set_cell<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        cell_type: CellType,
        rng: &mut R,
    ) -> DungResult<()> {
        let cell = self.cell_mut(index)?;
        cell.cell_type = cell_type;
        cell.state = cell_type.default_state();

        // A running object keeps its own step and counter; the type's
        // animation is primed when the object is removed.
        if cell.animated_object.is_some() {
            return Ok(());
        }

        cell.frame_glyph = None;
        match cell_type.animation() {
            Some(spec) => {
                cell.animation_step_counter = spec.frames_per_step;
                cell.is_animated = true;
                cell.animation_step = if spec.start_on_random_step {
                    random_between(rng, 0, spec.len() - 1)
                } else {
                    0
                };
            }
            None => {
                cell.is_animated = false;
                cell.animation_step = 0;
                cell.animation_step_counter = 0;
            }
        }

        Ok(())
    }

    /// Paints a straight line between two points, both ends included.
    ///
    /// # Errors
    ///
    /// Returns [`DungError::InvalidAction`] for a diagonal request and
    /// [`DungError::OutOfBounds`] when an end lies off the map.
    pub fn draw_line<R: Rng + ?Sized>(
        &mut self,
        from: Position,
        to: Position,
        cell_type: CellType,
        rng: &mut R,
    ) -> DungResult<()> {
        let start = self.index_of(from)?;
        let end = self.index_of(to)?;

        let direction = Direction::between(from, to).ok_or_else(|| {
            DungError::InvalidAction(format!(
                "no straight line from {},{} to {},{}",
                from.column, from.row, to.column, to.row
            ))
        })?;

        match direction {
            Direction::Up => self.line_up(start, end, cell_type, rng),
            Direction::Down => self.line_down(start, end, cell_type, rng),
            Direction::Left => self.line_left(start, end, cell_type, rng),
            Direction::Right => self.line_right(start, end, cell_type, rng),
        }
    }

    /// Paints a box from any corner to the opposite one, outlined or filled.
    pub fn draw_box<R: Rng + ?Sized>(
        &mut self,
        from: Position,
        to: Position,
        cell_type: CellType,
        fill: bool,
        rng: &mut R,
    ) -> DungResult<()> {
        self.index_of(from)?;
        self.index_of(to)?;

        let top = from.row.min(to.row);
        let bottom = from.row.max(to.row);
        let left = from.column.min(to.column);
        let right = from.column.max(to.column);
        let columns = self.meta.columns;

        // A----B
        // |    |
        // D----C
        let a = grid_index(top, left, columns);
        let b = grid_index(top, right, columns);
        let c = grid_index(bottom, right, columns);
        let d = grid_index(bottom, left, columns);

        debug!(
            "drawing box from {},{} to {},{}: A - {}, B - {}, C - {}, D - {}",
            from.column, from.row, to.column, to.row, a, b, c, d
        );

        if fill {
            for row in top..=bottom {
                let row_start = grid_index(row, left, columns);
                let row_end = grid_index(row, right, columns);
                self.line_right(row_start, row_end, cell_type, rng)?;
            }
        } else {
            self.line_right(a, b, cell_type, rng)?;
            self.line_down(b, c, cell_type, rng)?;
            self.line_left(c, d, cell_type, rng)?;
            self.line_up(d, a, cell_type, rng)?;
        }

        Ok(())
    }

    /// Turns a cell into a door in its default state.
    pub fn place_door(&mut self, index: usize) -> DungResult<()> {
        let cell = self.cell_mut(index)?;
        cell.cell_type = CellType::Door;
        cell.state = CellType::Door.default_state();
        cell.should_redraw = true;
        debug!("door placed at {}", index);
        Ok(())
    }

    /// Indices of every cell currently of `cell_type`.
    pub fn indices_of_type(&self, cell_type: CellType) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type == cell_type)
            .map(|cell| cell.index)
            .collect()
    }

    fn line_up<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        cell_type: CellType,
        rng: &mut R,
    ) -> DungResult<()> {
        debug!(
            "drawing line UP from {} to {} of cell type {}",
            start, end, cell_type
        );
        for index in (end..=start).step_by(self.meta.columns) {
            self.set_cell(index, cell_type, rng)?;
        }
        Ok(())
    }

    fn line_down<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        cell_type: CellType,
        rng: &mut R,
    ) -> DungResult<()> {
        debug!(
            "drawing line DOWN from {} to {} of cell type {}",
            start, end, cell_type
        );
        for index in (start..=end).step_by(self.meta.columns) {
            self.set_cell(index, cell_type, rng)?;
        }
        Ok(())
    }

    fn line_left<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        cell_type: CellType,
        rng: &mut R,
    ) -> DungResult<()> {
        debug!(
            "drawing line LEFT from {} to {} of cell type {}",
            start, end, cell_type
        );
        for index in (end..=start).rev() {
            self.set_cell(index, cell_type, rng)?;
        }
        Ok(())
    }

    fn line_right<R: Rng + ?Sized>(
        &mut self,
        start: usize,
        end: usize,
        cell_type: CellType,
        rng: &mut R,
    ) -> DungResult<()> {
        debug!(
            "drawing line RIGHT from {} to {} of cell type {}",
            start, end, cell_type
        );
        for index in start..=end {
            self.set_cell(index, cell_type, rng)?;
        }
        Ok(())
    }

    fn index_out_of_bounds(&self, index: usize) -> DungError {
        DungError::OutOfBounds(format!("index {} (map has {})", index, self.cells.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AnimatedObject, DoorState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_map() -> Map {
        Map::new(&Options::for_testing(5, 4), 125.0, 100.0).unwrap()
    }

    fn painted(map: &Map, cell_type: CellType) -> Vec<usize> {
        map.indices_of_type(cell_type)
    }

    #[test]
    fn test_generate_cells_row_major() {
        let map = small_map();
        assert_eq!(map.len(), 20);
        assert_eq!(map.meta.block_count, 20);
        for (i, cell) in map.cells.iter().enumerate() {
            assert_eq!(cell.index, i);
            assert_eq!(cell.index, cell.row * 5 + cell.column);
            assert_eq!(cell.cell_type, CellType::Ground);
        }
    }

    #[test]
    fn test_rejects_map_not_multiple_of_block() {
        let options = Options {
            map_width: 130,
            ..Options::for_testing(5, 4)
        };
        assert!(Map::new(&options, 800.0, 600.0).is_err());
    }

    #[test]
    fn test_neighbors_stop_at_edges() {
        let map = small_map();
        assert_eq!(map.neighbor(0, Direction::Up), None);
        assert_eq!(map.neighbor(0, Direction::Left), None);
        assert_eq!(map.neighbor(0, Direction::Right), Some(1));
        assert_eq!(map.neighbor(0, Direction::Down), Some(5));
        assert_eq!(map.neighbor(4, Direction::Right), None);
        assert_eq!(map.neighbor(19, Direction::Down), None);
        assert_eq!(map.neighbor(19, Direction::Up), Some(14));
        assert_eq!(map.neighbor(99, Direction::Up), None);
    }

    #[test]
    fn test_horizontal_lines_both_ways() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(1);

        map.draw_line(Position::new(1, 1), Position::new(3, 1), CellType::Path, &mut rng)
            .unwrap();
        assert_eq!(painted(&map, CellType::Path), vec![6, 7, 8]);

        map.draw_line(Position::new(4, 2), Position::new(2, 2), CellType::Wall, &mut rng)
            .unwrap();
        assert_eq!(painted(&map, CellType::Wall), vec![12, 13, 14]);
    }

    #[test]
    fn test_vertical_lines_both_ways() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(1);

        map.draw_line(Position::new(2, 0), Position::new(2, 3), CellType::Path, &mut rng)
            .unwrap();
        assert_eq!(painted(&map, CellType::Path), vec![2, 7, 12, 17]);

        map.draw_line(Position::new(0, 3), Position::new(0, 1), CellType::Wall, &mut rng)
            .unwrap();
        assert_eq!(painted(&map, CellType::Wall), vec![5, 10, 15]);
    }

    #[test]
    fn test_diagonal_line_paints_nothing() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(1);

        let result =
            map.draw_line(Position::new(0, 0), Position::new(2, 2), CellType::Wall, &mut rng);
        assert!(matches!(result, Err(DungError::InvalidAction(_))));
        assert!(painted(&map, CellType::Wall).is_empty());
    }

    #[test]
    fn test_line_off_map_is_out_of_bounds() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(1);

        let result =
            map.draw_line(Position::new(0, 0), Position::new(9, 0), CellType::Wall, &mut rng);
        assert!(matches!(result, Err(DungError::OutOfBounds(_))));
    }

    #[test]
    fn test_outline_box_from_every_corner() {
        let corners = [
            (Position::new(1, 0), Position::new(3, 2)),
            (Position::new(3, 2), Position::new(1, 0)),
            (Position::new(3, 0), Position::new(1, 2)),
            (Position::new(1, 2), Position::new(3, 0)),
        ];

        for (from, to) in corners {
            let mut map = small_map();
            let mut rng = StdRng::seed_from_u64(1);
            map.draw_box(from, to, CellType::Wall, false, &mut rng).unwrap();
            assert_eq!(
                painted(&map, CellType::Wall),
                vec![1, 2, 3, 6, 8, 11, 12, 13],
                "box from {:?} to {:?}",
                from,
                to
            );
        }
    }

    #[test]
    fn test_filled_box() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(1);

        map.draw_box(Position::new(3, 3), Position::new(2, 1), CellType::Floor, true, &mut rng)
            .unwrap();
        assert_eq!(painted(&map, CellType::Floor), vec![7, 8, 12, 13, 17, 18]);
    }

    #[test]
    fn test_single_row_box_paints_line() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(1);

        map.draw_box(Position::new(0, 2), Position::new(4, 2), CellType::Wall, false, &mut rng)
            .unwrap();
        assert_eq!(painted(&map, CellType::Wall), vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_set_cell_primes_animation() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(3);

        map.set_cell(6, CellType::Lava, &mut rng).unwrap();
        let cell = map.get(6).unwrap();
        assert!(cell.is_animated);
        assert_eq!(cell.animation_step_counter, 15);
        assert!(cell.animation_step < 7);

        map.set_cell(6, CellType::Wall, &mut rng).unwrap();
        let cell = map.get(6).unwrap();
        assert!(!cell.is_animated);
        assert_eq!(cell.animation_step_counter, 0);
    }

    #[test]
    fn test_water_painted_under_swing_animates_after_it() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(3);
        map.get_mut(1)
            .unwrap()
            .set_animated_object(AnimatedObject::EmptyAttack);

        map.set_cell(1, CellType::Water, &mut rng).unwrap();
        let cell = map.get(1).unwrap();
        assert_eq!(cell.animation_step_counter, 2);
        assert_eq!(cell.animation_step, 0);

        // The swing keeps its own pace: two steps of two frames.
        for _ in 0..5 {
            assert!(map.advance_frame().finished_objects.is_empty());
        }
        assert_eq!(map.advance_frame().finished_objects, vec![1]);

        let cell = map.get(1).unwrap();
        assert_eq!(cell.cell_type, CellType::Water);
        assert!(cell.is_animated);
        assert_eq!(cell.animation_step_counter, 25);

        let repaints = (0..60)
            .filter(|_| map.advance_frame().repainted.contains(&1))
            .count();
        assert!(repaints >= 3);
    }

    #[test]
    fn test_painting_door_sets_default_state() {
        let mut map = small_map();
        let mut rng = StdRng::seed_from_u64(3);

        map.set_cell(2, CellType::Door, &mut rng).unwrap();
        assert_eq!(map.get(2).unwrap().state, Some(DoorState::Closed));

        map.set_cell(2, CellType::Floor, &mut rng).unwrap();
        assert_eq!(map.get(2).unwrap().state, None);
    }

    #[test]
    fn test_place_door_flags_redraw() {
        let mut map = small_map();
        map.place_door(7).unwrap();

        let cell = map.get(7).unwrap();
        assert_eq!(cell.cell_type, CellType::Door);
        assert_eq!(cell.state, Some(DoorState::Closed));
        assert!(cell.should_redraw);
        assert!(map.place_door(20).is_err());
    }

    #[test]
    fn test_cell_origin_uses_offsets() {
        let map = Map::new(&Options::for_testing(4, 4), 300.0, 200.0).unwrap();
        assert_eq!(map.meta.x_offset, 100.0);
        assert_eq!(map.meta.y_offset, 50.0);

        let cell = map.get(5).unwrap();
        assert_eq!(map.cell_origin(cell), (125.0, 75.0));
    }
}
