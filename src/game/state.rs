//! # Game State Module
//!
//! Central game state: the map, the player and the random source used when
//! painting animated cells.
//!
//! All player-facing operations go through [`GameState`] so occupancy flags,
//! redraw requests and the player's cell index stay consistent.

use crate::game::{
    matching_rule, AnimatedObject, Appearance, CellType, Direction, FrameReport, GameEvent, Map,
    Options, Player, Position,
};
use crate::{DungError, DungResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Central game state containing all game data.
#[derive(Debug, Clone)]
pub struct GameState {
    pub options: Options,
    pub map: Map,
    pub player: Player,
    /// Random number generator for animation start steps
    pub rng: StdRng,
    /// Seed the generator was created from
    pub rng_seed: u64,
    /// Number of animation frames advanced so far
    pub frame_number: u64,
}

impl GameState {
    /// Creates a game state with a fresh GROUND map centered in a parent
    /// surface of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{GameState, Options};
    ///
    /// let game_state = GameState::new(Options::default(), 800.0, 600.0).unwrap();
    /// assert_eq!(game_state.frame_number, 0);
    /// assert!(game_state.player.cell.is_none());
    /// ```
    pub fn new(options: Options, screen_width: f32, screen_height: f32) -> DungResult<Self> {
        let map = Map::new(&options, screen_width, screen_height)?;
        let rng_seed = options.seed.unwrap_or(crate::config::DEFAULT_SEED);

        info!(
            "game state created: {}x{} cells, seed {}",
            map.meta.columns, map.meta.rows, rng_seed
        );

        Ok(Self {
            options,
            map,
            player: Player::new(),
            rng: StdRng::seed_from_u64(rng_seed),
            rng_seed,
            frame_number: 0,
        })
    }

    /// Creates a game state sized exactly to the map, for tests and tools.
    pub fn for_testing(columns: u32, rows: u32) -> DungResult<Self> {
        let options = Options::for_testing(columns, rows);
        let width = options.map_width as f32;
        let height = options.map_height as f32;
        Self::new(options, width, height)
    }

    /// Index of the cell at a position.
    pub fn index_of(&self, position: Position) -> DungResult<usize> {
        self.map.index_of(position)
    }

    /// Paints one cell.
    pub fn set_cell(&mut self, index: usize, cell_type: CellType) -> DungResult<()> {
        self.map.set_cell(index, cell_type, &mut self.rng)
    }

    /// Paints a straight line of cells.
    pub fn draw_line(&mut self, from: Position, to: Position, cell_type: CellType) -> DungResult<()> {
        self.map.draw_line(from, to, cell_type, &mut self.rng)
    }

    /// Paints an outlined or filled box of cells.
    pub fn draw_box(
        &mut self,
        from: Position,
        to: Position,
        cell_type: CellType,
        fill: bool,
    ) -> DungResult<()> {
        self.map.draw_box(from, to, cell_type, fill, &mut self.rng)
    }

    pub fn place_door(&mut self, index: usize) -> DungResult<()> {
        self.map.place_door(index)
    }

    /// Finds the first passable, unoccupied cell in map order.
    pub fn find_starting_position(&self) -> DungResult<usize> {
        self.map
            .cells
            .iter()
            .find(|cell| cell.is_passable() && !cell.is_occupied)
            .map(|cell| cell.index)
            .ok_or_else(|| DungError::InvalidState("No passable cell on the map".to_string()))
    }

    /// Index of the cell in front of the player, or None when the player is
    /// unplaced or faces the edge of the map.
    pub fn cell_in_front_of_player(&self) -> Option<usize> {
        let current = self.player.cell?;
        self.map.neighbor(current, self.player.direction)
    }

    /// Moves the player onto a cell.
    ///
    /// Impassable targets, by type or by state, leave everything unchanged
    /// and report [`GameEvent::Blocked`]. Otherwise the previous cell is
    /// vacated and flagged for redraw.
    pub fn move_player(&mut self, index: usize) -> DungResult<GameEvent> {
        let target = self.map.cell(index)?;

        if !target.is_passable() {
            if target.state.is_some() {
                debug!("not passable because of state: {}", index);
            } else {
                debug!("not passable: {}", index);
            }
            return Ok(GameEvent::Blocked { target: index });
        }

        let from = self.player.cell;
        if let Some(previous) = from {
            let cell = self.map.cell_mut(previous)?;
            cell.is_occupied = false;
            cell.is_player_occupied = false;
            cell.should_redraw = true;
        }

        let cell = self.map.cell_mut(index)?;
        cell.is_occupied = true;
        cell.is_player_occupied = true;
        self.player.cell = Some(index);

        Ok(GameEvent::Moved { from, to: index })
    }

    /// Turns the player toward `direction`, or steps that way when already
    /// facing it.
    pub fn move_player_direction(&mut self, direction: Direction) -> DungResult<GameEvent> {
        let current = self
            .player
            .cell
            .ok_or_else(|| DungError::InvalidState("Player has not been placed".to_string()))?;

        let previous = self.player.direction;
        if self.player.face(direction) {
            self.flag_player_cell();
            return Ok(GameEvent::Turned {
                from: previous,
                to: direction,
            });
        }

        match self.map.neighbor(current, direction) {
            Some(next) => self.move_player(next),
            None => Ok(GameEvent::EdgeReached { direction }),
        }
    }

    /// Uses the cell in front of the player.
    ///
    /// An actionable cell gets the first matching rule applied; one with no
    /// matching rule (a locked door) is left alone. Anything else gets an
    /// empty-handed swing.
    pub fn generic_action(&mut self) -> DungResult<GameEvent> {
        if self.player.cell.is_none() {
            return Err(DungError::InvalidState(
                "Player has not been placed".to_string(),
            ));
        }

        let Some(index) = self.cell_in_front_of_player() else {
            return Ok(GameEvent::EdgeReached {
                direction: self.player.direction,
            });
        };

        let cell = self.map.cell(index)?;
        if !cell.cell_type.is_actionable() {
            return self.empty_attack(index);
        }

        let Some(rule) = matching_rule(cell) else {
            debug!("no matching action for {} at {}", cell.cell_type, index);
            return Ok(GameEvent::Nothing);
        };

        let cell = self.map.cell_mut(index)?;
        let from = cell
            .state
            .ok_or_else(|| DungError::InvalidState(format!("stateless cell {} matched", index)))?;
        cell.state = Some(rule.next_state);
        cell.should_redraw = true;

        debug!(
            "matching action {} at {}: {} -> {}",
            rule.name, index, from, rule.next_state
        );

        Ok(GameEvent::DoorChanged {
            index,
            from,
            to: rule.next_state,
        })
    }

    fn empty_attack(&mut self, index: usize) -> DungResult<GameEvent> {
        let cell = self.map.cell_mut(index)?;
        if !cell.cell_type.is_passable() || cell.is_occupied {
            return Ok(GameEvent::Nothing);
        }

        debug!("empty attack at {}", index);
        cell.set_animated_object(AnimatedObject::EmptyAttack);
        Ok(GameEvent::AttackStarted { index })
    }

    /// Advances animations by one frame.
    pub fn advance_frame(&mut self) -> FrameReport {
        self.frame_number += 1;
        self.map.advance_frame()
    }

    /// Resolves what the cell at `index` should look like right now.
    pub fn appearance(&self, index: usize) -> DungResult<Appearance> {
        Ok(self.map.cell(index)?.appearance(self.player.direction))
    }

    fn flag_player_cell(&mut self) {
        if let Some(cell) = self.player.cell.and_then(|index| self.map.get_mut(index)) {
            cell.should_redraw = true;
        }
    }
}
