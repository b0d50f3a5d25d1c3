//! # Actions
//!
//! The context-sensitive action table and the player actions built on it.
//!
//! Every player intent becomes a [`ConcreteAction`] executed against the
//! [`GameState`], which reports what happened as a [`GameEvent`].

use crate::game::{Cell, CellType, Direction, DoorState, GameState};
use crate::DungResult;
use serde::{Deserialize, Serialize};

/// A state transition the generic action can apply to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub name: &'static str,
    pub matching_cell_type: CellType,
    pub matching_cell_states: &'static [DoorState],
    pub next_state: DoorState,
}

/// Rules in priority order. The first match wins.
pub const ACTION_RULES: [ActionRule; 2] = [
    ActionRule {
        name: "OPEN_DOOR",
        matching_cell_type: CellType::Door,
        matching_cell_states: &[DoorState::Closed],
        next_state: DoorState::Open,
    },
    ActionRule {
        name: "CLOSE_DOOR",
        matching_cell_type: CellType::Door,
        matching_cell_states: &[DoorState::Open],
        next_state: DoorState::Closed,
    },
];

impl ActionRule {
    pub fn matches(&self, cell: &Cell) -> bool {
        cell.cell_type == self.matching_cell_type
            && cell
                .state
                .is_some_and(|state| self.matching_cell_states.contains(&state))
    }
}

/// Finds the first rule that applies to a cell.
///
/// # Examples
///
/// ```
/// use dung::{matching_rule, Cell, CellType, DoorState};
///
/// let mut cell = Cell::new(0, 0, 4);
/// cell.cell_type = CellType::Door;
/// cell.state = Some(DoorState::Closed);
/// assert_eq!(matching_rule(&cell).unwrap().name, "OPEN_DOOR");
///
/// cell.state = Some(DoorState::Locked);
/// assert!(matching_rule(&cell).is_none());
/// ```
pub fn matching_rule(cell: &Cell) -> Option<&'static ActionRule> {
    ACTION_RULES.iter().find(|rule| rule.matches(cell))
}

/// What an executed action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player turned without moving
    Turned { from: Direction, to: Direction },
    /// The player entered a cell
    Moved { from: Option<usize>, to: usize },
    /// The target cell refused entry
    Blocked { target: usize },
    /// There is no cell in that direction
    EdgeReached { direction: Direction },
    /// A rule changed a door's state
    DoorChanged {
        index: usize,
        from: DoorState,
        to: DoorState,
    },
    /// An empty-handed swing started on a cell
    AttackStarted { index: usize },
    /// The action had no effect
    Nothing,
}

/// Types of actions the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    Move,
    Interact,
}

/// Common interface for anything the player can do.
pub trait Action {
    /// Applies the action to the game state.
    fn execute(&self, game_state: &mut GameState) -> DungResult<GameEvent>;

    fn action_type(&self) -> ActionType;
}

/// Turn toward, or step in, a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAction {
    pub direction: Direction,
}

impl Action for MoveAction {
    fn execute(&self, game_state: &mut GameState) -> DungResult<GameEvent> {
        game_state.move_player_direction(self.direction)
    }

    fn action_type(&self) -> ActionType {
        ActionType::Move
    }
}

/// Use whatever is in front of the player, or swing at empty air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractAction;

impl Action for InteractAction {
    fn execute(&self, game_state: &mut GameState) -> DungResult<GameEvent> {
        game_state.generic_action()
    }

    fn action_type(&self) -> ActionType {
        ActionType::Interact
    }
}

/// Closed set of player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcreteAction {
    Move(MoveAction),
    Interact(InteractAction),
}

impl Action for ConcreteAction {
    fn execute(&self, game_state: &mut GameState) -> DungResult<GameEvent> {
        match self {
            ConcreteAction::Move(action) => action.execute(game_state),
            ConcreteAction::Interact(action) => action.execute(game_state),
        }
    }

    fn action_type(&self) -> ActionType {
        match self {
            ConcreteAction::Move(action) => action.action_type(),
            ConcreteAction::Interact(action) => action.action_type(),
        }
    }
}
