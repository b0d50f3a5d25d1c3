//! # Input Module
//!
//! Keyboard handling: keys become [`PlayerInput`]s, and the ones that act on
//! the world become [`ConcreteAction`]s.

pub mod commands;

pub use commands::*;

use crate::game::{ConcreteAction, Direction, InteractAction, MoveAction};
use macroquad::prelude::*;

/// Input handler for processing player commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{InputHandler, PlayerInput};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(input_handler.input_to_action(PlayerInput::Help), None);
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Gets the input for the first bound key pressed this frame.
    ///
    /// Needs a running macroquad context.
    pub fn get_input(&self) -> Option<PlayerInput> {
        KEY_BINDINGS
            .iter()
            .find(|(key, _)| is_key_pressed(*key))
            .map(|(_, input)| *input)
    }

    /// Converts player input to a game action.
    ///
    /// Inputs that only affect the program (quit, help, debug overlay)
    /// produce no action.
    pub fn input_to_action(&self, input: PlayerInput) -> Option<ConcreteAction> {
        match input {
            PlayerInput::Move(direction) => Some(ConcreteAction::Move(MoveAction { direction })),
            PlayerInput::Action => Some(ConcreteAction::Interact(InteractAction)),
            PlayerInput::Quit | PlayerInput::Help | PlayerInput::ToggleDebug => None,
        }
    }
}

/// Player input types that can be processed by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Turn toward, or step in, a direction
    Move(Direction),
    /// Open/close the faced door or swing at empty air
    Action,
    /// Quit the game
    Quit,
    /// Show help information
    Help,
    /// Toggle cell indices and outlines
    ToggleDebug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_share_directions() {
        assert_eq!(input_for_key(KeyCode::Left), input_for_key(KeyCode::A));
        assert_eq!(input_for_key(KeyCode::Up), input_for_key(KeyCode::W));
        assert_eq!(input_for_key(KeyCode::Right), input_for_key(KeyCode::D));
        assert_eq!(input_for_key(KeyCode::Down), input_for_key(KeyCode::S));
        assert_eq!(
            input_for_key(KeyCode::W),
            Some(PlayerInput::Move(Direction::Up))
        );
    }

    #[test]
    fn test_space_is_action() {
        assert_eq!(input_for_key(KeyCode::Space), Some(PlayerInput::Action));
        assert_eq!(input_for_key(KeyCode::Z), None);
    }

    #[test]
    fn test_input_to_action() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.input_to_action(PlayerInput::Move(Direction::Down)),
            Some(ConcreteAction::Move(MoveAction {
                direction: Direction::Down
            }))
        );
        assert_eq!(
            handler.input_to_action(PlayerInput::Action),
            Some(ConcreteAction::Interact(InteractAction))
        );
        assert_eq!(handler.input_to_action(PlayerInput::Quit), None);
    }
}
