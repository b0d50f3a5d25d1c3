//! # Key Bindings
//!
//! The table mapping keys to player inputs.

use crate::game::Direction;
use crate::input::PlayerInput;
use macroquad::prelude::KeyCode;

/// Keys checked every frame, in priority order.
pub const KEY_BINDINGS: &[(KeyCode, PlayerInput)] = &[
    (KeyCode::Escape, PlayerInput::Quit),
    (KeyCode::Left, PlayerInput::Move(Direction::Left)),
    (KeyCode::A, PlayerInput::Move(Direction::Left)),
    (KeyCode::Up, PlayerInput::Move(Direction::Up)),
    (KeyCode::W, PlayerInput::Move(Direction::Up)),
    (KeyCode::Right, PlayerInput::Move(Direction::Right)),
    (KeyCode::D, PlayerInput::Move(Direction::Right)),
    (KeyCode::Down, PlayerInput::Move(Direction::Down)),
    (KeyCode::S, PlayerInput::Move(Direction::Down)),
    (KeyCode::Space, PlayerInput::Action),
    (KeyCode::F1, PlayerInput::Help),
    (KeyCode::F3, PlayerInput::ToggleDebug),
];

/// Looks up the input bound to a key.
pub fn input_for_key(key: KeyCode) -> Option<PlayerInput> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, input)| *input)
}
