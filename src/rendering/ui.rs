//! # User Interface Elements
//!
//! The message log and controls line drawn below the map.

use crate::game::GameEvent;
use macroquad::prelude::*;

/// Controls summary shown under the map.
pub const CONTROLS_TEXT: &str = "WASD/arrows: turn/move  SPACE: act  F3: debug  ESC: quit";

/// Message log and status line.
pub struct UI {
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Number of messages drawn at once
    pub visible_messages: usize,
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

impl UI {
    /// Creates a new UI instance.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_messages: 100,
            visible_messages: 3,
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    /// The most recent messages, oldest first.
    pub fn recent_messages(&self) -> &[String] {
        let start = self.messages.len().saturating_sub(self.visible_messages);
        &self.messages[start..]
    }

    /// Draws the controls line and recent messages starting at `top`.
    pub fn render(&self, left: f32, top: f32) {
        let line_height = 18.0;
        draw_text(CONTROLS_TEXT, left, top + line_height, 16.0, GRAY);

        for (i, message) in self.recent_messages().iter().enumerate() {
            let y = top + line_height * (i as f32 + 2.0);
            draw_text(message, left, y, 16.0, WHITE);
        }
    }
}

/// Log line for an event worth telling the player about.
///
/// # Examples
///
/// ```
/// use dung::{describe_event, DoorState, GameEvent};
///
/// let event = GameEvent::DoorChanged { index: 71, from: DoorState::Closed, to: DoorState::Open };
/// assert_eq!(describe_event(&event).as_deref(), Some("The door opens."));
/// ```
pub fn describe_event(event: &GameEvent) -> Option<String> {
    use crate::game::DoorState;

    match event {
        GameEvent::DoorChanged { to, .. } => Some(
            match to {
                DoorState::Open => "The door opens.",
                DoorState::Closed => "The door closes.",
                DoorState::Locked => "The door locks.",
            }
            .to_string(),
        ),
        GameEvent::AttackStarted { .. } => Some("You swing at empty air.".to_string()),
        GameEvent::Blocked { .. } => Some("Something blocks the way.".to_string()),
        GameEvent::Turned { .. }
        | GameEvent::Moved { .. }
        | GameEvent::EdgeReached { .. }
        | GameEvent::Nothing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_history_is_bounded() {
        let mut ui = UI::new();
        ui.max_messages = 2;
        ui.add_message("one".to_string());
        ui.add_message("two".to_string());
        ui.add_message("three".to_string());
        assert_eq!(ui.messages, vec!["two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_recent_messages_window() {
        let mut ui = UI::new();
        assert!(ui.recent_messages().is_empty());
        for i in 0..5 {
            ui.add_message(format!("m{}", i));
        }
        assert_eq!(ui.recent_messages(), &["m2", "m3", "m4"]);
    }

    #[test]
    fn test_quiet_events_have_no_message() {
        assert!(describe_event(&GameEvent::Nothing).is_none());
        assert!(describe_event(&GameEvent::Moved { from: None, to: 3 }).is_none());
        assert!(describe_event(&GameEvent::AttackStarted { index: 3 }).is_some());
    }
}
