//! # Cells
//!
//! Cell types, door states, animated objects and the per-cell record kept by
//! the map.

use crate::game::{Direction, Position};
use crate::utils::grid_index;
use serde::{Deserialize, Serialize};

/// Named colors used by cells and the display.
///
/// The game layer only names colors; the renderer resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Black,
    Grey,
    DarkSlateGray,
    RoyalBlue,
    OrangeRed,
    Green,
    Peru,
    White,
    Silver,
}

/// A looping glyph sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Glyphs shown in order
    pub steps: &'static [char],
    /// Frames each step stays on screen
    pub frames_per_step: u32,
    /// Whether a freshly painted cell starts on a random step
    pub start_on_random_step: bool,
}

impl AnimationSpec {
    /// Number of steps in one cycle.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Glyph for `step`, wrapping past the end.
    pub fn glyph(&self, step: usize) -> char {
        self.steps[step % self.steps.len()]
    }
}

const WATER_ANIMATION: AnimationSpec = AnimationSpec {
    steps: &['-', '-', '~'],
    frames_per_step: 25,
    start_on_random_step: true,
};

const LAVA_ANIMATION: AnimationSpec = AnimationSpec {
    steps: &['-', '-', '~', '˚', '-', '-', '~'],
    frames_per_step: 15,
    start_on_random_step: true,
};

const EMPTY_ATTACK_ANIMATION: AnimationSpec = AnimationSpec {
    steps: &['˟', '•'],
    frames_per_step: 2,
    start_on_random_step: false,
};

/// Glyph of the player token.
pub const PLAYER_GLYPH: char = 'Ϙ';

/// Color of the player token.
pub const PLAYER_TINT: Tint = Tint::Green;

/// Kinds of terrain a cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellType {
    #[default]
    Ground,
    Floor,
    Wall,
    Path,
    Water,
    Lava,
    Door,
}

impl CellType {
    /// Glyph drawn for this type when no state or animation overrides it.
    pub fn glyph(self) -> char {
        match self {
            CellType::Ground => '•',
            CellType::Floor => '*',
            CellType::Wall => '#',
            CellType::Path => '/',
            CellType::Water | CellType::Lava => '-',
            CellType::Door => 'D',
        }
    }

    /// Color drawn for this type.
    pub fn tint(self) -> Tint {
        match self {
            CellType::Ground | CellType::Floor | CellType::Path => Tint::Grey,
            CellType::Wall => Tint::DarkSlateGray,
            CellType::Water => Tint::RoyalBlue,
            CellType::Lava => Tint::OrangeRed,
            CellType::Door => Tint::Peru,
        }
    }

    /// Passability of the bare type. Stateful cells defer to their state.
    pub fn is_passable(self) -> bool {
        matches!(self, CellType::Ground | CellType::Floor | CellType::Path)
    }

    /// Glyph cycle for animated types.
    pub fn animation(self) -> Option<&'static AnimationSpec> {
        match self {
            CellType::Water => Some(&WATER_ANIMATION),
            CellType::Lava => Some(&LAVA_ANIMATION),
            _ => None,
        }
    }

    /// Whether painted cells of this type animate.
    pub fn is_animated(self) -> bool {
        self.animation().is_some()
    }

    /// Whether the generic action can target this type.
    pub fn is_actionable(self) -> bool {
        self == CellType::Door
    }

    /// State assigned when a cell is painted with this type.
    pub fn default_state(self) -> Option<DoorState> {
        match self {
            CellType::Door => Some(DoorState::Closed),
            _ => None,
        }
    }

    /// Upper-case name used in logs and messages.
    pub fn name(self) -> &'static str {
        match self {
            CellType::Ground => "GROUND",
            CellType::Floor => "FLOOR",
            CellType::Wall => "WALL",
            CellType::Path => "PATH",
            CellType::Water => "WATER",
            CellType::Lava => "LAVA",
            CellType::Door => "DOOR",
        }
    }

    /// Returns every cell type.
    pub fn all() -> [CellType; 7] {
        [
            CellType::Ground,
            CellType::Floor,
            CellType::Wall,
            CellType::Path,
            CellType::Water,
            CellType::Lava,
            CellType::Door,
        ]
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a door cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorState {
    Open,
    Closed,
    Locked,
}

impl DoorState {
    /// Glyph drawn for a door in this state.
    pub fn glyph(self) -> char {
        match self {
            DoorState::Open => 'O',
            DoorState::Closed => 'D',
            DoorState::Locked => 'L',
        }
    }

    /// Only an open door lets the player through.
    pub fn is_passable(self) -> bool {
        self == DoorState::Open
    }
}

impl std::fmt::Display for DoorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DoorState::Open => "OPEN",
            DoorState::Closed => "CLOSED",
            DoorState::Locked => "LOCKED",
        };
        f.write_str(name)
    }
}

/// Short-lived effects drawn on top of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimatedObject {
    /// Swing with nothing in hand
    EmptyAttack,
}

impl AnimatedObject {
    pub fn animation(self) -> &'static AnimationSpec {
        match self {
            AnimatedObject::EmptyAttack => &EMPTY_ATTACK_ANIMATION,
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            AnimatedObject::EmptyAttack => Tint::Silver,
        }
    }
}

/// Arrow layered over the player glyph to show the facing direction.
pub fn direction_layer(direction: Direction) -> (char, Tint) {
    let glyph = match direction {
        Direction::Up => '↑',
        Direction::Down => '↓',
        Direction::Left => '←',
        Direction::Right => '→',
    };
    (glyph, Tint::White)
}

/// What a cell looks like on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub glyph: char,
    pub tint: Tint,
    /// Second glyph drawn over the first
    pub layer: Option<(char, Tint)>,
}

/// One grid square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    /// Row-major index into the map
    pub index: usize,
    pub cell_type: CellType,
    /// Door state, present only on stateful types
    pub state: Option<DoorState>,
    pub animation_step: usize,
    pub animation_step_counter: u32,
    pub is_animated: bool,
    pub is_occupied: bool,
    pub is_player_occupied: bool,
    pub should_redraw: bool,
    pub animated_object: Option<AnimatedObject>,
    /// Glyph recorded the last time an animation step was painted
    pub frame_glyph: Option<char>,
}

impl Cell {
    /// Creates a GROUND cell at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{Cell, CellType};
    ///
    /// let cell = Cell::new(2, 3, 16);
    /// assert_eq!(cell.index, 35);
    /// assert_eq!(cell.cell_type, CellType::Ground);
    /// ```
    pub fn new(row: usize, column: usize, columns: usize) -> Self {
        Self {
            row,
            column,
            index: grid_index(row, column, columns),
            cell_type: CellType::Ground,
            state: None,
            animation_step: 0,
            animation_step_counter: 0,
            is_animated: false,
            is_occupied: false,
            is_player_occupied: false,
            should_redraw: false,
            animated_object: None,
            frame_glyph: None,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }

    /// Whether the player may enter this cell. A state overrides the type.
    pub fn is_passable(&self) -> bool {
        match self.state {
            Some(state) => state.is_passable(),
            None => self.cell_type.is_passable(),
        }
    }

    /// Animation currently driving this cell, object first.
    pub fn current_animation(&self) -> Option<&'static AnimationSpec> {
        match self.animated_object {
            Some(object) => Some(object.animation()),
            None => self.cell_type.animation(),
        }
    }

    /// Attaches an animated object, restarting the animation fields.
    pub fn set_animated_object(&mut self, object: AnimatedObject) {
        self.animated_object = Some(object);
        self.is_animated = true;
        self.animation_step = 0;
        self.animation_step_counter = object.animation().frames_per_step;
        self.frame_glyph = None;
    }

    /// Removes the animated object and asks for a repaint. An animated type
    /// resumes its own cycle from the first step.
    pub fn unset_animated_object(&mut self) {
        self.animated_object = None;
        self.is_animated = self.cell_type.is_animated();
        self.animation_step = 0;
        self.animation_step_counter = self
            .cell_type
            .animation()
            .map_or(0, |spec| spec.frames_per_step);
        self.frame_glyph = None;
        self.should_redraw = true;
    }

    /// Resolves the glyph and colors to draw for this cell.
    pub fn appearance(&self, facing: Direction) -> Appearance {
        if self.is_player_occupied {
            return Appearance {
                glyph: PLAYER_GLYPH,
                tint: PLAYER_TINT,
                layer: Some(direction_layer(facing)),
            };
        }

        if let Some(object) = self.animated_object {
            let spec = object.animation();
            return Appearance {
                glyph: self.frame_glyph.unwrap_or_else(|| spec.glyph(self.animation_step)),
                tint: object.tint(),
                layer: None,
            };
        }

        let glyph = if let Some(state) = self.state {
            state.glyph()
        } else if let Some(spec) = self.cell_type.animation() {
            self.frame_glyph
                .unwrap_or_else(|| spec.glyph(self.animation_step))
        } else {
            self.cell_type.glyph()
        };

        Appearance {
            glyph,
            tint: self.cell_type.tint(),
            layer: None,
        }
    }
}
