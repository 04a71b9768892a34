//! Core types module - shared data structures and constants
//!
//! This module defines the value types shared by the engine, the terminal
//! front-end and the binary. Everything here is plain data with no I/O.
//!
//! # Board Dimensions
//!
//! The default playfield is 11 columns by 20 rows. Rows grow upward: row 0 is
//! the bottom of the well. The rightmost column is a margin column that a
//! piece can never enter and that row clearing ignores, so the playable width
//! is `width - 1`.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 11 | Columns, including the margin column |
//! | `DEFAULT_BOARD_HEIGHT` | 20 | Rows |
//! | `SPAWN_X` | 4 | Column of a new piece's mask origin |
//! | `SPAWN_Y` | 16 | Row of a new piece's mask origin |
//! | `TICK_MS` | 300 | Gravity interval used by the bundled driver |
//!
//! # Examples
//!
//! ```
//! use cube_tetris_types::{Category, Command, Orientation, Rgba};
//!
//! let category = Category::try_from(7).unwrap();
//! assert_eq!(category, Category::J);
//! assert_eq!(category.color(), Rgba::new(0.0, 1.0, 1.0, 1.0));
//!
//! assert_eq!(Orientation::R270.next(), Orientation::R0);
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//! ```

use serde::Serialize;
use thiserror::Error;

/// Default board width in cells (the last column is the margin column)
pub const DEFAULT_BOARD_WIDTH: u16 = 11;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Spawn column for new pieces
pub const SPAWN_X: i32 = 4;

/// Spawn row for new pieces
pub const SPAWN_Y: i32 = 16;

/// Gravity interval in milliseconds
pub const TICK_MS: u32 = 300;

/// Side length of a piece's shape mask
pub const MASK_SIZE: usize = 4;

/// Errors raised when building a [`Category`] from untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("piece category {0} is outside 1..=7")]
    OutOfRange(i32),
    #[error("unknown piece category name: {0:?}")]
    UnknownName(String),
}

/// RGBA color with float channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, the color of every empty cell
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        *self == Self::TRANSPARENT
    }

    /// Convert to 8-bit channels (alpha dropped), clamping out-of-range values
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

/// The seven tetromino categories
///
/// Numbered 1..=7 in declaration order. The numbering selects the slice of
/// the rotation table and the fixed piece color:
/// - **I**: blue
/// - **T**: magenta
/// - **O**: violet
/// - **Z**: green
/// - **S**: red
/// - **L**: yellow
/// - **J**: cyan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    I,
    T,
    O,
    Z,
    S,
    L,
    J,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 7] = [
        Category::I,
        Category::T,
        Category::O,
        Category::Z,
        Category::S,
        Category::L,
        Category::J,
    ];

    /// Zero-based position in the rotation table
    pub fn index(&self) -> usize {
        match self {
            Category::I => 0,
            Category::T => 1,
            Category::O => 2,
            Category::Z => 3,
            Category::S => 4,
            Category::L => 5,
            Category::J => 6,
        }
    }

    /// One-based category number (1 = I ... 7 = J)
    pub fn number(&self) -> i32 {
        self.index() as i32 + 1
    }

    /// Fixed color of pieces in this category
    pub fn color(&self) -> Rgba {
        match self {
            Category::I => Rgba::new(0.0, 0.0, 1.0, 1.0),
            Category::T => Rgba::new(1.0, 0.0, 1.0, 1.0),
            Category::O => Rgba::new(0.5, 0.0, 1.0, 1.0),
            Category::Z => Rgba::new(0.0, 1.0, 0.0, 1.0),
            Category::S => Rgba::new(1.0, 0.0, 0.0, 1.0),
            Category::L => Rgba::new(1.0, 1.0, 0.0, 1.0),
            Category::J => Rgba::new(0.0, 1.0, 1.0, 1.0),
        }
    }

    /// Parse category from string (case-insensitive)
    ///
    /// ```
    /// use cube_tetris_types::Category;
    ///
    /// assert_eq!(Category::from_str("o"), Ok(Category::O));
    /// assert!(Category::from_str("x").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_lowercase().as_str() {
            "i" => Ok(Category::I),
            "t" => Ok(Category::T),
            "o" => Ok(Category::O),
            "z" => Ok(Category::Z),
            "s" => Ok(Category::S),
            "l" => Ok(Category::L),
            "j" => Ok(Category::J),
            _ => Err(CategoryError::UnknownName(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::I => "i",
            Category::T => "t",
            Category::O => "o",
            Category::Z => "z",
            Category::S => "s",
            Category::L => "l",
            Category::J => "j",
        }
    }
}

impl TryFrom<i32> for Category {
    type Error = CategoryError;

    /// Build from the one-based category number
    fn try_from(number: i32) -> Result<Self, Self::Error> {
        if (1..=7).contains(&number) {
            Ok(Category::ALL[(number - 1) as usize])
        } else {
            Err(CategoryError::OutOfRange(number))
        }
    }
}

/// Rotation states, advanced a quarter turn at a time
///
/// The cycle only goes forward: R0 → R90 → R180 → R270 → R0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Orientation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Orientation {
    pub fn next(&self) -> Self {
        match self {
            Orientation::R0 => Orientation::R90,
            Orientation::R90 => Orientation::R180,
            Orientation::R180 => Orientation::R270,
            Orientation::R270 => Orientation::R0,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Orientation::R0 => 0,
            Orientation::R90 => 1,
            Orientation::R180 => 2,
            Orientation::R270 => 3,
        }
    }
}

/// Unit movement directions accepted by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-hot `(down, left, right)` delta triple
    pub fn deltas(&self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (1, 0, 0),
            Direction::Left => (0, 1, 0),
            Direction::Right => (0, 0, 1),
        }
    }
}

/// Discrete commands a driver forwards to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one row down
    MoveDown,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance piece a quarter turn
    Rotate,
}

impl Command {
    /// Parse command from string
    ///
    /// Accepts camelCase or snake_case names (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "movedown" | "move_down" | "down" => Some(Command::MoveDown),
            "moveleft" | "move_left" | "left" => Some(Command::MoveLeft),
            "moveright" | "move_right" | "right" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveDown => "moveDown",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
        }
    }

    /// Board direction for movement commands, `None` for rotation
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::Rotate => None,
        }
    }
}
