//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: row 0, column 3 (a 4x4 canvas centered horizontally)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DESCENT_INTERVAL_MS` | 400 | Gravity: one row every interval |
//! | `FRAME_MS` | 42 | Front-end frame pacing (~24 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{CellValue, GameAction, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert!(CellValue::Empty.is_empty());
//! assert_eq!(PieceKind::Line.tag(), CellValue::Blue);
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Edge length of a piece canvas (every template is a 4x4 occupancy mask)
pub const MASK_SIZE: usize = 4;

/// Fixed gravity interval in milliseconds (one row per interval)
pub const DESCENT_INTERVAL_MS: u32 = 400;

/// Front-end frame interval in milliseconds (~24 FPS)
pub const FRAME_MS: u32 = 42;

/// Anchor row for freshly spawned pieces
pub const SPAWN_ROW: i8 = 0;

/// Anchor column for freshly spawned pieces (canvas centered on the grid)
pub const SPAWN_COL: i8 = ((GRID_WIDTH - MASK_SIZE) / 2) as i8;

/// 4x4 occupancy mask, indexed `[row][col]`; `true` marks a filled cell.
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];


/// The value stored in a grid cell
///
/// A cell is either empty or carries the color tag of the piece that settled there.
/// The tag is the only state a cell has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Red,
    Green,
    Blue,
    Purple,
    Yellow,
}

impl CellValue {
    /// `true` for [`CellValue::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// `true` for any color tag
    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    /// Cell value from a compact numeric id (0 = empty, 1..=5 in declaration order)
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(CellValue::Empty),
            1 => Some(CellValue::Red),
            2 => Some(CellValue::Green),
            3 => Some(CellValue::Blue),
            4 => Some(CellValue::Purple),
            5 => Some(CellValue::Yellow),
            _ => None,
        }
    }
}

/// The five piece shapes of the canonical catalog
///
/// Each kind settles with its own color:
/// - **Square**: Green, 2x2 block
/// - **Line**: Blue, vertical bar of four
/// - **T**: Purple
/// - **L**: Red
/// - **Skew**: Yellow, Z-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    Line,
    T,
    L,
    Skew,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Square,
        PieceKind::Line,
        PieceKind::T,
        PieceKind::L,
        PieceKind::Skew,
    ];

    /// Cell value written into the grid when a piece of this kind settles
    pub fn tag(&self) -> CellValue {
        match self {
            PieceKind::Square => CellValue::Green,
            PieceKind::Line => CellValue::Blue,
            PieceKind::T => CellValue::Purple,
            PieceKind::L => CellValue::Red,
            PieceKind::Skew => CellValue::Yellow,
        }
    }

    /// Single-letter label
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "O",
            PieceKind::Line => "I",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::Skew => "Z",
        }
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step in this direction
    pub fn delta(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Input commands that can be applied to the game
///
/// Movement and rotation are validated by the simulation core before they are
/// applied; a rejected command is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over with an empty grid
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
