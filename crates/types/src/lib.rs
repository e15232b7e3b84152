//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the persistence layer and the terminal front-end alike.
//!
//! # Default Game Parameters
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 9 | Side length of the square board |
//! | `DEFAULT_MATCH_LEN` | 5 | Cells in a row needed to clear |
//! | `DEFAULT_PALETTE_SIZE` | 7 | Number of distinct ball colors |
//! | `DEFAULT_NEXT_LEN` | 3 | Balls spawned per non-matching turn |
//!
//! # Scoring
//!
//! Every cleared cell is worth `CLEAR_POINTS`. Cleared cells that are part of a
//! plus-shaped cross earn `CROSS_BONUS_POINTS` on top.
//!
//! # Examples
//!
//! ```
//! use color_lines_types::{ColorId, GameAction, Pos, DEFAULT_BOARD_SIZE};
//!
//! let red = ColorId::RED;
//! assert_eq!(red.index(), 0);
//! assert_eq!(red.name(), "red");
//! assert_eq!(ColorId::from_name("Cyan"), Some(ColorId::CYAN));
//!
//! let pos = Pos::new(4, 4);
//! assert!(pos.row < DEFAULT_BOARD_SIZE);
//!
//! assert_eq!(GameAction::from_str("activate"), Some(GameAction::Activate));
//! ```

/// Board side length (9x9)
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Number of same-colored cells in a line that triggers a clear
pub const DEFAULT_MATCH_LEN: usize = 5;

/// Number of colors in the default palette
pub const DEFAULT_PALETTE_SIZE: u8 = 7;

/// Length of the next-colors lookahead queue
pub const DEFAULT_NEXT_LEN: usize = 3;

/// Largest supported board side
pub const MAX_BOARD_SIZE: usize = 32;

/// Largest supported palette
pub const MAX_PALETTE_SIZE: u8 = 16;

/// Capacity of the next-colors queue (and of one spawn batch)
pub const MAX_NEXT_LEN: usize = 8;

/// Points per cleared cell
pub const CLEAR_POINTS: u64 = 2;

/// Extra points per cleared cell that belongs to a cross
pub const CROSS_BONUS_POINTS: u64 = 8;

/// Snapshot encoding of an empty cell / absent color
pub const EMPTY_CELL: i32 = -1;

/// Names of the default seven-color palette, by index.
const PALETTE_NAMES: [&str; DEFAULT_PALETTE_SIZE as usize] =
    ["red", "green", "blue", "yellow", "magenta", "cyan", "brown"];

/// A ball color.
///
/// Colors are indices into the engine's palette. The first seven have names
/// (the default palette); larger palettes use anonymous indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(u8);

impl ColorId {
    pub const RED: ColorId = ColorId(0);
    pub const GREEN: ColorId = ColorId(1);
    pub const BLUE: ColorId = ColorId(2);
    pub const YELLOW: ColorId = ColorId(3);
    pub const MAGENTA: ColorId = ColorId(4);
    pub const CYAN: ColorId = ColorId(5);
    pub const BROWN: ColorId = ColorId(6);

    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Lowercase name for the default palette, `"?"` beyond it.
    pub fn name(self) -> &'static str {
        PALETTE_NAMES.get(self.0 as usize).copied().unwrap_or("?")
    }

    /// Parse a default-palette color name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        PALETTE_NAMES
            .iter()
            .position(|&n| n == lower)
            .map(|i| ColorId(i as u8))
    }

    /// Snapshot encoding of an optional color.
    pub fn encode(cell: Cell) -> i32 {
        cell.map(|c| c.0 as i32).unwrap_or(EMPTY_CELL)
    }

    /// Decode a snapshot integer. Anything outside `-1..palette_size` is
    /// handed back as the error.
    pub fn decode(value: i32, palette_size: u8) -> Result<Cell, i32> {
        match value {
            EMPTY_CELL => Ok(None),
            v if v >= 0 && v < palette_size as i32 => Ok(Some(ColorId(v as u8))),
            v => Err(v),
        }
    }
}

/// A cell on the board: `None` is empty.
pub type Cell = Option<ColorId>;

/// Board coordinate, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by `(drow, dcol)`, returning `None` when leaving `[0, size)`.
    #[inline]
    pub fn offset(self, drow: isize, dcol: isize, size: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        if row < size && col < size {
            Some(Pos { row, col })
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos { row, col }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// Fewer empty cells than balls waiting to spawn.
    NoSpace,
    /// Every cell is occupied after a spawn.
    BoardFull,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::NoSpace => "no_space",
            GameOverReason::BoardFull => "board_full",
        }
    }

    /// Human-facing message for the game-over banner.
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::NoSpace => "Not enough space to place new balls",
            GameOverReason::BoardFull => "No more moves available",
        }
    }
}

/// Terminal game state reported to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOver {
    pub reason: GameOverReason,
    pub final_score: u64,
}

/// Front-end actions.
///
/// The engine itself only understands "activate cell"; cursor actions are
/// resolved against the front-end cursor before reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Activate the cell under the cursor (select or move)
    Activate,
    /// Abandon the current game and start a new one
    NewGame,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use color_lines_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorUp"), Some(GameAction::CursorUp));
    /// assert_eq!(GameAction::from_str("NEWGAME"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "activate" => Some(GameAction::Activate),
            "newgame" => Some(GameAction::NewGame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Activate => "activate",
            GameAction::NewGame => "newGame",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters() {
        assert_eq!(DEFAULT_BOARD_SIZE, 9);
        assert_eq!(DEFAULT_MATCH_LEN, 5);
        assert_eq!(DEFAULT_PALETTE_SIZE, 7);
        assert_eq!(DEFAULT_NEXT_LEN, 3);
        assert_eq!(CLEAR_POINTS, 2);
        assert_eq!(CROSS_BONUS_POINTS, 8);
    }

    #[test]
    fn color_encoding() {
        assert_eq!(ColorId::encode(None), -1);
        assert_eq!(ColorId::encode(Some(ColorId::BROWN)), 6);

        assert_eq!(ColorId::decode(-1, 7), Ok(None));
        assert_eq!(ColorId::decode(3, 7), Ok(Some(ColorId::YELLOW)));
        assert_eq!(ColorId::decode(7, 7), Err(7));
        assert_eq!(ColorId::decode(-2, 7), Err(-2));
    }

    #[test]
    fn color_names() {
        assert_eq!(ColorId::GREEN.name(), "green");
        assert_eq!(ColorId::new(12).name(), "?");
        assert_eq!(ColorId::from_name("BROWN"), Some(ColorId::BROWN));
        assert_eq!(ColorId::from_name("purple"), None);
    }

    #[test]
    fn pos_offset_stays_in_bounds() {
        let p = Pos::new(0, 8);
        assert_eq!(p.offset(-1, 0, 9), None);
        assert_eq!(p.offset(0, 1, 9), None);
        assert_eq!(p.offset(1, -1, 9), Some(Pos::new(1, 7)));
    }

    #[test]
    fn action_roundtrip_names() {
        for action in [
            GameAction::CursorUp,
            GameAction::CursorDown,
            GameAction::CursorLeft,
            GameAction::CursorRight,
            GameAction::Activate,
            GameAction::NewGame,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
