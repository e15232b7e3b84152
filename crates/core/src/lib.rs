//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management for Color Lines.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Every rule is unit tested on small hand-built boards
//! - **Portable**: Runs under the terminal front-end or headless
//!
//! # Module Structure
//!
//! - [`board`]: N×N grid of optional colors with emptiness queries
//! - [`reach`]: Breadth-first reachability over empty cells (move legality)
//! - [`matcher`]: Line detection in four directions, cross bonus, clearing
//! - [`colors`]: Lookahead queue of the next spawn colors
//! - [`scoring`]: Score, high score and the clear/bonus formula
//! - [`rng`]: Seedable random source for colors and spawn cells
//! - [`config`]: Injected board size, match length, palette and queue length
//! - [`game_state`]: The turn protocol tying it all together
//! - [`snapshot`]: Serializable session state
//!
//! # Game Rules
//!
//! - Activating an occupied cell selects it
//! - Activating an empty cell with a selection moves the ball there, if a path of
//!   empty cells connects the two (4-directional)
//! - Five or more of one color in a row, column or diagonal are cleared
//! - A turn without a clear spawns the queued colors on random empty cells
//! - The game ends when a spawn does not fit or fills the board
//!
//! # Example
//!
//! ```
//! use color_lines_core::GameEngine;
//!
//! let mut game = GameEngine::new(12345);
//! game.new_game();
//!
//! // Three balls are on the board after the opening spawn.
//! assert_eq!(game.board().count_empty(), 81 - 3);
//! assert_eq!(game.current_score(), 0);
//! assert!(game.game_over().is_none());
//! ```

pub mod board;
pub mod colors;
pub mod config;
pub mod game_state;
pub mod matcher;
pub mod reach;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use color_lines_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use colors::ColorManager;
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameEngine, TurnReport};
pub use matcher::{detect_matches, resolve_matches, CellMask, MatchOutcome};
pub use reach::{has_path, is_valid_move};
pub use rng::SpawnRng;
pub use scoring::{score_for, ScoreKeeper};
pub use snapshot::{GameSnapshot, SnapshotError};
