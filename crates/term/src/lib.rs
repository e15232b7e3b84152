//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget libraries and instead renders into a simple framebuffer
//! that is flushed to the terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Draw straight from the engine's query interface
//! - Map mouse clicks back to board cells with the same layout math

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use color_lines_core as core;
pub use color_lines_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrontState, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
