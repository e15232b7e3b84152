//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into
//! [`crate::types::GameAction`] and keeps the keyboard cursor that stands in for
//! the mouse pointer.

pub mod cursor;
pub mod map;

pub use color_lines_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
