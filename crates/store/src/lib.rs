//! Persistence for Color Lines
//!
//! Keeps the high-score record and the session snapshot in a data directory and
//! wraps a [`GameEngine`](color_lines_core::GameEngine) in a [`Session`] that
//! saves at the right moments. Nothing here is fatal to play: read failures fall
//! back to defaults and write failures are reported, not raised.

pub mod error;
pub mod files;
pub mod session;

pub use error::StoreError;
pub use files::{Store, HIGH_SCORE_FILE, SESSION_FILE};
pub use session::Session;
