//! Color Lines (workspace facade crate).
//!
//! Re-exports the member crates under short names so the runner, the
//! integration tests and the benches share one import path:
//! `color_lines::{core, input, store, term, types}`.

pub mod cli;

pub use color_lines_core as core;
pub use color_lines_input as input;
pub use color_lines_store as store;
pub use color_lines_term as term;
pub use color_lines_types as types;
