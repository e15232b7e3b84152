//! Keyboard cursor over the board.

use crate::types::{GameAction, Pos};

/// Board position under keyboard control, clamped to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    size: usize,
}

impl Cursor {
    /// Cursor at the board centre
    pub fn new(size: usize) -> Self {
        let mid = size / 2;
        Self {
            pos: Pos::new(mid, mid),
            size,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Jump to a cell, e.g. after a mouse click. Off-board positions are clamped.
    pub fn set(&mut self, pos: Pos) {
        let last = self.size.saturating_sub(1);
        self.pos = Pos::new(pos.row.min(last), pos.col.min(last));
    }

    /// Apply a cursor action. Returns false for actions that are not movement.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let (dr, dc) = match action {
            GameAction::CursorUp => (-1, 0),
            GameAction::CursorDown => (1, 0),
            GameAction::CursorLeft => (0, -1),
            GameAction::CursorRight => (0, 1),
            _ => return false,
        };
        if let Some(next) = self.pos.offset(dr, dc, self.size) {
            self.pos = next;
        }
        true
    }
}
