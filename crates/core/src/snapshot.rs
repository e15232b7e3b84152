//! Serializable session state.
//!
//! A snapshot is the whole game in plain integers: the board grid (`-1` for an
//! empty cell, otherwise a palette index), the next-colors queue, the score and
//! the high score. Every field is required; a document missing any of them fails
//! to deserialize and is treated as no snapshot at all.

use serde::{Deserialize, Serialize};

use crate::types::{ColorId, EMPTY_CELL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Vec<i32>>,
    pub next_colors: Vec<i32>,
    pub score: u64,
    pub high_score: u64,
}

/// Why a snapshot could not be applied to an engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board has {found} rows, expected {expected}")]
    BoardRows { expected: usize, found: usize },

    #[error("board row {row} has {found} cells, expected {expected}")]
    BoardCols {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board cell ({row}, {col}) holds invalid color {value}")]
    BadCell { row: usize, col: usize, value: i32 },

    #[error("next-colors queue has {found} entries, expected {expected}")]
    NextLen { expected: usize, found: usize },

    #[error("next-colors queue holds invalid color {0}")]
    BadNextColor(i32),
}

impl GameSnapshot {
    /// All-empty snapshot for a `size` board and a queue of `next_len`
    pub fn empty(size: usize, next_len: usize) -> Self {
        Self {
            board: vec![vec![EMPTY_CELL; size]; size],
            next_colors: vec![EMPTY_CELL; next_len],
            score: 0,
            high_score: 0,
        }
    }

    /// Decode the next-colors queue against a palette
    pub fn decode_next_colors(
        &self,
        expected_len: usize,
        palette_size: u8,
    ) -> Result<Vec<ColorId>, SnapshotError> {
        if self.next_colors.len() != expected_len {
            return Err(SnapshotError::NextLen {
                expected: expected_len,
                found: self.next_colors.len(),
            });
        }
        self.next_colors
            .iter()
            .map(|&v| match ColorId::decode(v, palette_size) {
                Ok(Some(color)) => Ok(color),
                // An empty slot is as invalid as an out-of-palette one.
                Ok(None) | Err(_) => Err(SnapshotError::BadNextColor(v)),
            })
            .collect()
    }

    pub fn occupied_cells(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&v| v != EMPTY_CELL)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_shape() {
        let snap = GameSnapshot::empty(9, 3);
        assert_eq!(snap.board.len(), 9);
        assert!(snap.board.iter().all(|r| r.len() == 9));
        assert_eq!(snap.next_colors, vec![-1, -1, -1]);
        assert_eq!(snap.occupied_cells(), 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut snap = GameSnapshot::empty(3, 2);
        snap.board[1][2] = 4;
        snap.next_colors = vec![0, 6];
        snap.score = 58;
        snap.high_score = 120;

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"board":[[-1]],"next_colors":[0],"score":4}"#;
        assert!(serde_json::from_str::<GameSnapshot>(json).is_err());
    }

    #[test]
    fn test_decode_next_colors() {
        let mut snap = GameSnapshot::empty(3, 3);
        snap.next_colors = vec![0, 5, 6];
        assert_eq!(
            snap.decode_next_colors(3, 7),
            Ok(vec![ColorId::RED, ColorId::CYAN, ColorId::BROWN])
        );
        assert_eq!(
            snap.decode_next_colors(2, 7),
            Err(SnapshotError::NextLen {
                expected: 2,
                found: 3
            })
        );

        snap.next_colors = vec![0, -1, 6];
        assert_eq!(
            snap.decode_next_colors(3, 7),
            Err(SnapshotError::BadNextColor(-1))
        );
    }
}
