//! Scoring module - clear points, cross bonus and the high score
//!
//! Compatibility note:
//! The per-cell values are part of the saved-score format in practice (old
//! high scores were earned under them) and must not change:
//! - every cleared cell is worth `CLEAR_POINTS` (2)
//! - every cleared cell inside a cross earns `CROSS_BONUS_POINTS` (8) more

use crate::types::{CLEAR_POINTS, CROSS_BONUS_POINTS};

/// Points for one resolved match
pub fn score_for(cleared: usize, bonus: usize) -> u64 {
    (cleared as u64)
        .saturating_mul(CLEAR_POINTS)
        .saturating_add((bonus as u64).saturating_mul(CROSS_BONUS_POINTS))
}

/// Current score plus the best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreKeeper {
    score: u64,
    high_score: u64,
}

impl ScoreKeeper {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Zero the score for a new game; the high score is kept
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn add(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score to the current score if it is beaten.
    ///
    /// Returns true when the high score changed and should be persisted.
    pub fn maybe_promote_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Restore from disk. Never lowers the in-memory value.
    pub fn set_high_score(&mut self, value: u64) {
        self.high_score = self.high_score.max(value);
    }

    /// Restore the score of a saved session
    pub fn set_score(&mut self, value: u64) {
        self.score = value;
    }
}
