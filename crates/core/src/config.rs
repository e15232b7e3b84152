//! Engine configuration.
//!
//! Board size, match length, palette size and queue length are fixed for the
//! lifetime of one engine and injected at construction.

use crate::types::{
    DEFAULT_BOARD_SIZE, DEFAULT_MATCH_LEN, DEFAULT_NEXT_LEN, DEFAULT_PALETTE_SIZE, MAX_BOARD_SIZE,
    MAX_NEXT_LEN, MAX_PALETTE_SIZE,
};

/// Errors from [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} out of range (1..=32)")]
    BoardSize(usize),

    #[error("match length {match_len} out of range (2..={board_size})")]
    MatchLen { match_len: usize, board_size: usize },

    #[error("palette size {0} out of range (1..=16)")]
    PaletteSize(u8),

    #[error("next-colors length {0} out of range (1..=8)")]
    NextLen(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub match_len: usize,
    pub palette_size: u8,
    pub next_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            match_len: DEFAULT_MATCH_LEN,
            palette_size: DEFAULT_PALETTE_SIZE,
            next_len: DEFAULT_NEXT_LEN,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.match_len < 2 || self.match_len > self.board_size {
            return Err(ConfigError::MatchLen {
                match_len: self.match_len,
                board_size: self.board_size,
            });
        }
        if self.palette_size == 0 || self.palette_size > MAX_PALETTE_SIZE {
            return Err(ConfigError::PaletteSize(self.palette_size));
        }
        if self.next_len == 0 || self.next_len > MAX_NEXT_LEN {
            return Err(ConfigError::NextLen(self.next_len));
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_count(), 81);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = GameConfig::default();

        let c = GameConfig { board_size: 0, ..base };
        assert_eq!(c.validate(), Err(ConfigError::BoardSize(0)));

        let c = GameConfig { board_size: 33, ..base };
        assert_eq!(c.validate(), Err(ConfigError::BoardSize(33)));

        let c = GameConfig { match_len: 10, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::MatchLen { .. })));

        let c = GameConfig { match_len: 1, ..base };
        assert!(matches!(c.validate(), Err(ConfigError::MatchLen { .. })));

        let c = GameConfig { palette_size: 0, ..base };
        assert_eq!(c.validate(), Err(ConfigError::PaletteSize(0)));

        let c = GameConfig { next_len: 9, ..base };
        assert_eq!(c.validate(), Err(ConfigError::NextLen(9)));
    }

    #[test]
    fn small_boards_are_allowed() {
        let c = GameConfig {
            board_size: 5,
            match_len: 3,
            palette_size: 2,
            next_len: 2,
        };
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NextLen(0).to_string(),
            "next-colors length 0 out of range (1..=8)"
        );
    }
}
