//! Game state module - the turn protocol
//!
//! This module ties together all core components: board, reachability, match
//! detection, the next-colors queue, scoring and the RNG. The engine is driven
//! by one kind of event, "cell activated", plus the new-game command. Every
//! call runs to completion and reports what happened in a [`TurnReport`].
//!
//! Selection states: `Idle` (nothing selected) and `Selected(pos)`. Once a
//! spawn fails or fills the board the game is over and every call is ignored
//! until [`GameEngine::new_game`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::colors::ColorManager;
use crate::config::{ConfigError, GameConfig};
use crate::matcher::{resolve_matches, MatchOutcome};
use crate::reach::is_valid_move;
use crate::rng::SpawnRng;
use crate::scoring::ScoreKeeper;
use crate::snapshot::{GameSnapshot, SnapshotError};
use crate::types::{ColorId, GameOver, GameOverReason, Pos, MAX_NEXT_LEN};

/// Everything a single engine call changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnReport {
    /// Cell selected by this activation
    pub selected: Option<Pos>,
    /// Ball moved from the first position to the second
    pub moved: Option<(Pos, Pos)>,
    /// Clear caused directly by the move
    pub move_match: MatchOutcome,
    /// Cells that received a spawned ball, in placement order
    pub spawned: ArrayVec<Pos, MAX_NEXT_LEN>,
    /// Clear caused by the spawn
    pub spawn_match: MatchOutcome,
    /// Points gained this turn
    pub points: u64,
    /// The high score moved up and should be persisted
    pub high_score_promoted: bool,
    /// Set when this call ended the game
    pub game_over: Option<GameOver>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    selection: Option<Pos>,
    colors: ColorManager,
    scores: ScoreKeeper,
    rng: SpawnRng,
    game_over: Option<GameOver>,
    /// Monotonic game counter (increments on every new game)
    game_id: u32,
}

impl GameEngine {
    /// Create an engine with the default 9x9 configuration and the given seed.
    ///
    /// The board starts empty; call [`new_game`](Self::new_game) or
    /// [`restore`](Self::restore) before play.
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            board: Board::new(config.board_size),
            selection: None,
            colors: ColorManager::new(config.palette_size, config.next_len),
            scores: ScoreKeeper::default(),
            rng: SpawnRng::new(seed),
            game_over: None,
            game_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    pub fn cell_color(&self, row: usize, col: usize) -> Option<ColorId> {
        self.board.get(row, col)
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection == Some(Pos::new(row, col))
    }

    pub fn current_score(&self) -> u64 {
        self.scores.score()
    }

    pub fn current_high_score(&self) -> u64 {
        self.scores.high_score()
    }

    /// Colors of the next spawn batch
    pub fn next_colors(&self) -> &[ColorId] {
        self.colors.peek()
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    /// Seed the high score from persisted storage. Never lowers it.
    pub fn set_high_score(&mut self, value: u64) {
        self.scores.set_high_score(value);
    }

    /// Reset for a new game and place the opening batch.
    ///
    /// Keeps the high score and the RNG stream.
    pub fn new_game(&mut self) -> TurnReport {
        self.board.clear();
        self.selection = None;
        self.scores.reset();
        self.game_over = None;
        self.game_id = self.game_id.wrapping_add(1);
        self.colors.generate_next(&mut self.rng);

        log::info!(
            "new game #{} (high score {})",
            self.game_id,
            self.scores.high_score()
        );

        let mut report = TurnReport::default();
        self.spawn_into(&mut report);
        report
    }

    /// Handle a click / key press on a cell.
    ///
    /// Panics if the cell is off the board.
    pub fn activate(&mut self, row: usize, col: usize) -> TurnReport {
        let target = Pos::new(row, col);
        // Bounds are checked even when the event is ignored.
        let target_cell = self.board.at(target);

        let mut report = TurnReport::default();
        if self.game_over.is_some() {
            return report;
        }

        let prior = self.selection.take();

        if target_cell.is_some() {
            self.selection = Some(target);
            report.selected = Some(target);
            return report;
        }

        let Some(from) = prior else {
            return report;
        };

        if !is_valid_move(&self.board, from, target) {
            // Illegal destination: keep the selection, change nothing.
            self.selection = Some(from);
            return report;
        }

        let color = self.board.at(from);
        self.board.put(target, color);
        self.board.put(from, None);
        report.moved = Some((from, target));

        report.move_match = self.resolve(&mut report);
        if !report.move_match.matched() {
            self.spawn_into(&mut report);
        }
        report
    }

    /// Spawn step on its own: place the queued colors on random empty cells.
    ///
    /// Ignored once the game is over.
    pub fn place_random_tiles(&mut self) -> TurnReport {
        let mut report = TurnReport::default();
        if self.game_over.is_none() {
            self.spawn_into(&mut report);
        }
        report
    }

    fn spawn_into(&mut self, report: &mut TurnReport) {
        let batch = self.colors.consume();

        if self.board.count_empty() < batch.len() {
            self.finish(GameOverReason::NoSpace, report);
            return;
        }

        let size = self.board.size();
        for color in batch {
            let pos = loop {
                let pos = self.rng.pick_cell(size);
                if self.board.at(pos).is_none() {
                    break pos;
                }
            };
            self.board.put(pos, Some(color));
            report.spawned.push(pos);
        }
        self.colors.generate_next(&mut self.rng);
        log::debug!("spawned at {:?}", report.spawned);

        report.spawn_match = self.resolve(report);

        if self.board.is_full() {
            self.finish(GameOverReason::BoardFull, report);
        }
    }

    /// Run match detection once and book the points.
    fn resolve(&mut self, report: &mut TurnReport) -> MatchOutcome {
        let outcome = resolve_matches(&mut self.board, self.config.match_len);
        if outcome.matched() {
            let points = outcome.points();
            self.scores.add(points);
            report.points += points;
            if self.scores.maybe_promote_high_score() {
                report.high_score_promoted = true;
                log::info!("new high score {}", self.scores.high_score());
            }
        }
        outcome
    }

    fn finish(&mut self, reason: GameOverReason, report: &mut TurnReport) {
        let over = GameOver {
            reason,
            final_score: self.scores.score(),
        };
        log::info!(
            "game #{} over ({}), final score {}",
            self.game_id,
            reason.as_str(),
            over.final_score
        );
        self.selection = None;
        self.game_over = Some(over);
        report.game_over = Some(over);
    }

    /// Capture the persistent part of the session
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_color_grid(),
            next_colors: self
                .colors
                .peek()
                .iter()
                .map(|&c| ColorId::encode(Some(c)))
                .collect(),
            score: self.scores.score(),
            high_score: self.scores.high_score(),
        }
    }

    /// Replace the session with a snapshot.
    ///
    /// The snapshot is validated in full before anything is touched; on error
    /// the engine is unchanged. A restored full board is already game over.
    pub fn restore(&mut self, snap: &GameSnapshot) -> Result<(), SnapshotError> {
        let board = Board::from_color_grid(
            &snap.board,
            self.config.board_size,
            self.config.palette_size,
        )?;
        let next = snap.decode_next_colors(self.config.next_len, self.config.palette_size)?;

        if self.colors.set_next(&next).is_err() {
            // decode_next_colors already checked length and palette.
            return Err(SnapshotError::NextLen {
                expected: self.config.next_len,
                found: next.len(),
            });
        }
        self.board = board;
        self.selection = None;
        self.scores.set_score(snap.score);
        self.scores.set_high_score(snap.high_score);
        self.scores.maybe_promote_high_score();
        self.game_id = self.game_id.wrapping_add(1);
        self.game_over = if self.board.is_full() {
            Some(GameOver {
                reason: GameOverReason::BoardFull,
                final_score: snap.score,
            })
        } else {
            None
        };

        log::info!(
            "restored game #{} with {} balls, score {}",
            self.game_id,
            snap.occupied_cells(),
            snap.score
        );
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
