//! A game engine bound to its data directory.
//!
//! The session decides when to touch the disk:
//! - on open: load the high-score record, then resume the saved session or
//!   start a new game
//! - on a high-score promotion: rewrite the high-score record
//! - on new game and shutdown: rewrite the session snapshot (a finished game
//!   removes it instead)
//!
//! Write failures never interrupt play. They are logged and the latest one is
//! kept for the front-end to show.

use color_lines_core::{ConfigError, GameConfig, GameEngine, TurnReport};

use crate::error::StoreError;
use crate::files::Store;

#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    store: Store,
    last_warning: Option<StoreError>,
}

impl Session {
    /// Build the engine and restore whatever the store holds.
    ///
    /// A snapshot that does not fit `config`, or that is already over, is
    /// dropped in favor of a new game.
    pub fn open(store: Store, config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut engine = GameEngine::with_config(config, seed)?;
        engine.set_high_score(store.load_high_score());

        let resumed = match store.load_session() {
            Some(snap) => match engine.restore(&snap) {
                Ok(()) if engine.game_over().is_none() => true,
                Ok(()) => {
                    log::info!("saved session was already over");
                    false
                }
                Err(e) => {
                    log::warn!("discarding saved session: {}", e);
                    false
                }
            },
            None => false,
        };

        let mut session = Self {
            engine,
            store,
            last_warning: None,
        };
        if !resumed {
            session.new_game();
        }
        let engine = &session.engine;
        log::info!(
            "session open: {}x{} board, seed {}, game #{}",
            engine.config().board_size,
            engine.config().board_size,
            engine.seed(),
            engine.game_id()
        );
        Ok(session)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn activate(&mut self, row: usize, col: usize) -> TurnReport {
        let report = self.engine.activate(row, col);
        self.after_turn(&report);
        report
    }

    /// Start over and snapshot the fresh board
    pub fn new_game(&mut self) -> TurnReport {
        let report = self.engine.new_game();
        self.after_turn(&report);
        let saved = self.store.save_session(&self.engine.snapshot());
        self.note(saved);
        report
    }

    /// Persist everything on the way out.
    ///
    /// Returns the first write failure; later writes are still attempted.
    pub fn shutdown(self) -> Result<(), StoreError> {
        let high = self.store.save_high_score(self.engine.current_high_score());
        let session = if self.engine.game_over().is_some() {
            self.store.remove_session()
        } else {
            self.store.save_session(&self.engine.snapshot())
        };
        log::info!("session closed, score {}", self.engine.current_score());
        high.and(session)
    }

    /// Most recent persistence failure, cleared on read
    pub fn take_warning(&mut self) -> Option<StoreError> {
        self.last_warning.take()
    }

    fn after_turn(&mut self, report: &TurnReport) {
        if report.high_score_promoted {
            let saved = self
                .store
                .save_high_score(self.engine.current_high_score());
            self.note(saved);
        }
    }

    fn note(&mut self, result: Result<(), StoreError>) {
        if let Err(e) = result {
            log::warn!("{}", e);
            self.last_warning = Some(e);
        }
    }
}
