//! Terminal Color Lines runner (default binary).
//!
//! Blocking event loop: nothing moves on its own, so the loop sleeps in
//! `event::read` until a key, a click or a resize arrives. It uses crossterm for
//! input and the framebuffer renderer from the `term` crate.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::Result;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};

use color_lines::cli::AppConfig;
use color_lines::input::{handle_key_event, should_quit, Cursor};
use color_lines::store::{Session, Store};
use color_lines::term::{FrameBuffer, FrontState, GameView, TerminalRenderer, Viewport};
use color_lines::types::GameAction;

const LOG_FILE: &str = "color-lines.log";

fn main() -> Result<()> {
    let config = AppConfig::from_env_and_args()?;
    init_logging(&config.data_dir);
    log::info!(
        "starting with seed {} in {}",
        config.seed,
        config.data_dir.display()
    );

    let mut session = Session::open(Store::new(&config.data_dir), config.game, config.seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(e) = session.shutdown() {
        log::warn!("could not save on exit: {}", e);
        eprintln!("warning: {}", e);
    }
    result
}

/// Log to a file in the data directory; the terminal belongs to the game.
///
/// Default filter is `warn`, overridable through `RUST_LOG`.
fn init_logging(dir: &Path) {
    let file = fs::create_dir_all(dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    });
    match file {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("logging disabled: {}", e),
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new(session.engine().board().size());
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<String> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let front = FrontState {
            cursor: Some(cursor.pos()),
            status: status.as_deref(),
        };
        view.render_into(session.engine(), front, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Activate) => {
                        let pos = cursor.pos();
                        session.activate(pos.row, pos.col);
                    }
                    Some(GameAction::NewGame) => {
                        session.new_game();
                        status = None;
                    }
                    Some(action) => {
                        cursor.apply(action);
                    }
                    None => {}
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let size = session.engine().board().size();
                    if let Some(pos) = view.cell_at(size, viewport, mouse.column, mouse.row) {
                        cursor.set(pos);
                        session.activate(pos.row, pos.col);
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }

        if let Some(e) = session.take_warning() {
            status = Some(format!("save failed: {}", e));
        }
    }
}
