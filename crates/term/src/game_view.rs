//! GameView: maps a `core::GameEngine` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It reads only the engine's query interface,
//! so the view never owns game state; the keyboard cursor and the status line
//! are front-end state passed in through [`FrontState`].

use crate::core::GameEngine;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorId, GameOver, Pos};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state drawn on top of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontState<'a> {
    /// Keyboard cursor, highlighted on the board
    pub cursor: Option<Pos>,
    /// One-line status, e.g. a persistence warning
    pub status: Option<&'a str>,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const SELECTED_BG: Rgb = Rgb::new(150, 150, 60);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Ball colors by palette index. The first seven follow the default names.
const PALETTE: [Rgb; 16] = [
    Rgb::new(230, 70, 70),   // red
    Rgb::new(90, 210, 100),  // green
    Rgb::new(80, 120, 230),  // blue
    Rgb::new(240, 220, 80),  // yellow
    Rgb::new(210, 100, 220), // magenta
    Rgb::new(80, 220, 220),  // cyan
    Rgb::new(170, 110, 60),  // brown
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(150, 150, 150),
    Rgb::new(255, 150, 190),
    Rgb::new(140, 255, 200),
    Rgb::new(150, 90, 255),
    Rgb::new(200, 255, 90),
    Rgb::new(0, 140, 140),
    Rgb::new(140, 0, 40),
];

pub fn ball_rgb(color: ColorId) -> Rgb {
    PALETTE[color.index() as usize % PALETTE.len()]
}

/// A lightweight terminal renderer for the Color Lines board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps the grid roughly square in typical terminal fonts.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

/// Top-left corner of the board frame and its outer size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, board_size: usize, viewport: Viewport) -> Layout {
        let w = (board_size as u16) * self.cell_w + 2;
        let h = (board_size as u16) * self.cell_h + 2;
        Layout {
            // Leave room for the side panel on the right.
            x: viewport.width.saturating_sub(w + 18) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Board cell under terminal position `(x, y)`, if any.
    ///
    /// Uses the same layout as rendering, so a click lands on the cell it was
    /// drawn over.
    pub fn cell_at(&self, board_size: usize, viewport: Viewport, x: u16, y: u16) -> Option<Pos> {
        let layout = self.layout(board_size, viewport);
        let rel_x = x.checked_sub(layout.x + 1)?;
        let rel_y = y.checked_sub(layout.y + 1)?;
        let col = (rel_x / self.cell_w) as usize;
        let row = (rel_y / self.cell_h) as usize;
        (row < board_size && col < board_size).then_some(Pos::new(row, col))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        game: &GameEngine,
        front: FrontState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let size = game.board().size();
        let layout = self.layout(size, viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        self.draw_border(fb, layout, border);

        for row in 0..size {
            for col in 0..size {
                self.draw_cell(fb, layout, game, front.cursor, row, col);
            }
        }

        self.draw_side_panel(fb, game, viewport, layout);

        if let Some(over) = game.game_over() {
            self.draw_game_over(fb, layout, over);
        }

        if let Some(status) = front.status {
            let y = layout.y.saturating_add(layout.h);
            let style = CellStyle::new(Rgb::new(240, 180, 80), BLACK);
            fb.put_str(layout.x, y, status, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameEngine, front: FrontState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, front, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: Layout, style: CellStyle) {
        let (x, y, w, h) = (l.x, l.y, l.w, l.h);
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        game: &GameEngine,
        cursor: Option<Pos>,
        row: usize,
        col: usize,
    ) {
        let bg = if game.is_selected(row, col) {
            SELECTED_BG
        } else if cursor == Some(Pos::new(row, col)) {
            CURSOR_BG
        } else {
            BOARD_BG
        };

        let (ch, style) = match game.cell_color(row, col) {
            Some(color) => ('●', CellStyle::new(ball_rgb(color), bg).bold()),
            None => ('·', CellStyle::new(Rgb::new(90, 90, 100), bg).dim()),
        };

        let px = l.x + 1 + (col as u16) * self.cell_w;
        let py = l.y + 1 + (row as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &GameEngine, viewport: Viewport, l: Layout) {
        let panel_x = l.x.saturating_add(l.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        let mut y = l.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, game.current_score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, game.current_high_score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for (i, &color) in game.next_colors().iter().enumerate() {
            let style = CellStyle::new(ball_rgb(color), BLACK).bold();
            fb.put_char(panel_x + (i as u16) * 2, y, '●', style);
        }
        y = y.saturating_add(2);

        let help = CellStyle::default().dim();
        for line in ["arrows move", "enter select", "n new game", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, l: Layout, over: GameOver) {
        let mid_y = l.y.saturating_add(l.h / 2);
        let title = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
        let body = CellStyle::new(Rgb::new(230, 230, 230), BLACK);

        self.put_centered(fb, l, mid_y.saturating_sub(1), "GAME OVER", title);
        self.put_centered(fb, l, mid_y, over.reason.message(), body);
        self.put_centered(fb, l, mid_y.saturating_add(1), "press n to play again", body);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, l: Layout, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = l.x.saturating_add(l.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
