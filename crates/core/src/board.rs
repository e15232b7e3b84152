//! Board module - manages the game grid
//!
//! The board is an N×N grid where each cell is empty or holds one ball color.
//! Uses a flat vector in row-major order for cache locality; the side length is
//! fixed at construction.
//! Coordinates: (row, col), both in `0..size`, row 0 at the top.
//!
//! Out-of-range coordinates are a caller bug and panic.

use crate::types::{Cell, ColorId, Pos};

/// The game board - `size` x `size` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from (row, col), panicking when out of range
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    #[inline]
    pub fn at(&self, pos: Pos) -> Cell {
        self.get(pos.row, pos.col)
    }

    #[inline]
    pub fn put(&mut self, pos: Pos, cell: Cell) {
        self.set(pos.row, pos.col, cell);
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// True iff every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| Pos::new(i / size, i % size))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Encode as the snapshot integer grid (`-1` for empty)
    pub fn to_color_grid(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&c| ColorId::encode(c)).collect())
            .collect()
    }

    /// Build a board from a snapshot integer grid.
    ///
    /// The grid must be exactly `size` rows of `size` values in
    /// `-1..palette_size`.
    pub fn from_color_grid(
        grid: &[Vec<i32>],
        size: usize,
        palette_size: u8,
    ) -> Result<Self, crate::SnapshotError> {
        use crate::SnapshotError;

        if grid.len() != size {
            return Err(SnapshotError::BoardRows {
                expected: size,
                found: grid.len(),
            });
        }

        let mut board = Board::new(size);
        for (row, values) in grid.iter().enumerate() {
            if values.len() != size {
                return Err(SnapshotError::BoardCols {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &v) in values.iter().enumerate() {
                let cell = ColorId::decode(v, palette_size)
                    .map_err(|value| SnapshotError::BadCell { row, col, value })?;
                board.set(row, col, cell);
            }
        }
        Ok(board)
    }

    /// Parse a compact text layout, one string per row.
    ///
    /// `.` is empty and a digit is a palette index. Intended for tests and
    /// benches; panics on malformed input.
    ///
    /// ```
    /// use color_lines_core::Board;
    /// use color_lines_core::types::ColorId;
    ///
    /// let board = Board::from_rows(&["0..", ".1.", "..2"]);
    /// assert_eq!(board.get(1, 1), Some(ColorId::GREEN));
    /// assert_eq!(board.count_empty(), 6);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), size, "row {} has wrong width", row);
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    d => Some(ColorId::new(
                        d.to_digit(10).unwrap_or_else(|| panic!("bad cell {:?}", d)) as u8,
                    )),
                };
                board.set(row, col, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}
