//! Match detection - lines of `match_len` same-colored balls
//!
//! One pass over the board marks every cell that belongs to a run of at least
//! `match_len` identical colors in any of four directions (right, down,
//! down-right, up-right). Runs are found by testing each window of exactly
//! `match_len` cells, so a longer run is covered by several overlapping
//! windows; marking is an idempotent union, which also merges runs that cross
//! each other.
//!
//! A second pass looks for plus-shaped crosses inside the marked set: an
//! interior marked cell whose four orthogonal neighbors are marked too. The five
//! cells of each cross are bonus cells. Bonus cells are counted once no matter
//! how many cross centers cover them.

use crate::board::Board;
use crate::types::Pos;

/// Scan directions as (drow, dcol)
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Boolean grid over the board, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMask {
    size: usize,
    bits: Vec<bool>,
}

impl CellMask {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            bits: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.size + col]
    }

    #[inline]
    pub fn mark(&mut self, row: usize, col: usize) {
        self.bits[row * self.size + col] = true;
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Marked cells in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(move |(i, _)| Pos::new(i / size, i % size))
    }
}

/// Result of one detection-and-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Distinct cells cleared
    pub cleared: usize,
    /// Cleared cells that belonged to a cross
    pub bonus: usize,
}

impl MatchOutcome {
    pub fn matched(&self) -> bool {
        self.cleared > 0
    }

    pub fn points(&self) -> u64 {
        crate::scoring::score_for(self.cleared, self.bonus)
    }
}

/// Can a window of `len` cells start at `(row, col)` and step by `(dr, dc)`
/// without leaving the board?
#[inline]
fn window_fits(row: usize, col: usize, dr: isize, dc: isize, len: usize, size: usize) -> bool {
    let span = len - 1;
    let rows_ok = match dr {
        1 => row + span < size,
        -1 => row >= span,
        _ => true,
    };
    let cols_ok = match dc {
        1 => col + span < size,
        _ => true,
    };
    rows_ok && cols_ok
}

#[inline]
fn step(row: usize, col: usize, dr: isize, dc: isize, i: usize) -> (usize, usize) {
    (
        (row as isize + dr * i as isize) as usize,
        (col as isize + dc * i as isize) as usize,
    )
}

/// Mark every cell that is part of a run of at least `match_len` of one color.
pub fn detect_matches(board: &Board, match_len: usize) -> CellMask {
    let size = board.size();
    let mut to_clear = CellMask::new(size);

    for row in 0..size {
        for col in 0..size {
            let Some(color) = board.get(row, col) else {
                continue;
            };

            for &(dr, dc) in &DIRECTIONS {
                if !window_fits(row, col, dr, dc, match_len, size) {
                    continue;
                }
                let same = (1..match_len).all(|i| {
                    let (r, c) = step(row, col, dr, dc, i);
                    board.get(r, c) == Some(color)
                });
                if same {
                    for i in 0..match_len {
                        let (r, c) = step(row, col, dr, dc, i);
                        to_clear.mark(r, c);
                    }
                }
            }
        }
    }

    to_clear
}

/// Mark the plus-shaped crosses contained in `to_clear`.
///
/// Pure function of its input, so running it twice gives the same mask.
pub fn detect_crosses(to_clear: &CellMask) -> CellMask {
    let size = to_clear.size();
    let mut crosses = CellMask::new(size);
    if size < 3 {
        return crosses;
    }

    for row in 1..size - 1 {
        for col in 1..size - 1 {
            if to_clear.get(row, col)
                && to_clear.get(row - 1, col)
                && to_clear.get(row + 1, col)
                && to_clear.get(row, col - 1)
                && to_clear.get(row, col + 1)
            {
                crosses.mark(row, col);
                crosses.mark(row - 1, col);
                crosses.mark(row + 1, col);
                crosses.mark(row, col - 1);
                crosses.mark(row, col + 1);
            }
        }
    }

    crosses
}

/// Detect, clear and tally. The board is left with every matched cell empty.
pub fn resolve_matches(board: &mut Board, match_len: usize) -> MatchOutcome {
    let to_clear = detect_matches(board, match_len);
    if to_clear.is_empty() {
        return MatchOutcome::default();
    }
    let crosses = detect_crosses(&to_clear);

    let mut outcome = MatchOutcome::default();
    for pos in to_clear.positions() {
        board.put(pos, None);
        outcome.cleared += 1;
        if crosses.get(pos.row, pos.col) {
            outcome.bonus += 1;
        }
    }

    log::debug!(
        "cleared {} cells ({} bonus) for {} points",
        outcome.cleared,
        outcome.bonus,
        outcome.points()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorId;

    const EMPTY9: &str = ".........";

    fn board9(rows: &[&str]) -> Board {
        let mut all: Vec<&str> = rows.to_vec();
        while all.len() < 9 {
            all.push(EMPTY9);
        }
        Board::from_rows(&all)
    }

    #[test]
    fn test_horizontal_run_of_five() {
        let mut board = board9(&[EMPTY9, EMPTY9, EMPTY9, EMPTY9, "00000...."]);
        let outcome = resolve_matches(&mut board, 5);
        assert_eq!(outcome, MatchOutcome { cleared: 5, bonus: 0 });
        assert_eq!(outcome.points(), 10);
        assert_eq!(board.count_empty(), 81);
    }

    #[test]
    fn test_four_is_not_enough() {
        let mut board = board9(&["1111....."]);
        assert!(!resolve_matches(&mut board, 5).matched());
        assert_eq!(board.count_empty(), 81 - 4);
    }

    #[test]
    fn test_mixed_colors_do_not_match() {
        let mut board = board9(&["11211...."]);
        assert!(!resolve_matches(&mut board, 5).matched());
    }

    #[test]
    fn test_vertical_run() {
        let mut board = board9(&[
            "..3......",
            "..3......",
            "..3......",
            "..3......",
            "..3......",
        ]);
        let outcome = resolve_matches(&mut board, 5);
        assert_eq!(outcome.cleared, 5);
    }

    #[test]
    fn test_diagonal_runs() {
        // down-right
        let mut board = board9(&[
            "2........",
            ".2.......",
            "..2......",
            "...2.....",
            "....2....",
        ]);
        assert_eq!(resolve_matches(&mut board, 5).cleared, 5);

        // up-right, ending in the top-right corner
        let mut board = board9(&[
            "........4",
            ".......4.",
            "......4..",
            ".....4...",
            "....4....",
        ]);
        assert_eq!(resolve_matches(&mut board, 5).cleared, 5);
    }

    #[test]
    fn test_long_run_counts_cells_not_windows() {
        // Seven in a row is covered by three windows but clears seven cells.
        let mut board = board9(&["5555555.."]);
        let outcome = resolve_matches(&mut board, 5);
        assert_eq!(outcome.cleared, 7);
        assert_eq!(outcome.bonus, 0);
        assert_eq!(outcome.points(), 14);
    }

    #[test]
    fn test_crossing_runs_share_a_cell() {
        // A row and a column of five crossing at (4, 4): nine distinct cells.
        let mut board = board9(&[
            ".........",
            ".........",
            "....1....",
            "....1....",
            "..11111..",
            "....1....",
            "....1....",
        ]);
        let to_clear = detect_matches(&board, 5);
        assert_eq!(to_clear.count(), 9);

        let outcome = resolve_matches(&mut board, 5);
        assert_eq!(outcome.cleared, 9);
        // The centre and its four arms form one cross.
        assert_eq!(outcome.bonus, 5);
        assert_eq!(outcome.points(), 9 * 2 + 5 * 8);
    }

    #[test]
    fn test_single_cross_scores_fifty() {
        let mut mask = CellMask::new(9);
        for (r, c) in [(4, 4), (3, 4), (5, 4), (4, 3), (4, 5)] {
            mask.mark(r, c);
        }
        let crosses = detect_crosses(&mask);
        assert_eq!(crosses.count(), 5);
        let outcome = MatchOutcome {
            cleared: mask.count(),
            bonus: crosses.count(),
        };
        assert_eq!(outcome.points(), 50);
    }

    #[test]
    fn test_cross_detection_is_idempotent() {
        let board = board9(&[
            "....1....",
            "....1....",
            "....1....",
            "....1....",
            "111111111",
        ]);
        let to_clear = detect_matches(&board, 5);
        let first = detect_crosses(&to_clear);
        let second = detect_crosses(&to_clear);
        assert_eq!(first, second);
    }

    #[test]
    fn test_overlapping_crosses_count_bonus_once() {
        // A 3x3 block of marks has a single interior centre.
        let mut mask = CellMask::new(5);
        for r in 0..3 {
            for c in 0..3 {
                mask.mark(r, c);
            }
        }
        assert_eq!(detect_crosses(&mask).count(), 5);

        // A 3x4 block has two adjacent centres whose crosses share two cells.
        let mut mask = CellMask::new(5);
        for r in 0..3 {
            for c in 0..4 {
                mask.mark(r, c);
            }
        }
        let crosses = detect_crosses(&mask);
        assert_eq!(crosses.count(), 8);
        assert!(crosses.get(1, 1) && crosses.get(1, 2));
        assert!(!crosses.get(0, 0));
    }

    #[test]
    fn test_cross_on_edge_is_not_counted() {
        // Corner L shape: no interior centre.
        let mut board = board9(&["000000000", "0........", "0........", "0........", "0........"]);
        let outcome = resolve_matches(&mut board, 5);
        assert_eq!(outcome.cleared, 13);
        assert_eq!(outcome.bonus, 0);
    }

    #[test]
    fn test_short_match_len_on_small_board() {
        let mut board = Board::from_rows(&["000", "...", "..."]);
        let outcome = resolve_matches(&mut board, 3);
        assert_eq!(outcome.cleared, 3);
        assert_eq!(board.get(0, 0), None);
        assert_eq!(board.get(0, 2), None);
    }

    #[test]
    fn test_other_cells_survive_clear() {
        let mut board = board9(&["00000....", "6........"]);
        resolve_matches(&mut board, 5);
        assert_eq!(board.get(1, 0), Some(ColorId::BROWN));
        assert_eq!(board.count_empty(), 80);
    }
}
