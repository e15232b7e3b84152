//! Reachability - can a ball slide from one cell to another?
//!
//! Breadth-first search over 4-adjacent empty cells. The moving ball's own
//! cell is the search origin and is passable even though it is occupied. The
//! target is recognised as soon as it shows up as a neighbor, before the
//! emptiness check, so `has_path(a, b) == has_path(b, a)` on every board.

use std::collections::VecDeque;

use crate::board::Board;
use crate::types::Pos;

/// Up, down, left, right
const NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True iff `to` can be reached from `from` through empty cells.
///
/// Pure query; panics if either position is outside the board.
pub fn has_path(board: &Board, from: Pos, to: Pos) -> bool {
    let size = board.size();
    assert!(from.row < size && from.col < size, "origin {:?} off board", from);
    assert!(to.row < size && to.col < size, "target {:?} off board", to);

    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::with_capacity(size * size);

    visited[from.row * size + from.col] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }

        for &(dr, dc) in &NEIGHBORS {
            let Some(next) = current.offset(dr, dc, size) else {
                continue;
            };
            if next == to {
                return true;
            }
            let idx = next.row * size + next.col;
            if !visited[idx] && board.at(next).is_none() {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

/// A move is legal when the destination is empty and reachable.
pub fn is_valid_move(board: &Board, from: Pos, to: Pos) -> bool {
    board.at(to).is_none() && has_path(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_board_path() {
        let board = Board::from_rows(&["0....", ".....", ".....", ".....", "....."]);
        assert!(has_path(&board, Pos::new(0, 0), Pos::new(4, 4)));
        assert!(is_valid_move(&board, Pos::new(0, 0), Pos::new(4, 4)));
    }

    #[test]
    fn test_walled_off_target() {
        // The top-right corner is sealed by a diagonal wall.
        let board = Board::from_rows(&["0..1.", "...11", ".....", ".....", "....."]);
        assert!(!has_path(&board, Pos::new(0, 0), Pos::new(0, 4)));
        assert!(!is_valid_move(&board, Pos::new(0, 0), Pos::new(0, 4)));
        assert!(has_path(&board, Pos::new(0, 0), Pos::new(4, 4)));
    }

    #[test]
    fn test_diagonal_gaps_do_not_connect() {
        let board = Board::from_rows(&["01.", "1..", "..."]);
        assert!(!has_path(&board, Pos::new(0, 0), Pos::new(2, 2)));
    }

    #[test]
    fn test_origin_is_passable_while_occupied() {
        let board = Board::from_rows(&["2..", "...", "..."]);
        assert!(is_valid_move(&board, Pos::new(0, 0), Pos::new(0, 1)));
    }

    #[test]
    fn test_occupied_destination_is_never_valid() {
        let board = Board::from_rows(&["23.", "...", "..."]);
        assert!(has_path(&board, Pos::new(0, 0), Pos::new(0, 1)));
        assert!(!is_valid_move(&board, Pos::new(0, 0), Pos::new(0, 1)));
    }

    #[test]
    fn test_symmetry_with_occupied_endpoint() {
        let board = Board::from_rows(&["0..", "111", "..2"]);
        let a = Pos::new(0, 0);
        let b = Pos::new(0, 2);
        let c = Pos::new(2, 2);
        assert_eq!(has_path(&board, a, b), has_path(&board, b, a));
        assert_eq!(has_path(&board, a, c), has_path(&board, c, a));
        assert!(!has_path(&board, a, c));
    }

    #[test]
    fn test_completely_boxed_in() {
        let board = Board::from_rows(&["010", "1..", "0.."]);
        assert!(!has_path(&board, Pos::new(0, 0), Pos::new(2, 2)));
        // Neighbors of the origin are reachable even if occupied.
        assert!(has_path(&board, Pos::new(0, 0), Pos::new(0, 1)));
    }
}
