//! Property tests - reachability and match detection on random boards

use proptest::prelude::*;

use color_lines::core::{detect_matches, has_path, is_valid_move, resolve_matches, Board};
use color_lines::core::matcher::detect_crosses;
use color_lines::types::{ColorId, Pos};

const SIZE: usize = 9;

/// Random 9x9 board: each cell empty or one of three colors
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::weighted(0.45, 0u8..3), SIZE * SIZE).prop_map(|cells| {
        let mut board = Board::new(SIZE);
        for (i, cell) in cells.into_iter().enumerate() {
            board.set(i / SIZE, i % SIZE, cell.map(ColorId::new));
        }
        board
    })
}

fn pos_strategy() -> impl Strategy<Value = Pos> {
    (0..SIZE, 0..SIZE).prop_map(|(row, col)| Pos::new(row, col))
}

proptest! {
    #[test]
    fn path_is_symmetric(board in board_strategy(), a in pos_strategy(), b in pos_strategy()) {
        prop_assert_eq!(has_path(&board, a, b), has_path(&board, b, a));
    }

    #[test]
    fn occupied_destination_is_never_valid(board in board_strategy(), a in pos_strategy(), b in pos_strategy()) {
        if board.at(b).is_some() {
            prop_assert!(!is_valid_move(&board, a, b));
        }
    }

    #[test]
    fn cleared_counts_distinct_marked_cells(board in board_strategy()) {
        let marked = detect_matches(&board, 5).count();
        let mut after = board.clone();
        let outcome = resolve_matches(&mut after, 5);
        prop_assert_eq!(outcome.cleared, marked);
        prop_assert_eq!(after.count_empty(), board.count_empty() + marked);
        prop_assert!(outcome.bonus <= outcome.cleared);
    }

    #[test]
    fn cross_pass_is_idempotent(board in board_strategy()) {
        let marked = detect_matches(&board, 5);
        prop_assert_eq!(detect_crosses(&marked), detect_crosses(&marked));
    }

    #[test]
    fn resolving_twice_clears_nothing_more(board in board_strategy()) {
        let mut board = board;
        resolve_matches(&mut board, 5);
        prop_assert!(!resolve_matches(&mut board, 5).matched());
    }
}
