//! Integration tests for the Tablut rules engine.

use proptest::prelude::*;
use tablut_core::{Move, Piece, Square};
use tablut_engine::{Board, BoardError};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

#[test]
fn legal_white_moves() {
    let board = Board::new();
    let moves = board.legal_moves(Piece::White);

    assert_eq!(moves.len(), 56);

    assert!(!moves.contains(&mv("e7-8")));
    assert!(!moves.contains(&mv("e8-f")));

    assert!(moves.contains(&mv("e6-f")));
    assert!(moves.contains(&mv("f5-8")));
}

#[test]
fn legal_black_moves() {
    let board = Board::new();
    let moves = board.legal_moves(Piece::Black);

    assert_eq!(moves.len(), 80);

    assert!(!moves.contains(&mv("e8-7")));
    assert!(!moves.contains(&mv("e7-8")));

    assert!(moves.contains(&mv("f9-i")));
    assert!(moves.contains(&mv("h5-1")));
}

#[test]
fn black_moves_first() {
    assert_eq!(Board::new().turn(), Piece::Black);
}

#[test]
fn undo_after_three_moves() {
    let mut board = Board::new();
    board.make_move(mv("d1-c")).unwrap();
    board.make_move(mv("e4-c")).unwrap();
    board.make_move(mv("f1-i")).unwrap();
    board.undo();
    assert_eq!(board.get_at(8, 0), Piece::Empty);
    assert_eq!(board.get_at(5, 0), Piece::Black);
}

#[test]
fn white_sandwich_removes_black() {
    let mut board = Board::new();
    board.make_move(mv("a6-c")).unwrap();
    assert_eq!(board.get(sq("c6")), Piece::Black);
    // c7 and the defender on c5 flank c6.
    board.make_move(mv("e7-c")).unwrap();
    assert_eq!(board.get(sq("c6")), Piece::Empty);
    assert_eq!(board.winner(), None);

    board.undo();
    assert_eq!(board.get(sq("c6")), Piece::Black);
    assert_eq!(board.get(sq("e7")), Piece::White);
    assert_eq!(board.get(sq("c7")), Piece::Empty);
}

#[test]
fn king_escape_wins_for_white() {
    let mut board = Board::new();
    board.make_move(mv("a4-b")).unwrap();
    board.make_move(mv("e6-h")).unwrap();
    board.make_move(mv("b4-3")).unwrap();
    board.make_move(mv("e5-6")).unwrap();
    board.make_move(mv("b3-4")).unwrap();
    assert_eq!(board.winner(), None);
    board.make_move(mv("e6-a")).unwrap_err();
    board.make_move(mv("e6-b")).unwrap();
    assert_eq!(board.winner(), None);
    board.make_move(mv("b4-3")).unwrap();
    board.make_move(mv("b6-9")).unwrap();
    assert_eq!(board.king_position(), Some(sq("b9")));
    assert_eq!(board.winner(), Some(Piece::White));
}

#[test]
fn set_move_limit_rejects_exhausted_limit() {
    let mut board = Board::new();
    board.make_move(mv("d1-c")).unwrap();
    board.make_move(mv("e4-c")).unwrap();
    assert_eq!(
        board.set_move_limit(1),
        Err(BoardError::InvalidMoveLimit {
            limit: 1,
            move_count: 2
        })
    );
    assert_eq!(board.move_limit(), tablut_engine::INITIAL_MOVE_LIMIT);
}

#[test]
fn no_moves_after_limit() {
    let mut board = Board::new();
    board.set_move_limit(1).unwrap();
    board.make_move(mv("d1-c")).unwrap();
    board.make_move(mv("e4-c")).unwrap();
    assert!(matches!(
        board.make_move(mv("f1-i")),
        Err(BoardError::MoveLimitExceeded { .. })
    ));
}

/// A board snapshot covering everything undo must restore.
fn snapshot(board: &Board) -> (String, usize, Option<Piece>, bool, Option<Square>) {
    (
        board.encoded(),
        board.move_count(),
        board.winner(),
        board.repeated_position(),
        board.king_position(),
    )
}

proptest! {
    #[test]
    fn undo_reverses_any_move_sequence(choices in prop::collection::vec(any::<prop::sample::Index>(), 1..24)) {
        let mut board = Board::new();
        let before = snapshot(&board);

        let mut applied = 0;
        for choice in &choices {
            if board.winner().is_some() {
                break;
            }
            let moves = board.legal_moves(board.turn());
            if moves.is_empty() {
                break;
            }
            board.make_move(moves[choice.index(moves.len())]).unwrap();
            applied += 1;
        }

        for _ in 0..applied {
            board.undo();
        }
        prop_assert_eq!(snapshot(&board), before);
    }
}
