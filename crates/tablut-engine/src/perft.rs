//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the full game tree to a given depth. The
//! count is taken with make/undo on a single board, which also exercises
//! the undo log.

use crate::Board;

/// Counts the number of leaf nodes at the given depth.
///
/// Decided positions are leaves: no moves are generated below a win.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 || board.winner().is_some() {
        return 1;
    }

    let moves = board.legal_moves(board.turn());

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        if board.make_move(m).is_err() {
            continue;
        }
        nodes += perft(board, depth - 1);
        board.undo();
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &mut Board, depth: u32) -> Vec<(String, u64)> {
    let moves = board.legal_moves(board.turn());
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        if board.make_move(m).is_err() {
            continue;
        }
        let nodes = if depth > 1 {
            perft(board, depth - 1)
        } else {
            1
        };
        board.undo();
        results.push((m.to_notation(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
