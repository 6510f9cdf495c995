//! Engine-versus-engine play.

use crate::eval::Evaluator;
use crate::search::{Ai, SearchError, SearchOutcome};
use tablut_core::Piece;
use tablut_engine::Board;

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won(Piece),
    /// Neither side won before the move limit.
    MoveLimit,
}

/// Lets `ai` play both sides of `board` until the game is decided or the
/// move limit stops it.
///
/// `on_move` runs after each move with the updated board and the search
/// that chose the move.
pub fn self_play<E, F>(
    ai: &Ai<E>,
    board: &mut Board,
    mut on_move: F,
) -> Result<GameResult, SearchError>
where
    E: Evaluator,
    F: FnMut(&Board, &SearchOutcome),
{
    loop {
        if let Some(winner) = board.winner() {
            tracing::info!(?winner, moves = board.move_count(), "game over");
            return Ok(GameResult::Won(winner));
        }
        if board.check_move_limit().is_err() {
            tracing::info!(moves = board.move_count(), "move limit reached");
            return Ok(GameResult::MoveLimit);
        }

        let outcome = ai.search(board, board.turn())?;
        board.make_move(outcome.best_move)?;
        tracing::info!(
            ply = board.move_count(),
            mv = %outcome.best_move,
            score = outcome.score,
            "played"
        );
        on_move(board, &outcome);
    }
}
