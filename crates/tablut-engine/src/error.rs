//! Errors raised by board operations.

use tablut_core::Move;
use thiserror::Error;

/// Error type for board operations.
///
/// Every variant is a rejected request: the board is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// No further move fits within the move limit.
    #[error("move limit of {limit} exceeded after {move_count} moves")]
    MoveLimitExceeded { limit: usize, move_count: usize },

    /// The requested limit is already exhausted by the moves played.
    #[error("move limit {limit} is too small for {move_count} moves played")]
    InvalidMoveLimit { limit: usize, move_count: usize },

    /// An encoded position could not be decoded.
    #[error("invalid encoded position: {0}")]
    InvalidEncoding(String),
}
