//! Static evaluation of undecided positions.

use tablut_engine::Board;

/// Scores a position the search could not resolve.
///
/// Positive values favor White, negative values favor Black. Scores must
/// stay far below the terminal win magnitudes.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Scores every undecided position as even.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralEvaluator;

impl Evaluator for NeutralEvaluator {
    fn evaluate(&self, _board: &Board) -> i32 {
        0
    }
}

/// Weight of each white piece, king included.
const WHITE_PIECE_WEIGHT: i32 = 20;
/// Weight of each black piece.
const BLACK_PIECE_WEIGHT: i32 = 20;
/// Weight of each open king route to an edge.
const KING_ROUTE_WEIGHT: i32 = 100;

/// Material balance plus king mobility.
///
/// An open route to the edge is worth more than a piece: with two open
/// routes the king cannot be stopped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let white = board.num_white_pieces() as i32 * WHITE_PIECE_WEIGHT;
        let black = board.num_black_pieces() as i32 * BLACK_PIECE_WEIGHT;
        let routes = board.king_to_edge() as i32 * KING_ROUTE_WEIGHT;
        white - black + routes
    }
}
