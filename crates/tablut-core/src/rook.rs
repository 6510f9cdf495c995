//! Precomputed rook rays.
//!
//! For every square and direction the tables hold the squares reachable by
//! a straight slide, nearest first, together with the matching moves. Move
//! generation walks these rays and stops at the first occupied square.

use crate::square::{Direction, NUM_SQUARES};
use crate::{Move, Square};
use std::sync::OnceLock;

/// Rays for every square, indexed by `[square][direction]`.
pub struct RookTables {
    squares: Vec<[Vec<Square>; 4]>,
    moves: Vec<[Vec<Move>; 4]>,
}

static ROOK_TABLES: OnceLock<RookTables> = OnceLock::new();

/// Gets the global rook tables, initializing if necessary.
pub fn rook_tables() -> &'static RookTables {
    ROOK_TABLES.get_or_init(RookTables::new)
}

/// Squares reachable from `from` moving in `dir`, nearest first.
#[inline]
pub fn rook_squares(from: Square, dir: Direction) -> &'static [Square] {
    &rook_tables().squares[from.index()][dir.index()]
}

/// Moves from `from` in `dir`, nearest destination first.
#[inline]
pub fn rook_moves(from: Square, dir: Direction) -> &'static [Move] {
    &rook_tables().moves[from.index()][dir.index()]
}

impl RookTables {
    fn new() -> Self {
        let mut squares = Vec::with_capacity(NUM_SQUARES);
        let mut moves = Vec::with_capacity(NUM_SQUARES);

        for from in Square::all() {
            let rays: [Vec<Square>; 4] = Direction::ALL.map(|dir| {
                std::iter::successors(from.neighbor(dir), |sq| sq.neighbor(dir)).collect()
            });
            let ray_moves: [Vec<Move>; 4] = std::array::from_fn(|d| {
                rays[d]
                    .iter()
                    .filter_map(|&to| Move::new(from, to))
                    .collect()
            });
            squares.push(rays);
            moves.push(ray_moves);
        }

        RookTables { squares, moves }
    }
}
