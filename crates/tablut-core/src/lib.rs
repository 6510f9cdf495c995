//! Core types for Tablut.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`] for square contents and side membership
//! - [`Square`] and [`Direction`] for board coordinates
//! - [`Move`] and its text notation
//! - Precomputed rook rays used by move generation

mod mov;
mod piece;
pub mod rook;
mod square;

pub use mov::{Move, MoveParseError};
pub use piece::Piece;
pub use rook::{rook_moves, rook_squares};
pub use square::{Direction, Square, BOARD_SIZE, NUM_SQUARES};
