//! Tablut rules engine.
//!
//! This crate provides:
//! - [`Board`] - full game state with legal-move generation, capture
//!   resolution, win and repetition detection, and an undo log
//! - [`BoardError`] - rejected board operations
//! - [`perft`] - move generator validation
//!
//! # Example
//!
//! ```
//! use tablut_core::{Move, Piece};
//! use tablut_engine::Board;
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves(Piece::Black).len(), 80);
//!
//! let mv: Move = "d1-c".parse().unwrap();
//! board.make_move(mv).unwrap();
//! assert_eq!(board.turn(), Piece::White);
//!
//! board.undo();
//! assert_eq!(board.move_count(), 0);
//! ```

mod board;
mod error;
pub mod perft;

pub use board::{Board, ENCODED_LEN, INITIAL_MOVE_LIMIT};
pub use error::BoardError;
pub use perft::{perft, perft_divide};
