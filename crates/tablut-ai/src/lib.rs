//! Automated Tablut player.
//!
//! This crate provides:
//! - [`Ai`] - fixed-depth alpha-beta search over a [`tablut_engine::Board`]
//! - [`Evaluator`] - static scoring of undecided positions
//! - [`SearchConfig`] - search tuning, loadable from TOML
//! - [`self_play`] - engine-versus-engine games
//!
//! # Example
//!
//! ```
//! use tablut_ai::{Ai, SearchConfig};
//! use tablut_core::Piece;
//! use tablut_engine::Board;
//!
//! let config = SearchConfig {
//!     opening_depth: 1,
//!     ..SearchConfig::default()
//! };
//! let board = Board::new();
//! let mv = Ai::new(config).find_move(&board, Piece::Black).unwrap();
//! assert!(board.is_legal(mv));
//! ```

pub mod config;
pub mod eval;
pub mod game;
pub mod search;

pub use config::{ConfigError, SearchConfig, WILL_WIN_VALUE, WINNING_VALUE};
pub use eval::{Evaluator, MaterialEvaluator, NeutralEvaluator};
pub use game::{self_play, GameResult};
pub use search::{Ai, SearchError, SearchOutcome, Sense};
