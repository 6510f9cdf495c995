//! Fixed-depth alpha-beta search.
//!
//! The search works on a private copy of the board and walks the tree by
//! applying a move, recursing and undoing it, so a single board serves the
//! whole search.

use crate::config::SearchConfig;
use crate::eval::{Evaluator, NeutralEvaluator};
use tablut_core::{Move, Piece};
use tablut_engine::{Board, BoardError};
use thiserror::Error;

/// Errors returned by [`Ai::search`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Only `White` and `Black` can be searched for.
    #[error("cannot search for {0:?}")]
    InvalidSide(Piece),
    /// The game already has a winner.
    #[error("game is over, {0:?} won")]
    GameOver(Piece),
    /// The side searched for is not the side to move.
    #[error("{side:?} is not on turn, {turn:?} is")]
    NotOnTurn { side: Piece, turn: Piece },
    /// The side has nothing to play.
    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Piece),
    /// Searching needs at least one ply.
    #[error("search depth must be at least 1")]
    ZeroDepth,
    /// Deeper wins would score at or above an immediate win.
    #[error("search depth {0} is too deep for the configured win values")]
    DepthTooLarge(u32),
    #[error("{0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Which way a node optimizes the score.
///
/// White maximizes and Black minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Max,
    Min,
}

impl Sense {
    /// Returns the sense searched for `side`, or `None` unless `side` is
    /// `White` or `Black`.
    pub const fn for_side(side: Piece) -> Option<Sense> {
        match side {
            Piece::White => Some(Sense::Max),
            Piece::Black => Some(Sense::Min),
            Piece::Empty | Piece::King => None,
        }
    }

    /// Returns the side that moves at a node of this sense.
    pub const fn side(self) -> Piece {
        match self {
            Sense::Max => Piece::White,
            Sense::Min => Piece::Black,
        }
    }

    pub const fn flip(self) -> Sense {
        match self {
            Sense::Max => Sense::Min,
            Sense::Min => Sense::Max,
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Score of `best_move`, positive favoring White.
    pub score: i32,
    /// Plies searched.
    pub depth: u32,
    /// Nodes visited.
    pub nodes: u64,
}

/// An automated player.
#[derive(Debug, Clone, Default)]
pub struct Ai<E = NeutralEvaluator> {
    config: SearchConfig,
    evaluator: E,
}

impl Ai<NeutralEvaluator> {
    /// Creates a player that scores every undecided position as even.
    pub fn new(config: SearchConfig) -> Self {
        Ai {
            config,
            evaluator: NeutralEvaluator,
        }
    }
}

impl<E: Evaluator> Ai<E> {
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Ai { config, evaluator }
    }

    /// Returns the depth searched on `board`, which grows once the game
    /// leaves the opening.
    pub fn max_depth(&self, board: &Board) -> u32 {
        self.config.depth_for(board.move_count())
    }

    /// Chooses a move for `side` on `board`.
    pub fn find_move(&self, board: &Board, side: Piece) -> Result<Move, SearchError> {
        Ok(self.search(board, side)?.best_move)
    }

    /// Searches `board` for `side` at the configured depth.
    ///
    /// `board` is not modified.
    pub fn search(&self, board: &Board, side: Piece) -> Result<SearchOutcome, SearchError> {
        self.search_depth(board, side, self.max_depth(board))
    }

    /// Searches `board` for `side` exactly `depth` plies deep.
    ///
    /// `side` must be the side to move, and `will_win_value + depth` must
    /// stay below `winning_value`.
    pub fn search_depth(
        &self,
        board: &Board,
        side: Piece,
        depth: u32,
    ) -> Result<SearchOutcome, SearchError> {
        let sense = Sense::for_side(side).ok_or(SearchError::InvalidSide(side))?;
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        self.config
            .validate()
            .map_err(|e| SearchError::InvalidConfig(e.to_string()))?;
        if i64::from(self.config.will_win_value) + i64::from(depth)
            >= i64::from(self.config.winning_value)
        {
            return Err(SearchError::DepthTooLarge(depth));
        }
        if let Some(winner) = board.winner() {
            return Err(SearchError::GameOver(winner));
        }
        if side != board.turn() {
            return Err(SearchError::NotOnTurn {
                side,
                turn: board.turn(),
            });
        }
        board.check_move_limit()?;
        if !board.has_move(sense.side()) {
            return Err(SearchError::NoLegalMoves(sense.side()));
        }

        let mut work = board.clone();
        let mut searcher = Searcher {
            config: &self.config,
            evaluator: &self.evaluator,
            max_depth: depth,
            best_move: None,
            nodes: 0,
        };
        let score = searcher.find_move(&mut work, depth, true, sense, i32::MIN, i32::MAX)?;
        let best_move = searcher
            .best_move
            .ok_or(SearchError::NoLegalMoves(sense.side()))?;

        tracing::debug!(
            side = ?sense.side(),
            depth,
            score,
            nodes = searcher.nodes,
            best = %best_move,
            "search complete"
        );

        Ok(SearchOutcome {
            best_move,
            score,
            depth,
            nodes: searcher.nodes,
        })
    }
}

/// Per-search state.
struct Searcher<'a, E> {
    config: &'a SearchConfig,
    evaluator: &'a E,
    max_depth: u32,
    best_move: Option<Move>,
    nodes: u64,
}

impl<E: Evaluator> Searcher<'_, E> {
    /// Returns the value of `board` searched `depth` more plies with the
    /// window `alpha..beta`. At the root (`save_move`) the chosen move is
    /// kept in `best_move`.
    ///
    /// Ties go to the later move. A node whose move limit is used up is
    /// scored as a leaf.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: u32,
        save_move: bool,
        sense: Sense,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, BoardError> {
        self.nodes += 1;

        if depth == 0 || board.winner().is_some() || board.check_move_limit().is_err() {
            return Ok(self.simple_score(board, depth));
        }

        let mut best_move = None;
        let mut best_value = match sense {
            Sense::Max => i32::MIN,
            Sense::Min => i32::MAX,
        };

        for mv in board.legal_moves(sense.side()) {
            board.make_move(mv)?;
            let value = self.find_move(board, depth - 1, false, sense.flip(), alpha, beta);
            board.undo();
            let value = value?;

            match sense {
                Sense::Max => {
                    if value >= best_value {
                        best_move = Some(mv);
                        best_value = value;
                        alpha = alpha.max(value);
                    }
                }
                Sense::Min => {
                    if value <= best_value {
                        best_move = Some(mv);
                        best_value = value;
                        beta = beta.min(value);
                    }
                }
            }
            if beta <= alpha {
                break;
            }
        }

        if save_move {
            self.best_move = best_move;
        }
        Ok(best_value)
    }

    /// Scores a leaf. Decided games score by how soon the win happened; a
    /// win on the first ply outranks every later one.
    fn simple_score(&self, board: &Board, depth: u32) -> i32 {
        let depth_bonus = depth as i32;
        let first_ply = depth + 1 == self.max_depth;
        match board.winner() {
            Some(Piece::White) if first_ply => self.config.winning_value,
            Some(Piece::White) => self.config.will_win_value + depth_bonus,
            Some(Piece::Black) if first_ply => -self.config.winning_value,
            Some(Piece::Black) => -self.config.will_win_value - depth_bonus,
            _ => self.evaluator.evaluate(board),
        }
    }
}
