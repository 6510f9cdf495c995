//! Tablut game state and rules.

use crate::BoardError;
use std::collections::HashSet;
use std::fmt;
use tablut_core::{
    rook_moves, rook_squares, Direction, Move, Piece, Square, BOARD_SIZE, NUM_SQUARES,
};

/// Move limit of a freshly initialized board.
pub const INITIAL_MOVE_LIMIT: usize = 10_000;

/// Length of an encoded position: the turn plus one letter per square.
pub const ENCODED_LEN: usize = NUM_SQUARES + 1;

/// Black pieces in the opening position.
const INITIAL_ATTACKERS: [Square; 16] = [
    sq(0, 3),
    sq(0, 4),
    sq(0, 5),
    sq(1, 4),
    sq(8, 3),
    sq(8, 4),
    sq(8, 5),
    sq(7, 4),
    sq(3, 0),
    sq(4, 0),
    sq(5, 0),
    sq(4, 1),
    sq(3, 8),
    sq(4, 8),
    sq(5, 8),
    sq(4, 7),
];

/// White pieces (other than the king) in the opening position.
const INITIAL_DEFENDERS: [Square; 8] = [
    Square::NORTH_OF_THRONE,
    Square::EAST_OF_THRONE,
    Square::SOUTH_OF_THRONE,
    Square::WEST_OF_THRONE,
    sq(4, 6),
    sq(4, 2),
    sq(2, 4),
    sq(6, 4),
];

const fn sq(col: u8, row: u8) -> Square {
    match Square::new(col, row) {
        Some(s) => s,
        None => panic!("square off the board"),
    }
}

/// One entry of the undo log.
///
/// Every applied move pushes a [`Boundary`](UndoEntry::Boundary) followed
/// by the prior contents of each square it changed, captures included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UndoEntry {
    Boundary,
    Restore(Square, Piece),
}

/// The state of a Tablut game.
///
/// `Board` owns the grid, the side to move, the win status, and a complete
/// undo log, so a search can apply and retract moves on a single instance.
/// Cloning produces a fully independent copy.
#[derive(Debug, Clone)]
pub struct Board {
    /// Square contents, indexed by [`Square::index`].
    grid: [Piece; NUM_SQUARES],
    /// Side to move (`White` or `Black`).
    turn: Piece,
    /// Winner, once decided.
    winner: Option<Piece>,
    /// Number of moves applied and not undone.
    move_count: usize,
    /// True when the current position repeats an earlier one.
    repeated: bool,
    /// Play stops once `2 * move_limit <= move_count`.
    move_limit: usize,
    /// Cached king location; `None` after the king has been captured.
    king_position: Option<Square>,
    /// Reversible edits, grouped per move.
    undo_log: Vec<UndoEntry>,
    /// Encoded positions seen so far.
    positions: HashSet<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the opening position with Black to move.
    pub fn new() -> Self {
        let mut board = Board {
            grid: [Piece::Empty; NUM_SQUARES],
            turn: Piece::Black,
            winner: None,
            move_count: 0,
            repeated: false,
            move_limit: INITIAL_MOVE_LIMIT,
            king_position: None,
            undo_log: Vec::new(),
            positions: HashSet::new(),
        };
        board.init();
        board
    }

    /// Resets this board to the opening position, discarding all history.
    pub fn init(&mut self) {
        self.grid = [Piece::Empty; NUM_SQUARES];
        for s in INITIAL_DEFENDERS {
            self.grid[s.index()] = Piece::White;
        }
        for s in INITIAL_ATTACKERS {
            self.grid[s.index()] = Piece::Black;
        }
        self.grid[Square::THRONE.index()] = Piece::King;
        self.king_position = Some(Square::THRONE);
        self.turn = Piece::Black;
        self.winner = None;
        self.move_count = 0;
        self.repeated = false;
        self.move_limit = INITIAL_MOVE_LIMIT;
        self.undo_log.clear();
        self.positions.clear();
    }

    /// Creates a board from an encoded position (see [`encoded`](Board::encoded)).
    ///
    /// The result has no history: its move count is zero and undo is a no-op.
    pub fn from_encoded(encoded: &str) -> Result<Self, BoardError> {
        let chars: Vec<char> = encoded.chars().collect();
        if chars.len() != ENCODED_LEN {
            return Err(BoardError::InvalidEncoding(format!(
                "expected {} characters, got {}",
                ENCODED_LEN,
                chars.len()
            )));
        }

        let turn = match Piece::from_char(chars[0]) {
            Some(p @ (Piece::White | Piece::Black)) => p,
            _ => {
                return Err(BoardError::InvalidEncoding(format!(
                    "invalid side to move '{}'",
                    chars[0]
                )))
            }
        };

        let mut board = Board::new();
        board.turn = turn;
        board.king_position = None;
        for (s, &c) in Square::all().zip(&chars[1..]) {
            let piece = Piece::from_char(c).ok_or_else(|| {
                BoardError::InvalidEncoding(format!("invalid piece '{}' at {}", c, s))
            })?;
            board.put(piece, s);
        }
        Ok(board)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Returns the side to move (`White` or `Black`).
    #[inline]
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Returns the winner, or `None` while the game is undecided.
    #[inline]
    pub fn winner(&self) -> Option<Piece> {
        self.winner
    }

    /// Returns true if the game was decided by a repeated position.
    #[inline]
    pub fn repeated_position(&self) -> bool {
        self.repeated
    }

    /// Returns the number of moves applied since the initial position
    /// that have not been undone.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the current move limit.
    #[inline]
    pub fn move_limit(&self) -> usize {
        self.move_limit
    }

    /// Returns the square holding the king, or `None` once it is captured.
    #[inline]
    pub fn king_position(&self) -> Option<Square> {
        self.king_position
    }

    /// Returns the contents of `s`.
    #[inline]
    pub fn get(&self, s: Square) -> Piece {
        self.grid[s.index()]
    }

    /// Returns the contents of the square at (`col`, `row`).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside 0-8.
    pub fn get_at(&self, col: u8, row: u8) -> Piece {
        assert!(
            col < BOARD_SIZE && row < BOARD_SIZE,
            "coordinates ({}, {}) off the board",
            col,
            row
        );
        self.grid[row as usize * BOARD_SIZE as usize + col as usize]
    }

    /// Sets `s` to `piece` without recording it for undo.
    ///
    /// Intended for setting up positions. Placing a king moves the cached
    /// king position; overwriting the king clears it.
    pub fn put(&mut self, piece: Piece, s: Square) {
        if piece == Piece::King {
            self.king_position = Some(s);
        } else if self.king_position == Some(s) {
            self.king_position = None;
        }
        self.grid[s.index()] = piece;
    }

    // ========================================================================
    // MOVE LIMIT
    // ========================================================================

    /// Sets the move limit to `limit`.
    ///
    /// It is an error if `2 * limit <= move_count()`.
    pub fn set_move_limit(&mut self, limit: usize) -> Result<(), BoardError> {
        if limit.saturating_mul(2) <= self.move_count {
            return Err(BoardError::InvalidMoveLimit {
                limit,
                move_count: self.move_count,
            });
        }
        self.move_limit = limit;
        Ok(())
    }

    /// Fails if the move limit leaves no room for another move.
    pub fn check_move_limit(&self) -> Result<(), BoardError> {
        if self.move_limit.saturating_mul(2) <= self.move_count {
            return Err(BoardError::MoveLimitExceeded {
                limit: self.move_limit,
                move_count: self.move_count,
            });
        }
        Ok(())
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// Returns true if `from`-`to` is a rook move whose path, including
    /// `to`, is empty. Only the king may land on the throne.
    pub fn is_unblocked_move(&self, from: Square, to: Square) -> bool {
        if to == Square::THRONE && self.get(from) != Piece::King {
            return false;
        }
        let Some(dir) = from.direction(to) else {
            return false;
        };
        for &s in rook_squares(from, dir) {
            if self.get(s) != Piece::Empty {
                return false;
            }
            if s == to {
                return true;
            }
        }
        false
    }

    /// Returns true if the piece on `from` belongs to the side to move.
    #[inline]
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.get(from).side() == self.turn
    }

    /// Returns true if `mv` is legal in the current position.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_from(mv.from()) && self.is_unblocked_move(mv.from(), mv.to())
    }

    /// Returns every unblocked move for `side`, ignoring whose turn it is.
    ///
    /// Moves are ordered by source square index, then direction
    /// (N, E, S, W), then distance.
    pub fn legal_moves(&self, side: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.piece_locations(side) {
            let piece = self.get(from);
            for dir in Direction::ALL {
                let ray = rook_squares(from, dir).iter().zip(rook_moves(from, dir));
                for (&to, &mv) in ray {
                    if self.get(to) != Piece::Empty {
                        break;
                    }
                    // Pieces may pass over the empty throne but only the king stops there.
                    if to == Square::THRONE && piece != Piece::King {
                        continue;
                    }
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Returns true if `side` has at least one legal move.
    pub fn has_move(&self, side: Piece) -> bool {
        self.piece_locations(side).into_iter().any(|from| {
            Direction::ALL.into_iter().any(|dir| {
                rook_moves(from, dir)
                    .iter()
                    .any(|mv| self.is_unblocked_move(from, mv.to()))
            })
        })
    }

    /// Returns the number of legal moves for the side to move.
    pub fn total_legal_moves(&self) -> usize {
        self.legal_moves(self.turn).len()
    }

    /// Returns the squares occupied by `side` in index order.
    pub fn piece_locations(&self, side: Piece) -> Vec<Square> {
        debug_assert!(side != Piece::Empty);
        let side = side.side();
        Square::all().filter(|&s| self.get(s).side() == side).collect()
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Applies `mv`, resolving captures and updating the win status.
    ///
    /// Fails without touching the board if the move is illegal or the move
    /// limit has been reached.
    pub fn make_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        self.check_move_limit()?;

        let (from, to) = (mv.from(), mv.to());
        let piece = self.get(from);
        let mover = piece.side();
        if piece == Piece::King {
            self.king_position = Some(to);
        }

        self.undo_log.push(UndoEntry::Boundary);
        self.record_put(piece, to);
        self.record_put(Piece::Empty, from);
        self.check_capture(to);

        self.move_count += 1;
        self.positions.insert(self.encoded());
        self.turn = self.turn.opponent();
        self.check_repeated();
        self.check_winner(mover);

        tracing::trace!(%mv, move_count = self.move_count, "applied move");
        Ok(())
    }

    /// Retracts the last move. Has no effect on a board without history.
    pub fn undo(&mut self) {
        if self.move_count == 0 || self.undo_log.is_empty() {
            return;
        }
        if !self.repeated {
            let current = self.encoded();
            self.positions.remove(&current);
        }
        loop {
            match self.undo_log.pop() {
                Some(UndoEntry::Restore(s, piece)) => {
                    if piece == Piece::King {
                        self.king_position = Some(s);
                    }
                    self.grid[s.index()] = piece;
                }
                Some(UndoEntry::Boundary) => break,
                None => panic!("undo log exhausted before reaching a move boundary"),
            }
        }
        self.winner = None;
        self.repeated = false;
        self.move_count -= 1;
        self.turn = self.turn.opponent();
    }

    /// Drops the undo log and position history. The position and win
    /// status are unchanged; later calls to [`undo`](Board::undo) only
    /// reach back to this point.
    pub fn clear_undo(&mut self) {
        self.undo_log.clear();
        self.positions.clear();
    }

    /// Sets `s` to `piece`, logging the old contents for undo.
    fn record_put(&mut self, piece: Piece, s: Square) {
        self.undo_log.push(UndoEntry::Restore(s, self.get(s)));
        self.grid[s.index()] = piece;
    }

    /// Removes pieces sandwiched by the piece that just arrived on `to`.
    fn check_capture(&mut self, to: Square) {
        let sq0 = to;
        let partners: Vec<Square> = Direction::ALL
            .into_iter()
            .filter_map(|dir| rook_squares(sq0, dir).get(1).copied())
            .collect();

        match self.get(sq0).side() {
            Piece::Black => {
                let hostile = self.throne_hostile();
                let king_in_castle = self.king_in_castle();
                for sq2 in partners {
                    let sq1 = sq0.between(sq2);
                    if self.get(sq1) == Piece::King && king_in_castle {
                        let frame = [sq0.diag1(sq2), sq0.diag2(sq2), Some(sq2), Some(sq0)];
                        let enclosed = frame.into_iter().all(|s| {
                            s.is_some_and(|s| {
                                self.get(s).side() == Piece::Black
                                    || (s == Square::THRONE && hostile)
                            })
                        });
                        if enclosed {
                            self.capture(sq1);
                        }
                    } else if (self.get(sq0).side() == self.get(sq2).side()
                        || (sq2 == Square::THRONE && hostile))
                        && self.get(sq0).opponent() == self.get(sq1).side()
                    {
                        self.capture(sq1);
                    }
                }
            }
            Piece::White => {
                for sq2 in partners {
                    let sq1 = sq0.between(sq2);
                    if (self.get(sq0).side() == self.get(sq2).side() || sq2 == Square::THRONE)
                        && self.get(sq0).opponent() == self.get(sq1).side()
                    {
                        self.capture(sq1);
                    }
                }
            }
            _ => {}
        }
    }

    /// The throne is hostile unless the king sits on it with fewer than
    /// three black pieces around it.
    fn throne_hostile(&self) -> bool {
        if self.king_position != Some(Square::THRONE) {
            return true;
        }
        Square::THRONE_NEIGHBORS
            .iter()
            .filter(|&&s| self.get(s).side() == Piece::Black)
            .count()
            >= 3
    }

    /// Returns true if the king is on the throne or next to it.
    pub fn king_in_castle(&self) -> bool {
        self.king_position.is_some_and(|k| {
            k == Square::THRONE || Square::THRONE_NEIGHBORS.contains(&k)
        })
    }

    /// Empties `sq1`. Taking the king hands the game to Black.
    fn capture(&mut self, sq1: Square) {
        let victim = self.get(sq1);
        if victim == Piece::King {
            tracing::debug!(square = %sq1, "king captured");
            self.winner = Some(Piece::Black);
            self.king_position = None;
        } else {
            tracing::trace!(square = %sq1, piece = %victim, "captured");
        }
        self.record_put(Piece::Empty, sq1);
    }

    /// Marks a repeated position and awards the game to the side on turn.
    fn check_repeated(&mut self) {
        let current = self.encoded();
        if self.positions.contains(&current) {
            tracing::debug!(winner = %self.turn, "position repeated");
            self.repeated = true;
            self.winner = Some(self.turn);
        }
        self.positions.insert(current);
    }

    /// Decides the game after `mover` has moved, unless already decided.
    fn check_winner(&mut self, mover: Piece) {
        if self.winner.is_some() {
            return;
        }
        if self.king_position.is_some_and(Square::is_edge) {
            tracing::debug!("king reached the edge");
            self.winner = Some(Piece::White);
        } else if !self.has_move(mover.opponent()) {
            tracing::debug!(winner = %mover, "opponent has no legal moves");
            self.winner = Some(mover);
        }
    }

    // ========================================================================
    // POSITION FEATURES
    // ========================================================================

    /// Returns the number of edges the king could reach in one move.
    pub fn king_to_edge(&self) -> usize {
        let Some(king) = self.king_position else {
            return 0;
        };
        let last = BOARD_SIZE - 1;
        [
            Square::new(king.col(), 0),
            Square::new(king.col(), last),
            Square::new(0, king.row()),
            Square::new(last, king.row()),
        ]
        .into_iter()
        .flatten()
        .filter(|&edge| self.is_unblocked_move(king, edge))
        .count()
    }

    /// Returns the number of black pieces on the board.
    pub fn num_black_pieces(&self) -> usize {
        self.piece_locations(Piece::Black).len()
    }

    /// Returns the number of white-side pieces on the board, king included.
    pub fn num_white_pieces(&self) -> usize {
        self.piece_locations(Piece::White).len()
    }

    /// Returns how many of the king's four rays end on a white piece.
    pub fn num_defenders(&self) -> usize {
        let Some(king) = self.king_position else {
            return 0;
        };
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                rook_squares(king, dir)
                    .iter()
                    .find(|&&s| self.get(s) != Piece::Empty)
            })
            .filter(|&&s| self.get(s).side() == Piece::White)
            .count()
    }

    /// Returns the turn followed by the contents of every square in index
    /// order, one letter each.
    pub fn encoded(&self) -> String {
        let mut out = String::with_capacity(ENCODED_LEN);
        out.push(self.turn.to_char());
        out.extend(self.grid.iter().map(|p| p.to_char()));
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{:2}", row + 1)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.get_at(col, row))?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)
    }
}
