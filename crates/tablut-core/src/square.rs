//! Board square representation.

use std::fmt;

/// Number of squares on a side of the board.
pub const BOARD_SIZE: u8 = 9;

/// Total number of squares on the board.
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// One of the four rook directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Towards higher rows.
    North = 0,
    /// Towards higher columns.
    East = 1,
    /// Towards lower rows.
    South = 2,
    /// Towards lower columns.
    West = 3,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the index (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the (column, row) step for this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// A square on the Tablut board, indexed 0-80.
///
/// Squares are indexed row-major from the lower left corner:
/// - a1 = 0, b1 = 1, ..., i1 = 8
/// - a2 = 9, ..., i9 = 80
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from column and row (both 0-8).
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-80).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SQUARES {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, returning `None` off the board.
    #[inline]
    const fn from_signed(col: i8, row: i8) -> Option<Self> {
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as u8, row as u8)
    }

    /// Parses a square from algebraic notation (e.g., "e5").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            c @ b'a'..=b'i' => c - b'a',
            c @ b'A'..=b'I' => c - b'A',
            _ => return None,
        };
        let row = match bytes[1] {
            r @ b'1'..=b'9' => r - b'1',
            _ => return None,
        };
        Self::new(col, row)
    }

    /// Returns the index (0-80).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the column (0-8).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns the row (0-8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the column letter ('a'-'i').
    #[inline]
    pub const fn col_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the row digit ('1'-'9').
    #[inline]
    pub const fn row_char(self) -> char {
        (b'1' + self.row()) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col_char(), self.row_char())
    }

    /// Returns true if this square lies on the outer ring of the board.
    #[inline]
    pub const fn is_edge(self) -> bool {
        let (col, row) = (self.col(), self.row());
        col == 0 || row == 0 || col == BOARD_SIZE - 1 || row == BOARD_SIZE - 1
    }

    /// Returns true if `to` shares a row or a column with this square
    /// and is a different square.
    #[inline]
    pub const fn is_rook_move(self, to: Square) -> bool {
        self.0 != to.0 && (self.col() == to.col() || self.row() == to.row())
    }

    /// Returns the direction of the rook move from this square to `to`.
    pub const fn direction(self, to: Square) -> Option<Direction> {
        if !self.is_rook_move(to) {
            return None;
        }
        Some(if to.row() > self.row() {
            Direction::North
        } else if to.row() < self.row() {
            Direction::South
        } else if to.col() > self.col() {
            Direction::East
        } else {
            Direction::West
        })
    }

    /// Returns the adjacent square in `dir`, if it is on the board.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> Option<Square> {
        self.offset(dir, 1)
    }

    /// Returns the square `distance` steps away in `dir`, if on the board.
    pub const fn offset(self, dir: Direction, distance: i8) -> Option<Square> {
        let (dc, dr) = dir.delta();
        Self::from_signed(
            self.col() as i8 + dc * distance,
            self.row() as i8 + dr * distance,
        )
    }

    /// Returns the square midway between this square and `other`.
    ///
    /// Both squares must lie on a common row or column an even distance
    /// apart; in practice this is used for squares two steps apart.
    #[inline]
    pub const fn between(self, other: Square) -> Square {
        debug_assert!(self.is_rook_move(other));
        let col = (self.col() + other.col()) / 2;
        let row = (self.row() + other.row()) / 2;
        Square(row * BOARD_SIZE + col)
    }

    /// Returns the first square flanking [`between`](Square::between)
    /// perpendicular to the line from this square to `other`: the square
    /// to its west on a column, or to its south on a row.
    pub const fn diag1(self, other: Square) -> Option<Square> {
        let mid = self.between(other);
        if self.col() == other.col() {
            Self::from_signed(mid.col() as i8 - 1, mid.row() as i8)
        } else {
            Self::from_signed(mid.col() as i8, mid.row() as i8 - 1)
        }
    }

    /// Returns the second flanking square: east of the midpoint on a column,
    /// north of it on a row.
    pub const fn diag2(self, other: Square) -> Option<Square> {
        let mid = self.between(other);
        if self.col() == other.col() {
            Self::new(mid.col() + 1, mid.row())
        } else {
            Self::new(mid.col(), mid.row() + 1)
        }
    }

    /// Iterates over all squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }

    // Landmark squares
    pub const THRONE: Square = Square(40);
    pub const NORTH_OF_THRONE: Square = Square(49);
    pub const SOUTH_OF_THRONE: Square = Square(31);
    pub const WEST_OF_THRONE: Square = Square(39);
    pub const EAST_OF_THRONE: Square = Square(41);

    /// The four squares orthogonally adjacent to the throne.
    pub const THRONE_NEIGHBORS: [Square; 4] = [
        Square::NORTH_OF_THRONE,
        Square::SOUTH_OF_THRONE,
        Square::WEST_OF_THRONE,
        Square::EAST_OF_THRONE,
    ];
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}
