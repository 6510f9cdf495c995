//! Tablut piece representation.

use std::fmt;

/// The contents of a single square.
///
/// The king fights for the white side, so most rules look at
/// [`side`](Piece::side) rather than at the piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Piece {
    #[default]
    Empty = 0,
    White = 1,
    Black = 2,
    King = 3,
}

impl Piece {
    /// All piece kinds in order.
    pub const ALL: [Piece; 4] = [Piece::Empty, Piece::White, Piece::Black, Piece::King];

    /// Returns the side this piece plays for. The king belongs to White.
    #[inline]
    pub const fn side(self) -> Piece {
        match self {
            Piece::King => Piece::White,
            other => other,
        }
    }

    /// Returns the opposing side of this piece's side.
    ///
    /// `Empty` has no opponent and maps to itself.
    #[inline]
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::White | Piece::King => Piece::Black,
            Piece::Black => Piece::White,
            Piece::Empty => Piece::Empty,
        }
    }

    /// Returns the single-letter code used in board encodings.
    pub const fn to_char(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::King => 'K',
        }
    }

    /// Parses a single-letter code.
    pub const fn from_char(c: char) -> Option<Piece> {
        match c {
            '-' => Some(Piece::Empty),
            'W' => Some(Piece::White),
            'B' => Some(Piece::Black),
            'K' => Some(Piece::King),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_maps_king_to_white() {
        assert_eq!(Piece::King.side(), Piece::White);
        assert_eq!(Piece::White.side(), Piece::White);
        assert_eq!(Piece::Black.side(), Piece::Black);
        assert_eq!(Piece::Empty.side(), Piece::Empty);
    }

    #[test]
    fn opponent() {
        assert_eq!(Piece::White.opponent(), Piece::Black);
        assert_eq!(Piece::King.opponent(), Piece::Black);
        assert_eq!(Piece::Black.opponent(), Piece::White);
        assert_eq!(Piece::Empty.opponent(), Piece::Empty);
    }

    #[test]
    fn char_codes() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(format!("{}", Piece::King), "K");
    }
}
