//! Move representation and notation.

use crate::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move notation: expected '<square>-<column|row>', got '{0}'")]
    Malformed(String),

    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error("not a rook move: {from}-{to}")]
    NotRookMove { from: Square, to: Square },
}

/// A Tablut move: a piece slides from one square to another along a row
/// or column.
///
/// Encoded compactly: 7 bits from, 7 bits to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a move, returning `None` unless `from`-`to` is a rook move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Option<Self> {
        if from.is_rook_move(to) {
            Some(Move((from.index() as u16) | ((to.index() as u16) << 7)))
        } else {
            None
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 7) & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the canonical notation: `e7-8` for a move along a column,
    /// `e6-f` for a move along a row.
    pub fn to_notation(self) -> String {
        let (from, to) = (self.from(), self.to());
        if from.col() == to.col() {
            format!("{}-{}", from, to.row_char())
        } else {
            format!("{}-{}", from, to.col_char())
        }
    }

    /// Parses a move, returning `None` on any error.
    pub fn from_notation(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts the canonical form (`e7-8`, `e6-f`) and the long form
    /// (`e7-e8`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (from_str, dest) = text
            .split_once('-')
            .ok_or_else(|| MoveParseError::Malformed(text.to_string()))?;

        let from = Square::from_algebraic(from_str)
            .ok_or_else(|| MoveParseError::InvalidSquare(from_str.to_string()))?;

        let to = match dest.as_bytes() {
            [c @ b'a'..=b'i'] => Square::new(c - b'a', from.row()),
            [r @ b'1'..=b'9'] => Square::new(from.col(), r - b'1'),
            [_, _] => Square::from_algebraic(dest),
            _ => return Err(MoveParseError::Malformed(text.to_string())),
        }
        .ok_or_else(|| MoveParseError::InvalidSquare(dest.to_string()))?;

        Move::new(from, to).ok_or(MoveParseError::NotRookMove { from, to })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn move_encoding() {
        let m = Move::new(sq("e7"), sq("e8")).unwrap();
        assert_eq!(m.from(), sq("e7"));
        assert_eq!(m.to(), sq("e8"));
        assert!(Move::new(sq("e7"), sq("f8")).is_none());
        assert!(Move::new(sq("e7"), sq("e7")).is_none());
    }

    #[test]
    fn move_notation() {
        assert_eq!(Move::new(sq("e7"), sq("e8")).unwrap().to_notation(), "e7-8");
        assert_eq!(Move::new(sq("e6"), sq("f6")).unwrap().to_notation(), "e6-f");
        assert_eq!(Move::new(sq("f9"), sq("i9")).unwrap().to_notation(), "f9-i");
        assert_eq!(Move::new(sq("h5"), sq("h1")).unwrap().to_notation(), "h5-1");
    }

    #[test]
    fn move_from_notation() {
        let m: Move = "d1-c".parse().unwrap();
        assert_eq!(m.from(), sq("d1"));
        assert_eq!(m.to(), sq("c1"));

        let m: Move = "e4-c".parse().unwrap();
        assert_eq!(m.to(), sq("c4"));

        let m: Move = " e7-e9 ".parse().unwrap();
        assert_eq!(m.to(), sq("e9"));
    }

    #[test]
    fn move_from_notation_errors() {
        assert_eq!(
            "e7".parse::<Move>(),
            Err(MoveParseError::Malformed("e7".to_string()))
        );
        assert_eq!(
            "z7-8".parse::<Move>(),
            Err(MoveParseError::InvalidSquare("z7".to_string()))
        );
        assert_eq!(
            "e7-f8".parse::<Move>(),
            Err(MoveParseError::NotRookMove {
                from: sq("e7"),
                to: sq("f8")
            })
        );
        assert!(matches!(
            "e7-7".parse::<Move>(),
            Err(MoveParseError::NotRookMove { .. })
        ));
        assert!(Move::from_notation("e7-j").is_none());
        assert!(Move::from_notation("e7-10").is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(sq("e6"), sq("f6")).unwrap();
        assert_eq!(format!("{:?}", m), "Move(e6-f)");
        assert_eq!(format!("{}", m), "e6-f");
    }

    proptest! {
        #[test]
        fn notation_parses_back(from in 0u8..81, to in 0u8..81) {
            let from = Square::from_index(from).unwrap();
            let to = Square::from_index(to).unwrap();
            if let Some(m) = Move::new(from, to) {
                prop_assert_eq!(m.to_notation().parse::<Move>(), Ok(m));
            }
        }
    }
}
