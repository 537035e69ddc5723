//! Board coordinates using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

use crate::error::RulesError;

/// A cell coordinate on the 8×8 board, encoded as a `u8`.
///
/// Index = y * 8 + x, so a1 = 0, b1 = 1, ..., h8 = 63. `x` is the file
/// (a..h) and `y` the rank (1..8), both zero-based.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Create a square from signed coordinates, or `None` if off the board.
    #[inline]
    pub const fn from_coords(x: i8, y: i8) -> Option<Square> {
        if x >= 0 && x < 8 && y >= 0 && y < 8 {
            Some(Square(y as u8 * 8 + x as u8))
        } else {
            None
        }
    }

    /// Create a square from caller-supplied coordinates.
    ///
    /// Off-board coordinates are an [`RulesError::OutOfBounds`] error, never clamped.
    pub fn try_from_coords(x: i32, y: i32) -> Result<Square, RulesError> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Ok(Square(y as u8 * 8 + x as u8))
        } else {
            Err(RulesError::OutOfBounds { x, y })
        }
    }

    /// Parse an algebraic square name (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::from_coords((file_byte - b'a') as i8, (rank_byte - b'1') as i8)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file coordinate (0 = a, 7 = h).
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % 8
    }

    /// Return the rank coordinate (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / 8
    }

    /// Return the square `dx` files and `dy` ranks away, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        Square::from_coords(self.x() as i8 + dx, self.y() as i8 + dy)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x()) as char;
        write!(f, "{}{}", file, self.y() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
