//! Pieces as they sit on the board.

use std::fmt;

use crate::error::RulesError;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// A piece: tag, side, current coordinate, and has-moved flag.
///
/// A `Piece` is a plain value owned by the [`Cell`](crate::Cell) it stands on.
/// Its coordinate only changes through [`apply_move`](crate::apply_move), which
/// keeps it equal to the coordinate of the holding cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    square: Square,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Piece {
        Piece {
            kind,
            side,
            square,
            has_moved: false,
        }
    }

    /// Parse a placement letter into a piece on `square`.
    ///
    /// Uppercase letters are White, lowercase Black.
    pub fn from_letter(c: char, square: Square) -> Result<Piece, RulesError> {
        let kind = PieceKind::try_from(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Ok(Piece::new(kind, side, square))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Return the coordinate this piece stands on.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Return `true` once the piece has made a move.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return a copy with the has-moved flag set to `moved`.
    #[inline]
    pub const fn with_moved(self, moved: bool) -> Piece {
        Piece {
            has_moved: moved,
            ..self
        }
    }

    /// Return a copy of this piece standing on `square`, as used by move simulation.
    #[inline]
    pub(crate) const fn placed_at(self, square: Square) -> Piece {
        Piece {
            square,
            has_moved: self.has_moved || self.kind.tracks_first_move(),
            ..self
        }
    }

    /// Return a copy of this piece with its kind replaced, as used by promotion.
    #[inline]
    pub(crate) const fn promoted_to(self, kind: PieceKind) -> Piece {
        Piece { kind, ..self }
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        self.side as u8 != other.side as u8
    }

    /// Return the placement letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind.letter();
        match self.side {
            Side::White => base.to_ascii_uppercase(),
            Side::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.side, self.kind, self.square)
    }
}
