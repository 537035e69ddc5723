//! A single board cell.

use crate::piece::Piece;
use crate::square::Square;

/// Shade of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Light,
    Dark,
}

/// A cell: its coordinate and the piece standing on it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    square: Square,
    piece: Option<Piece>,
}

impl Cell {
    /// Create an empty cell.
    #[inline]
    pub const fn new(square: Square) -> Cell {
        Cell {
            square,
            piece: None,
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn x(&self) -> u8 {
        self.square.x()
    }

    #[inline]
    pub const fn y(&self) -> u8 {
        self.square.y()
    }

    /// Return the piece on this cell, if any.
    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Return the cell shade: `(x + y)` odd is light, even is dark (a1 is dark).
    #[inline]
    pub const fn color(&self) -> CellColor {
        if (self.x() + self.y()) % 2 != 0 {
            CellColor::Light
        } else {
            CellColor::Dark
        }
    }

    /// Occupy this cell, returning whatever stood here before.
    ///
    /// The caller is responsible for `piece.square()` matching this cell.
    #[inline]
    pub(crate) fn set_piece(&mut self, piece: Piece) -> Option<Piece> {
        debug_assert_eq!(piece.square(), self.square);
        self.piece.replace(piece)
    }

    /// Empty this cell, returning the piece that stood here.
    #[inline]
    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
