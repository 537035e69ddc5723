//! The board position: 64 cells, each optionally holding a piece.

use std::fmt;

use crate::cell::Cell;
use crate::error::{PositionError, RulesError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 board. Cells are stored flat and indexed by [`Square::index`].
///
/// `Position` is `Copy`: simulating a move copies the whole array, which is
/// what the legality filter does once per candidate destination.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [Cell; Square::COUNT],
}

impl Position {
    /// Return a board with no pieces.
    pub fn empty() -> Position {
        let mut cells = [Cell::new(Square::from_index_unchecked(0)); Square::COUNT];
        for sq in Square::all() {
            cells[sq.index()] = Cell::new(sq);
        }
        Position { cells }
    }

    /// Return the standard starting position with every piece unmoved.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for side in Side::ALL {
            for (x, kind) in BACK_RANK.into_iter().enumerate() {
                let back = Square::from_index_unchecked(side.back_rank() * 8 + x as u8);
                let pawn = Square::from_index_unchecked(side.pawn_rank() * 8 + x as u8);
                position.put(Piece::new(kind, side, back));
                position.put(Piece::new(PieceKind::Pawn, side, pawn));
            }
        }
        position
    }

    #[inline]
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.index()]
    }

    /// Return the cell at caller-supplied coordinates.
    ///
    /// Off-board coordinates are an error, never clamped.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell, RulesError> {
        Ok(self.cell(Square::try_from_coords(x, y)?))
    }

    /// Iterate over all cells in index order (a1, b1, ..., h8).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].piece()
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_empty()
    }

    /// Place `piece` on the cell its coordinate names, returning any piece it displaced.
    pub fn put(&mut self, piece: Piece) -> Option<Piece> {
        self.cells[piece.square().index()].set_piece(piece)
    }

    /// Empty the given cell, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take_piece()
    }

    /// Iterate over every piece on the board.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().filter_map(Cell::piece)
    }

    /// Iterate over the pieces of one side.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |p| p.side() == side)
    }

    /// Return the set of occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.all_pieces().map(Piece::square).collect()
    }

    /// Return the squares occupied by one side.
    pub fn side_set(&self, side: Side) -> SquareSet {
        self.pieces(side).map(Piece::square).collect()
    }

    /// Return the side's king, or `None` if it has none.
    pub fn find_king(&self, side: Side) -> Option<Piece> {
        self.pieces(side).find(|p| p.kind() == PieceKind::King)
    }

    /// Return the side's king, failing with [`RulesError::MissingKing`] if it has none.
    pub fn king(&self, side: Side) -> Result<Piece, RulesError> {
        self.find_king(side).ok_or(RulesError::MissingKing { side })
    }

    /// Return the square of the side's king.
    pub fn king_square(&self, side: Side) -> Result<Square, RulesError> {
        self.king(side).map(Piece::square)
    }

    /// Validate the structural integrity of the position.
    pub fn validate(&self) -> Result<(), PositionError> {
        for cell in self.cells() {
            if let Some(piece) = cell.piece() {
                if piece.square() != cell.square() {
                    return Err(PositionError::Desync {
                        cell: cell.square(),
                        claimed: piece.square(),
                    });
                }
                let y = cell.y();
                if piece.kind() == PieceKind::Pawn && (y == 0 || y == 7) {
                    return Err(PositionError::PawnOnBackRank {
                        square: cell.square(),
                    });
                }
            }
        }

        for side in Side::ALL {
            let count = self
                .pieces(side)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(PositionError::InvalidKingCount { side, count });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for y in (0u8..8).rev() {
            write!(f, "{}  ", y + 1)?;
            for x in 0u8..8 {
                let sq = Square::from_index_unchecked(y * 8 + x);
                let c = position.piece_at(sq).map_or('.', Piece::letter);
                if x < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::error::{PositionError, RulesError};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn starting_position_validates() {
        Position::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_layout() {
        let position = Position::starting_position();
        assert_eq!(position.occupied().count(), 32);
        assert_eq!(position.side_set(Side::White).count(), 16);
        assert_eq!(
            position.piece_at(sq("d1")).map(Piece::kind),
            Some(PieceKind::Queen)
        );
        assert_eq!(
            position.piece_at(sq("g8")).map(Piece::kind),
            Some(PieceKind::Knight)
        );
        assert_eq!(position.king_square(Side::White), Ok(sq("e1")));
        assert_eq!(position.king_square(Side::Black), Ok(sq("e8")));
        assert!(position.all_pieces().all(|p| !p.has_moved()));
    }

    #[test]
    fn cells_know_their_coordinates() {
        let position = Position::empty();
        for (i, cell) in position.cells().enumerate() {
            assert_eq!(cell.square().index(), i);
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn cell_at_rejects_off_board() {
        let position = Position::empty();
        assert_eq!(
            position.cell_at(-1, 4).unwrap_err(),
            RulesError::OutOfBounds { x: -1, y: 4 }
        );
        assert_eq!(position.cell_at(4, 3).unwrap().square(), sq("e4"));
    }

    #[test]
    fn put_and_remove() {
        let mut position = Position::empty();
        let knight = Piece::new(PieceKind::Knight, Side::White, sq("c3"));
        assert_eq!(position.put(knight), None);
        assert_eq!(position.piece_at(sq("c3")), Some(knight));

        let rival = Piece::new(PieceKind::Bishop, Side::Black, sq("c3"));
        assert_eq!(position.put(rival), Some(knight));
        assert_eq!(position.remove(sq("c3")), Some(rival));
        assert!(position.is_empty_at(sq("c3")));
    }

    #[test]
    fn missing_king() {
        let position = Position::empty();
        assert_eq!(
            position.king(Side::Black),
            Err(RulesError::MissingKing { side: Side::Black })
        );
        assert_eq!(
            position.validate(),
            Err(PositionError::InvalidKingCount {
                side: Side::White,
                count: 0
            })
        );
    }

    #[test]
    fn pawn_on_back_rank_fails_validation() {
        let mut position = Position::starting_position();
        position.remove(sq("a8"));
        position.put(Piece::new(PieceKind::Pawn, Side::White, sq("a8")));
        assert_eq!(
            position.validate(),
            Err(PositionError::PawnOnBackRank { square: sq("a8") })
        );
    }

    #[test]
    fn copies_are_independent() {
        let original = Position::starting_position();
        let mut copy = original;
        copy.remove(sq("e2"));
        assert!(copy.is_empty_at(sq("e2")));
        assert!(!original.is_empty_at(sq("e2")));
    }

    #[test]
    fn pretty_print() {
        let output = Position::starting_position().pretty().to_string();
        assert!(output.contains("r n b q k b n r"));
        assert!(output.contains("R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }
}
