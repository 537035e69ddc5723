//! Error types for rule queries, placement parsing, and position validation.

use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Errors raised by rule queries and move application.
///
/// Every variant means the caller handed over a malformed position or call.
/// None of them describe a game outcome, and none are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A coordinate outside the 8×8 board was requested.
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds {
        /// Requested file coordinate.
        x: i32,
        /// Requested rank coordinate.
        y: i32,
    },
    /// A piece tag that is not one of the six orthodox kinds.
    #[error("unsupported piece type: {tag}")]
    UnsupportedPiece {
        /// The offending tag, as given.
        tag: String,
    },
    /// A check or checkmate query needed a king that is not on the board.
    #[error("no {side} king on the board")]
    MissingKing {
        /// Side whose king is missing.
        side: Side,
    },
    /// The piece to move is not standing on the cell its coordinate names.
    #[error("no matching piece on {square}")]
    PieceNotFound {
        /// The coordinate the piece claims.
        square: Square,
    },
    /// Promotion was requested for a piece that is not a pawn on its last rank.
    #[error("piece on {square} cannot be promoted")]
    NotPromotable {
        /// Square of the piece.
        square: Square,
    },
    /// Promotion was requested to a pawn or king.
    #[error("a pawn cannot be promoted to a {kind}")]
    InvalidPromotion {
        /// The rejected target kind.
        kind: PieceKind,
    },
}

/// An unrecognised checkmate rule-set name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mate rules '{name}', expected 'legacy' or 'complete'")]
pub struct ParseMateRulesError {
    /// The rejected name.
    pub name: String,
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 cells.
    #[error("rank {rank_index} describes {length} cells, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An empty-run digit outside 1..=8.
    #[error("invalid empty-cell count '{digit}'")]
    InvalidEmptyRun {
        /// The digit character.
        digit: char,
    },
    /// A letter that is not a piece.
    #[error("invalid piece in placement: {source}")]
    InvalidPiece {
        /// The underlying unsupported-piece error.
        #[source]
        source: RulesError,
    },
}

/// Errors from structural validation of a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {side}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        side: Side,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Square,
    },
    /// A piece's stored coordinate disagrees with the cell holding it.
    #[error("piece on {cell} believes it stands on {claimed}")]
    Desync {
        /// Cell holding the piece.
        cell: Square,
        /// Coordinate stored in the piece.
        claimed: Square,
    },
}
