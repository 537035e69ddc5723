//! Per-piece destination generation.
//!
//! Every piece splits its reachable cells into two sets: *movable* cells
//! (empty) and *capturable* cells (enemy-occupied). Friendly-occupied cells
//! appear in neither. These are geometric sets; only the king's are screened
//! by the legality filter here, since the attack oracle relies on them.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::king::{king_targets, retain_safe};
use self::knights::knight_targets;
use self::pawns::pawn_targets;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, ray_targets};

/// The cells a piece reaches, split by whether they are empty or enemy-held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Targets {
    pub(crate) movable: SquareSet,
    pub(crate) capturable: SquareSet,
}

impl Targets {
    /// Sort `sq` into the right set for `piece`; friendly cells are dropped.
    ///
    /// Returns `true` if the cell was empty.
    #[inline]
    pub(crate) fn classify(&mut self, position: &Position, piece: &Piece, sq: Square) -> bool {
        match position.piece_at(sq) {
            None => {
                self.movable = self.movable.with(sq);
                true
            }
            Some(other) => {
                if other.is_enemy_of(*piece) {
                    self.capturable = self.capturable.with(sq);
                }
                false
            }
        }
    }

    #[inline]
    pub(crate) fn all(self) -> SquareSet {
        self.movable | self.capturable
    }
}

impl std::ops::BitOr for Targets {
    type Output = Targets;

    fn bitor(self, rhs: Targets) -> Targets {
        Targets {
            movable: self.movable | rhs.movable,
            capturable: self.capturable | rhs.capturable,
        }
    }
}

/// Raw geometric destinations for `piece`, with no legality screening at all.
pub(crate) fn targets(position: &Position, piece: &Piece) -> Targets {
    match piece.kind() {
        PieceKind::Pawn => pawn_targets(position, piece),
        PieceKind::Knight => knight_targets(position, piece),
        PieceKind::Bishop => ray_targets(position, piece, &BISHOP_DIRECTIONS),
        PieceKind::Rook => ray_targets(position, piece, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            ray_targets(position, piece, &BISHOP_DIRECTIONS)
                | ray_targets(position, piece, &ROOK_DIRECTIONS)
        }
        PieceKind::King => king_targets(position, piece),
    }
}

/// Return the empty cells `piece` can move to.
///
/// King destinations are screened by the legality filter; other kinds are not.
pub fn movable(position: &Position, piece: &Piece) -> Result<SquareSet, RulesError> {
    let set = targets(position, piece).movable;
    match piece.kind() {
        PieceKind::King => retain_safe(position, piece, set),
        _ => Ok(set),
    }
}

/// Return the enemy-occupied cells `piece` can capture on.
///
/// King captures are screened by the legality filter; other kinds are not.
pub fn capturable(position: &Position, piece: &Piece) -> Result<SquareSet, RulesError> {
    let set = targets(position, piece).capturable;
    match piece.kind() {
        PieceKind::King => retain_safe(position, piece, set),
        _ => Ok(set),
    }
}
