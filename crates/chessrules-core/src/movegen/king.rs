//! King steps, screened so the King never walks into an attack.

use crate::error::RulesError;
use crate::legality::would_expose_king;
use crate::piece::Piece;
use crate::position::Position;
use crate::square_set::SquareSet;
use crate::tables::king_reach;

use super::Targets;

/// Raw one-step destinations around the King.
pub(super) fn king_targets(position: &Position, king: &Piece) -> Targets {
    let mut targets = Targets::default();
    for sq in king_reach(king.square()) {
        targets.classify(position, king, sq);
    }
    targets
}

/// Keep only the cells of `set` the King can step onto without being attacked there.
///
/// The simulation lifts the King off its source cell, so a cell on the far
/// side of the King along an attacking ray is correctly seen as attacked.
pub(super) fn retain_safe(
    position: &Position,
    king: &Piece,
    set: SquareSet,
) -> Result<SquareSet, RulesError> {
    let mut safe = set;
    for sq in set {
        if would_expose_king(position, king, sq)? {
            safe = safe.without(sq);
        }
    }
    Ok(safe)
}
