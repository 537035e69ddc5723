//! Knight destinations.

use crate::piece::Piece;
use crate::position::Position;
use crate::tables::knight_reach;

use super::Targets;

/// Generate knight destinations. Each of the eight jumps stands alone, so
/// nothing in between can block it.
pub(super) fn knight_targets(position: &Position, knight: &Piece) -> Targets {
    let mut targets = Targets::default();
    for dst in knight_reach(knight.square()) {
        targets.classify(position, knight, dst);
    }
    targets
}
