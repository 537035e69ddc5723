//! Pawn pushes and diagonal captures.

use crate::piece::Piece;
use crate::position::Position;

use super::Targets;

/// Generate pawn destinations.
///
/// One step forward onto an empty cell; two steps from an unmoved pawn when
/// both cells ahead are empty; one step diagonally forward only onto an enemy.
pub(super) fn pawn_targets(position: &Position, pawn: &Piece) -> Targets {
    let mut targets = Targets::default();
    let from = pawn.square();
    let dy = pawn.side().forward();

    if let Some(one) = from.offset(0, dy)
        && position.is_empty_at(one)
    {
        targets.movable = targets.movable.with(one);
        if !pawn.has_moved()
            && let Some(two) = from.offset(0, 2 * dy)
            && position.is_empty_at(two)
        {
            targets.movable = targets.movable.with(two);
        }
    }

    for dx in [-1, 1] {
        let Some(diag) = from.offset(dx, dy) else {
            continue;
        };
        if let Some(other) = position.piece_at(diag)
            && other.is_enemy_of(*pawn)
        {
            targets.capturable = targets.capturable.with(diag);
        }
    }

    targets
}
