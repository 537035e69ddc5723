//! Sliding piece (bishop, rook, queen) destinations.

use crate::piece::Piece;
use crate::position::Position;

use super::Targets;

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Walk each ray outward from the piece.
///
/// Empty cells are movable until the edge or the first occupied cell. That
/// cell is capturable when it holds an enemy and ends the ray either way.
pub(super) fn ray_targets(position: &Position, piece: &Piece, directions: &[(i8, i8)]) -> Targets {
    let mut targets = Targets::default();
    for &(dx, dy) in directions {
        let mut cursor = piece.square();
        while let Some(next) = cursor.offset(dx, dy) {
            if !targets.classify(position, piece, next) {
                break;
            }
            cursor = next;
        }
    }
    targets
}
