//! Precomputed leaper reach tables.

use crate::square::Square;
use crate::square_set::SquareSet;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1), (0, -1), (-1, 0), (1, 0),
    (1, 1), (-1, 1), (1, -1), (-1, -1),
];

/// Build, for every square, the set of on-board squares reached by `offsets`.
const fn compute_reach(offsets: [(i8, i8); 8]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let x = (sq % 8) as i8;
        let y = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < 8 {
            let tx = x + offsets[d].0;
            let ty = y + offsets[d].1;
            if tx >= 0 && tx < 8 && ty >= 0 && ty < 8 {
                bits |= 1u64 << (ty as usize * 8 + tx as usize);
            }
            d += 1;
        }
        table[sq] = SquareSet::new(bits);
        sq += 1;
    }
    table
}

static KNIGHT_REACH: [SquareSet; 64] = compute_reach(KNIGHT_OFFSETS);
static KING_REACH: [SquareSet; 64] = compute_reach(KING_OFFSETS);

/// Return the squares a knight on `sq` jumps to, ignoring occupancy.
#[inline]
pub(crate) fn knight_reach(sq: Square) -> SquareSet {
    KNIGHT_REACH[sq.index()]
}

/// Return the squares adjacent to `sq`.
#[inline]
pub(crate) fn king_reach(sq: Square) -> SquareSet {
    KING_REACH[sq.index()]
}
