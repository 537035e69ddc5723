//! Legality filter: reject destinations that leave the mover's King attacked.

use tracing::trace;

use crate::attacks::is_under_attack;
use crate::error::RulesError;
use crate::movegen::{capturable, movable, targets};
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Return `true` if moving `piece` to `destination` would leave its own King attacked.
///
/// The move is played on a copy of `position`; the original is never touched.
/// A side with no King on the board has nothing to expose, so this reports
/// `false` for it.
pub fn would_expose_king(
    position: &Position,
    piece: &Piece,
    destination: Square,
) -> Result<bool, RulesError> {
    let mut scratch = *position;
    scratch.remove(piece.square());
    scratch.remove(destination);
    scratch.put(piece.placed_at(destination));

    let Some(king) = scratch.find_king(piece.side()) else {
        return Ok(false);
    };

    let exposed = is_under_attack(&scratch, &king)?;
    if exposed {
        trace!(
            %piece,
            %destination,
            king = %king.square(),
            "destination rejected, king left attacked"
        );
    }
    Ok(exposed)
}

fn retain_legal(
    position: &Position,
    piece: &Piece,
    set: SquareSet,
) -> Result<SquareSet, RulesError> {
    let mut legal = set;
    for sq in set {
        if would_expose_king(position, piece, sq)? {
            legal = legal.without(sq);
        }
    }
    Ok(legal)
}

/// Empty cells `piece` can move to without exposing its King.
pub fn legal_movable(position: &Position, piece: &Piece) -> Result<SquareSet, RulesError> {
    retain_legal(position, piece, movable(position, piece)?)
}

/// Enemy-held cells `piece` can capture on without exposing its King.
pub fn legal_capturable(position: &Position, piece: &Piece) -> Result<SquareSet, RulesError> {
    retain_legal(position, piece, capturable(position, piece)?)
}

/// Every legal destination of `piece`, moves and captures together.
pub fn legal_destinations(position: &Position, piece: &Piece) -> Result<SquareSet, RulesError> {
    Ok(legal_movable(position, piece)? | legal_capturable(position, piece)?)
}

/// Return `true` if `piece` may legally move or capture onto `destination`.
///
/// Cheaper than [`legal_destinations`] when only one cell is in question:
/// a single simulation runs, and only if the cell is geometrically reachable.
pub fn is_move_legal(
    position: &Position,
    piece: &Piece,
    destination: Square,
) -> Result<bool, RulesError> {
    if position.piece_at(piece.square()) != Some(*piece) {
        return Ok(false);
    }
    if !targets(position, piece).all().contains(destination) {
        return Ok(false);
    }
    Ok(!would_expose_king(position, piece, destination)?)
}

#[cfg(test)]
mod tests {
    use super::{
        is_move_legal, legal_capturable, legal_destinations, legal_movable, would_expose_king,
    };
    use crate::movegen::capturable;
    use crate::position::Position;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn set(names: &[&str]) -> SquareSet {
        names.iter().map(|n| sq(n)).collect()
    }

    const PINNED_KNIGHT: &str = "k7/8/8/8/1b6/8/3N4/1r2K3";

    #[test]
    fn pinned_knight_cannot_capture_checker() {
        let position: Position = PINNED_KNIGHT.parse().unwrap();
        let knight = position.piece_at(sq("d2")).unwrap();
        assert!(capturable(&position, &knight).unwrap().contains(sq("b1")));
        assert!(would_expose_king(&position, &knight, sq("b1")).unwrap());
        assert!(legal_capturable(&position, &knight).unwrap().is_empty());
        assert!(legal_movable(&position, &knight).unwrap().is_empty());
    }

    #[test]
    fn simulation_leaves_position_untouched() {
        let position: Position = PINNED_KNIGHT.parse().unwrap();
        let before = position;
        let knight = position.piece_at(sq("d2")).unwrap();
        for dest in ["b1", "b3", "c4", "e4", "f3", "f1"] {
            would_expose_king(&position, &knight, sq(dest)).unwrap();
        }
        assert_eq!(position, before);
    }

    #[test]
    fn pinned_rook_slides_along_the_pin() {
        // White rook e4 pinned on the e-file by the rook on e8.
        let position: Position = "k3r3/8/8/8/4R3/8/8/4K3".parse().unwrap();
        let rook = position.piece_at(sq("e4")).unwrap();
        assert_eq!(
            legal_destinations(&position, &rook).unwrap(),
            set(&["e2", "e3", "e5", "e6", "e7", "e8"])
        );
    }

    #[test]
    fn king_may_stand_next_to_king_on_a_covered_cell() {
        // The rook on a2 covers the second rank, so the black king cannot take
        // on d2 and does not count as attacking it.
        let position: Position = "8/8/8/8/8/3k4/R7/3K4".parse().unwrap();
        let king = position.piece_at(sq("d1")).unwrap();
        assert!(is_move_legal(&position, &king, sq("d2")).unwrap());
        assert!(legal_movable(&position, &king).unwrap().contains(sq("c2")));

        let bare: Position = "8/8/8/8/8/3k4/8/3K4".parse().unwrap();
        let king = bare.piece_at(sq("d1")).unwrap();
        assert!(!is_move_legal(&bare, &king, sq("d2")).unwrap());
        assert_eq!(legal_movable(&bare, &king).unwrap(), set(&["c1", "e1"]));
    }

    #[test]
    fn kingless_side_is_unrestricted() {
        let position: Position = "8/8/8/8/8/8/4P3/8".parse().unwrap();
        let pawn = position.piece_at(sq("e2")).unwrap();
        assert_eq!(legal_movable(&position, &pawn).unwrap(), set(&["e3", "e4"]));
    }

    #[test]
    fn is_move_legal_matches_destinations() {
        let position = Position::starting_position();
        let pawn = position.piece_at(sq("e2")).unwrap();
        assert!(is_move_legal(&position, &pawn, sq("e4")).unwrap());
        assert!(!is_move_legal(&position, &pawn, sq("e5")).unwrap());
        assert!(!is_move_legal(&position, &pawn, sq("d3")).unwrap());

        let king = position.piece_at(sq("e1")).unwrap();
        assert!(!is_move_legal(&position, &king, sq("e2")).unwrap());
    }

    #[test]
    fn stale_piece_is_never_legal() {
        let position = Position::starting_position();
        let mut pawn = position.piece_at(sq("e2")).unwrap();
        pawn = pawn.with_moved(true);
        assert!(!is_move_legal(&position, &pawn, sq("e3")).unwrap());
    }
}
