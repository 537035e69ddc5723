//! Move application and pawn promotion.

use tracing::debug;

use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Move `piece` to `destination`, returning the piece captured there, if any.
///
/// No legality check is made; callers confirm the move first with
/// [`is_move_legal`](crate::is_move_legal). The moved piece's coordinate is
/// updated and, for pawns, rooks and kings, it is marked as having moved.
///
/// Fails with [`RulesError::PieceNotFound`] if no piece of the same kind and
/// side stands on the cell `piece` names.
pub fn apply_move(
    position: &mut Position,
    piece: &Piece,
    destination: Square,
) -> Result<Option<Piece>, RulesError> {
    let from = piece.square();
    let on_board = position
        .piece_at(from)
        .filter(|p| p.kind() == piece.kind() && p.side() == piece.side())
        .ok_or(RulesError::PieceNotFound { square: from })?;

    position.remove(from);
    let captured = position.remove(destination);
    position.put(on_board.placed_at(destination));

    match captured {
        Some(victim) => debug!(%on_board, %destination, %victim, "applied capture"),
        None => debug!(%on_board, %destination, "applied move"),
    }
    Ok(captured)
}

/// Return `true` if `piece` is a pawn standing on its promotion rank.
#[inline]
pub fn can_promote(piece: &Piece) -> bool {
    piece.kind() == PieceKind::Pawn && piece.square().y() == piece.side().promotion_rank()
}

/// Replace the promotable pawn on `square` with a piece of `kind`, returning it.
pub fn promote(
    position: &mut Position,
    square: Square,
    kind: PieceKind,
) -> Result<Piece, RulesError> {
    let pawn = position
        .piece_at(square)
        .filter(can_promote)
        .ok_or(RulesError::NotPromotable { square })?;
    if !kind.is_promotion_target() {
        return Err(RulesError::InvalidPromotion { kind });
    }

    let promoted = pawn.promoted_to(kind);
    position.put(promoted);
    debug!(%square, %kind, "promoted pawn");
    Ok(promoted)
}
