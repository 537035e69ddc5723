//! Attack and check queries.
//!
//! A cell is attacked when some enemy piece has it in its capturable set.
//! Every query scans the enemy pieces one by one, so each costs a full
//! generation pass per enemy piece.

use crate::error::RulesError;
use crate::movegen::capturable;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;
use crate::square::Square;

/// The result of a check query: the King and every enemy piece attacking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    king: Piece,
    attackers: Vec<Piece>,
}

impl Check {
    #[inline]
    pub fn is_check(&self) -> bool {
        !self.attackers.is_empty()
    }

    /// Return `true` if two or more pieces give check at once.
    #[inline]
    pub fn is_double(&self) -> bool {
        self.attackers.len() >= 2
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.king
    }

    #[inline]
    pub fn attackers(&self) -> &[Piece] {
        &self.attackers
    }
}

/// Return `true` as soon as any enemy of `target` can capture it.
pub(crate) fn is_under_attack(position: &Position, target: &Piece) -> Result<bool, RulesError> {
    for enemy in position.pieces(target.side().flip()) {
        if capturable(position, &enemy)?.contains(target.square()) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Return every enemy piece whose capturable set includes `target`'s cell.
pub fn attackers_of(position: &Position, target: &Piece) -> Result<Vec<Piece>, RulesError> {
    let mut attackers = Vec::new();
    for enemy in position.pieces(target.side().flip()) {
        if capturable(position, &enemy)?.contains(target.square()) {
            attackers.push(enemy);
        }
    }
    Ok(attackers)
}

/// Return `true` if a piece of `defender` standing on `square` could be captured.
///
/// When the cell does not already hold a piece of `defender`, a placeholder
/// of that side is put there on a copy of the position. This answers both
/// "is this empty cell covered" and "is this piece protected by its friends".
pub fn is_attacked(
    position: &Position,
    square: Square,
    defender: Side,
) -> Result<bool, RulesError> {
    match position.piece_at(square) {
        Some(occupant) if occupant.side() == defender => is_under_attack(position, &occupant),
        _ => {
            let mut scratch = *position;
            let placeholder = Piece::new(PieceKind::Pawn, defender, square).with_moved(true);
            scratch.remove(square);
            scratch.put(placeholder);
            is_under_attack(&scratch, &placeholder)
        }
    }
}

/// Return `true` if a friend of `piece` could recapture on its cell.
pub fn is_protected(position: &Position, piece: &Piece) -> Result<bool, RulesError> {
    is_attacked(position, piece.square(), piece.side().flip())
}

/// Resolve `side`'s King and collect the pieces giving it check.
///
/// Fails with [`RulesError::MissingKing`] if the side has no King.
pub fn is_in_check(position: &Position, side: Side) -> Result<Check, RulesError> {
    let king = position.king(side)?;
    let attackers = attackers_of(position, &king)?;
    Ok(Check { king, attackers })
}
