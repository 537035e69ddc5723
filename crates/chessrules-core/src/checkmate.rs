//! Checkmate detection under two rule sets.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::attacks::is_in_check;
use crate::error::{ParseMateRulesError, RulesError};
use crate::legality::{legal_capturable, legal_destinations, legal_movable};
use crate::position::Position;
use crate::side::Side;

/// Which escapes from check the resolver considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MateRules {
    /// Capture a lone checker, or move or capture with the King.
    ///
    /// Blocking a checking ray is not tried, and double check is always
    /// mate. This is the historical behaviour and the default.
    #[default]
    Legacy,
    /// Orthodox rules: mate iff in check with no legal destination for any piece.
    Complete,
}

impl fmt::Display for MateRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MateRules::Legacy => write!(f, "legacy"),
            MateRules::Complete => write!(f, "complete"),
        }
    }
}

impl FromStr for MateRules {
    type Err = ParseMateRulesError;

    fn from_str(s: &str) -> Result<MateRules, ParseMateRulesError> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(MateRules::Legacy),
            "complete" => Ok(MateRules::Complete),
            _ => Err(ParseMateRulesError { name: s.to_owned() }),
        }
    }
}

/// Return `true` if `side` is checkmated under [`MateRules::Legacy`].
pub fn is_checkmate(position: &Position, side: Side) -> Result<bool, RulesError> {
    is_checkmate_with(position, side, MateRules::Legacy)
}

/// Return `true` if `side` is checkmated under the given rules.
///
/// Fails with [`RulesError::MissingKing`] if `side` has no King.
pub fn is_checkmate_with(
    position: &Position,
    side: Side,
    rules: MateRules,
) -> Result<bool, RulesError> {
    match rules {
        MateRules::Legacy => legacy(position, side),
        MateRules::Complete => complete(position, side),
    }
}

fn legacy(position: &Position, side: Side) -> Result<bool, RulesError> {
    let check = is_in_check(position, side)?;
    if !check.is_check() {
        debug!(%side, "not in check");
        return Ok(false);
    }
    if check.is_double() {
        debug!(%side, attackers = check.attackers().len(), "double check, mate");
        return Ok(true);
    }

    let checker = check.attackers()[0].square();
    for defender in position.pieces(side) {
        if legal_capturable(position, &defender)?.contains(checker) {
            debug!(%side, %defender, %checker, "checker can be captured");
            return Ok(false);
        }
    }

    let king = check.king();
    if legal_movable(position, &king)?.is_nonempty() {
        debug!(%side, "king can step out of check");
        return Ok(false);
    }
    if legal_capturable(position, &king)?.is_nonempty() {
        debug!(%side, "king can capture out of check");
        return Ok(false);
    }

    debug!(%side, %checker, "no escape, mate");
    Ok(true)
}

fn complete(position: &Position, side: Side) -> Result<bool, RulesError> {
    let check = is_in_check(position, side)?;
    if !check.is_check() {
        debug!(%side, "not in check");
        return Ok(false);
    }
    for piece in position.pieces(side) {
        if legal_destinations(position, &piece)?.is_nonempty() {
            debug!(%side, %piece, "piece has a legal reply");
            return Ok(false);
        }
    }
    debug!(%side, "no legal reply, mate");
    Ok(true)
}
