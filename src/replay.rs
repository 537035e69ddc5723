//! Move-list replay on top of the rules core.

use tracing::{debug, info};

use chessrules_core::{
    MateRules, Piece, PieceKind, Position, RulesError, Side, Square, apply_move, can_promote,
    is_checkmate_with, is_in_check, is_move_legal, promote,
};

/// Errors raised while replaying a move list.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The move text is not coordinate notation such as `e2e4` or `e7e8q`.
    #[error("malformed move: {text}")]
    MalformedMove {
        /// The rejected text.
        text: String,
    },

    /// There is no piece on the source cell.
    #[error("no piece on {square}")]
    EmptySource {
        /// The source cell.
        square: Square,
    },

    /// The piece on the source cell belongs to the side not on move.
    #[error("{square} holds a {side} piece, but it is not {side}'s turn")]
    WrongSide {
        /// The source cell.
        square: Square,
        /// Side of the piece found there.
        side: Side,
    },

    /// The destination is not legal for the piece.
    #[error("illegal move: {text}")]
    IllegalMove {
        /// The rejected move text.
        text: String,
    },

    /// A promotion letter was given for a move that does not promote.
    #[error("move {text} does not promote")]
    UnexpectedPromotion {
        /// The rejected move text.
        text: String,
    },

    /// The game already ended in checkmate.
    #[error("the game is over")]
    GameOver,

    /// The rules core rejected the position or call.
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// A move in coordinate notation, with an optional promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveText {
    /// Parse `e2e4` or `e7e8q`.
    pub fn parse(text: &str) -> Result<MoveText, ReplayError> {
        let malformed = || ReplayError::MalformedMove {
            text: text.to_owned(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(malformed());
        }
        let from = Square::from_algebraic(&text[0..2]).ok_or_else(malformed)?;
        let to = Square::from_algebraic(&text[2..4]).ok_or_else(malformed)?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => {
                let kind = PieceKind::from_letter(c).ok_or_else(malformed)?;
                if !kind.is_promotion_target() {
                    return Err(malformed());
                }
                Some(kind)
            }
        };
        Ok(MoveText {
            from,
            to,
            promotion,
        })
    }
}

/// What happened after one replayed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The piece as it stands after the move (and any promotion).
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// The opponent is now in check.
    pub check: bool,
    /// The opponent is now checkmated.
    pub checkmate: bool,
}

/// A game in progress: the position, the side to move, and what has been captured.
#[derive(Debug, Clone)]
pub struct Replay {
    position: Position,
    turn: Side,
    rules: MateRules,
    captured: Vec<Piece>,
    finished: bool,
}

impl Replay {
    /// Start from `position` with White to move.
    pub fn new(position: Position, rules: MateRules) -> Self {
        Self {
            position,
            turn: Side::White,
            rules,
            captured: Vec::new(),
            finished: false,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Play one move for the side to move.
    ///
    /// A pawn reaching its last rank becomes a Queen unless another kind is
    /// named. Rejected moves leave the game unchanged.
    pub fn play(&mut self, text: &str) -> Result<Outcome, ReplayError> {
        if self.finished {
            return Err(ReplayError::GameOver);
        }
        let mv = MoveText::parse(text)?;
        let piece = self
            .position
            .piece_at(mv.from)
            .ok_or(ReplayError::EmptySource { square: mv.from })?;
        if piece.side() != self.turn {
            return Err(ReplayError::WrongSide {
                square: mv.from,
                side: piece.side(),
            });
        }
        if !is_move_legal(&self.position, &piece, mv.to)? {
            debug!(%piece, destination = %mv.to, "destination not legal");
            return Err(ReplayError::IllegalMove {
                text: text.to_owned(),
            });
        }

        let mut next = self.position;
        let captured = apply_move(&mut next, &piece, mv.to)?;
        let mut moved = next
            .piece_at(mv.to)
            .ok_or(RulesError::PieceNotFound { square: mv.to })?;
        if can_promote(&moved) {
            moved = promote(&mut next, mv.to, mv.promotion.unwrap_or(PieceKind::Queen))?;
            info!(square = %mv.to, kind = %moved.kind(), "pawn promoted");
        } else if mv.promotion.is_some() {
            return Err(ReplayError::UnexpectedPromotion {
                text: text.to_owned(),
            });
        }

        let opponent = self.turn.flip();
        let check = is_in_check(&next, opponent)?.is_check();
        let checkmate = check && is_checkmate_with(&next, opponent, self.rules)?;

        self.position = next;
        self.captured.extend(captured);
        self.turn = opponent;
        self.finished = checkmate;

        info!(
            side = %piece.side(),
            mv = text,
            captured = ?captured.map(|p| p.kind()),
            "move played"
        );
        if checkmate {
            info!(winner = %piece.side(), rules = %self.rules, "checkmate");
        } else if check {
            info!(side = %opponent, "check");
        }

        Ok(Outcome {
            moved,
            captured,
            check,
            checkmate,
        })
    }
}
