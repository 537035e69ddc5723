//! Orthodox chess rules: piece movement, check, checkmate and promotion.
//!
//! Queries take an explicit [`Position`] and never mutate it; only
//! [`apply_move`] and [`promote`] change a position.

mod attacks;
mod cell;
mod checkmate;
mod error;
mod legality;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod position;
mod side;
mod square;
mod square_set;
mod tables;

pub use attacks::{Check, attackers_of, is_attacked, is_in_check, is_protected};
pub use cell::{Cell, CellColor};
pub use checkmate::{MateRules, is_checkmate, is_checkmate_with};
pub use error::{ParseMateRulesError, PlacementError, PositionError, RulesError};
pub use legality::{
    is_move_legal, legal_capturable, legal_destinations, legal_movable, would_expose_king,
};
pub use make_move::{apply_move, can_promote, promote};
pub use movegen::{capturable, movable};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use position::{Position, PrettyPosition};
pub use side::Side;
pub use square::Square;
pub use square_set::SquareSet;
