//! Piece-placement strings (the first field of a FEN record) for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::error::PlacementError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Placement string for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Guess the has-moved flag for a piece read from a placement string.
///
/// Placement strings carry no history, so pawns, kings, and rooks count as
/// unmoved only while they stand on their starting cells.
fn infer_has_moved(piece: Piece) -> bool {
    let sq = piece.square();
    let side = piece.side();
    match piece.kind() {
        PieceKind::Pawn => sq.y() != side.pawn_rank(),
        PieceKind::King => sq.y() != side.back_rank() || sq.x() != 4,
        PieceKind::Rook => sq.y() != side.back_rank() || (sq.x() != 0 && sq.x() != 7),
        _ => false,
    }
}

impl FromStr for Position {
    type Err = PlacementError;

    /// Parse a placement string. Only the first whitespace-separated field is
    /// read, so a full FEN record is accepted too.
    fn from_str(s: &str) -> Result<Position, PlacementError> {
        let field = s.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Ranks are written from 8 down to 1
            let y = 7 - rank_index as i8;
            let mut x: i8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidEmptyRun { digit: c });
                    }
                    x += digit as i8;
                    if x > 8 {
                        return Err(PlacementError::BadRankLength {
                            rank_index,
                            length: x as usize,
                        });
                    }
                    continue;
                }

                let Some(sq) = Square::from_coords(x, y) else {
                    return Err(PlacementError::BadRankLength {
                        rank_index,
                        length: x as usize + 1,
                    });
                };
                let piece = Piece::from_letter(c, sq)
                    .map_err(|source| PlacementError::InvalidPiece { source })?;
                position.put(piece.with_moved(infer_has_moved(piece)));
                x += 1;
            }

            if x != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: x as usize,
                });
            }
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for x in 0u8..8 {
                let sq = Square::from_index_unchecked(y * 8 + x);
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if y > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::error::{PlacementError, RulesError};
    use crate::position::Position;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn parses_starting_placement() {
        let parsed: Position = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Position::starting_position());
    }

    #[test]
    fn accepts_full_fen_record() {
        let parsed: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(parsed, Position::starting_position());
    }

    #[test]
    fn display_roundtrip() {
        let text = "r3k2r/pp3ppp/2n5/3qp3/8/2N5/PPP2PPP/R3K2R";
        let position: Position = text.parse().unwrap();
        assert_eq!(position.to_string(), text);
    }

    #[test]
    fn infers_has_moved() {
        let position: Position = "4k3/8/8/8/4P3/8/3P4/R3K2R".parse().unwrap();
        assert!(position.piece_at(sq("e4")).unwrap().has_moved());
        assert!(!position.piece_at(sq("d2")).unwrap().has_moved());
        assert!(!position.piece_at(sq("e1")).unwrap().has_moved());
        assert!(!position.piece_at(sq("a1")).unwrap().has_moved());
        // Black king on e8 is home; it counts as unmoved too.
        assert!(!position.piece_at(sq("e8")).unwrap().has_moved());
    }

    #[test]
    fn wrong_rank_count() {
        let err = "8/8/8".parse::<Position>().unwrap_err();
        assert_eq!(err, PlacementError::WrongRankCount { found: 3 });
    }

    #[test]
    fn bad_rank_length() {
        let err = "9/8/8/8/8/8/8/8".parse::<Position>().unwrap_err();
        assert_eq!(err, PlacementError::InvalidEmptyRun { digit: '9' });

        let err = "ppppppppp/8/8/8/8/8/8/8".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            PlacementError::BadRankLength {
                rank_index: 0,
                length: 9
            }
        );

        let err = "7/8/8/8/8/8/8/8".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            PlacementError::BadRankLength {
                rank_index: 0,
                length: 7
            }
        );
    }

    #[test]
    fn unsupported_piece_letter() {
        let err = "8/8/8/3x4/8/8/8/8".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            PlacementError::InvalidPiece {
                source: RulesError::UnsupportedPiece { tag: "x".into() }
            }
        );
    }
}
