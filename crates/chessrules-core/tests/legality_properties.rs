//! Properties that hold for every piece in a handful of positions.

use chessrules_core::{
    Piece, Position, Side, Square, SquareSet, apply_move, capturable, is_in_check, legal_capturable,
    legal_destinations, legal_movable, movable, would_expose_king,
};

const POSITIONS: [&str; 6] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "r3k2r/pp3ppp/2n5/3qp3/8/2N5/PPP2PPP/R3K2R",
    "k7/8/8/8/1b6/8/3N4/1r2K3",
    "7k/8/8/8/8/8/3R1PPP/r5K1",
    "k3r3/8/8/8/8/3n4/8/4K3",
    "4k3/8/8/1P3p2/3N4/8/8/4K3",
];

fn positions() -> impl Iterator<Item = Position> {
    POSITIONS.iter().map(|p| p.parse().unwrap())
}

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn set(names: &[&str]) -> SquareSet {
    names.iter().map(|n| sq(n)).collect()
}

#[test]
fn friendly_cells_are_never_destinations() {
    for position in positions() {
        for piece in position.all_pieces() {
            let friends = position.side_set(piece.side());
            let moves = movable(&position, &piece).unwrap();
            let caps = capturable(&position, &piece).unwrap();
            assert!((moves & friends).is_empty(), "{piece} moves onto a friend");
            assert!((caps & friends).is_empty(), "{piece} captures a friend");
            assert!((moves & position.occupied()).is_empty(), "{piece} moves onto a piece");
            assert!(
                (caps & !position.side_set(piece.side().flip())).is_empty(),
                "{piece} captures an empty cell"
            );
        }
    }
}

#[test]
fn legal_destinations_never_leave_the_king_attacked() {
    for position in positions() {
        for piece in position.all_pieces() {
            for dest in legal_destinations(&position, &piece).unwrap() {
                let mut after = position;
                apply_move(&mut after, &piece, dest).unwrap();
                let check = is_in_check(&after, piece.side()).unwrap();
                assert!(!check.is_check(), "{piece} to {dest} leaves its king attacked");
            }
        }
    }
}

#[test]
fn legal_sets_are_filtered_subsets() {
    for position in positions() {
        for piece in position.all_pieces() {
            let moves = movable(&position, &piece).unwrap();
            let caps = capturable(&position, &piece).unwrap();
            let legal_moves = legal_movable(&position, &piece).unwrap();
            let legal_caps = legal_capturable(&position, &piece).unwrap();
            assert_eq!(legal_moves & moves, legal_moves);
            assert_eq!(legal_caps & caps, legal_caps);
            for dest in moves | caps {
                let exposed = would_expose_king(&position, &piece, dest).unwrap();
                assert_eq!(
                    !exposed,
                    (legal_moves | legal_caps).contains(dest),
                    "{piece} to {dest}"
                );
            }
        }
    }
}

#[test]
fn filter_calls_never_mutate_the_position() {
    for position in positions() {
        let before = position;
        for piece in position.all_pieces() {
            legal_destinations(&position, &piece).unwrap();
            for dest in Square::all() {
                would_expose_king(&position, &piece, dest).unwrap();
            }
        }
        assert_eq!(position, before);
        assert_eq!(position.to_string(), before.to_string());
    }
}

#[test]
fn rays_stop_at_the_first_piece() {
    // Queen d4: white pawn d6 above, black pawn f6 on the diagonal, black rook a4.
    let position: Position = "4k3/8/3P1p2/8/r2Q4/8/8/4K3".parse().unwrap();
    let queen = position.piece_at(sq("d4")).unwrap();
    let moves = movable(&position, &queen).unwrap();
    let caps = capturable(&position, &queen).unwrap();
    assert_eq!(caps, set(&["a4", "f6"]));
    assert!(moves.contains(sq("d5")));
    assert!(!moves.contains(sq("d6")));
    assert!(!moves.contains(sq("d7")));
    assert!(!moves.contains(sq("g7")));
    assert!(moves.contains(sq("b4")));
}

#[test]
fn knights_jump_over_walls() {
    let position: Position = "8/8/8/2pPp3/2PNP3/2pPp3/8/8".parse().unwrap();
    let knight = position.piece_at(sq("d4")).unwrap();
    assert_eq!(
        legal_movable(&position, &knight).unwrap(),
        set(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
    );
}

#[test]
fn pawn_double_step_rules() {
    let position: Position = "4k3/3p4/8/8/8/4n3/P3P3/4K3".parse().unwrap();
    let pieces: Vec<Piece> = ["a2", "e2", "d7"]
        .iter()
        .map(|n| position.piece_at(sq(n)).unwrap())
        .collect();
    assert_eq!(legal_movable(&position, &pieces[0]).unwrap(), set(&["a3", "a4"]));
    assert!(legal_movable(&position, &pieces[1]).unwrap().is_empty());
    assert_eq!(legal_movable(&position, &pieces[2]).unwrap(), set(&["d6", "d5"]));
}

#[test]
fn starting_king_has_nowhere_to_go() {
    let position = Position::starting_position();
    for side in Side::ALL {
        let king = position.king(side).unwrap();
        assert!(legal_destinations(&position, &king).unwrap().is_empty());
    }
}

#[test]
fn lone_pawn_without_kings() {
    let position: Position = "8/8/8/8/8/8/4P3/8".parse().unwrap();
    let pawn = position.piece_at(sq("e2")).unwrap();
    assert_eq!(legal_movable(&position, &pawn).unwrap(), set(&["e3", "e4"]));
    assert!(legal_capturable(&position, &pawn).unwrap().is_empty());
}
