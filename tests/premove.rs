mod common;

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;
use touch_chessboard::fen::{CLASSIC_STARTING_POSITION, grid_from_fen};
use touch_chessboard::premove::{reachable_squares, rook_cols, rook_cols_of};
use touch_chessboard::{Col, Coord, Force, Grid, PieceId, PieceKind, PieceOnBoard};

use common::{grid, sorted, squares};


fn lone_piece(kind: PieceKind, force: Force, pos: Coord) -> Grid {
    let mut g = Grid::new();
    g[pos] = Some(PieceOnBoard::new(PieceId::new(), kind, force));
    g
}

fn reachable_count(kind: PieceKind, pos: Coord) -> usize {
    reachable_squares(&lone_piece(kind, Force::White, pos), pos, false).len()
}


#[test]
fn empty_square() {
    assert!(reachable_squares(&Grid::new(), Coord::E4, true).is_empty());
    let g = grid(CLASSIC_STARTING_POSITION);
    assert!(reachable_squares(&g, Coord::E4, true).is_empty());
}

#[test]
fn never_includes_origin() {
    for kind in PieceKind::iter() {
        for force in Force::iter() {
            for pos in Coord::all() {
                let mut g = lone_piece(kind, force, pos);
                // Give the king a rook on its own file, so that castling targets cover the origin.
                let rook_pos = Coord::new(force.home_row(), pos.col);
                if kind == PieceKind::King && pos != rook_pos {
                    g[rook_pos] = Some(PieceOnBoard::new(PieceId::new(), PieceKind::Rook, force));
                }
                assert!(!reachable_squares(&g, pos, true).contains(&pos), "{kind:?} {pos:?}");
            }
        }
    }
}

#[test]
fn knight_is_symmetric() {
    let knight_moves =
        |pos| reachable_squares(&lone_piece(PieceKind::Knight, Force::White, pos), pos, false);
    for from in Coord::all() {
        let reachable_from = knight_moves(from);
        for to in Coord::all() {
            let reachable_to = knight_moves(to);
            assert_eq!(
                reachable_from.contains(&to),
                reachable_to.contains(&from),
                "{from:?} {to:?}"
            );
        }
    }
}

#[test]
fn open_board_counts() {
    use PieceKind::*;
    assert_eq!(reachable_count(Rook, Coord::A1), 14);
    assert_eq!(reachable_count(Rook, Coord::E4), 14);
    assert_eq!(reachable_count(Bishop, Coord::A1), 7);
    assert_eq!(reachable_count(Bishop, Coord::H8), 7);
    assert_eq!(reachable_count(Bishop, Coord::D4), 13);
    assert_eq!(reachable_count(Queen, Coord::D1), 21);
    assert_eq!(reachable_count(Queen, Coord::D4), 27);
    assert_eq!(reachable_count(Knight, Coord::A1), 2);
    assert_eq!(reachable_count(Knight, Coord::D4), 8);
    assert_eq!(reachable_count(King, Coord::A1), 3);
    assert_eq!(reachable_count(King, Coord::D4), 8);
}

#[test]
fn occupancy_is_ignored() {
    let g = grid(CLASSIC_STARTING_POSITION);
    // Boxed-in rook still "reaches" its whole file and rank, own pieces included.
    assert_eq!(reachable_squares(&g, Coord::A1, false).len(), 14);
    assert_eq!(
        sorted(reachable_squares(&g, Coord::B1, false)),
        sorted(squares("a3 c3 d2"))
    );
}

#[test]
fn pawn_double_step() {
    let g = lone_piece(PieceKind::Pawn, Force::White, Coord::D2);
    assert_eq!(sorted(reachable_squares(&g, Coord::D2, false)), sorted(squares("c3 d3 e3 d4")));

    let g = lone_piece(PieceKind::Pawn, Force::Black, Coord::E7);
    assert_eq!(sorted(reachable_squares(&g, Coord::E7, false)), sorted(squares("d6 e6 f6 e5")));

    let g = lone_piece(PieceKind::Pawn, Force::White, Coord::D3);
    assert_eq!(sorted(reachable_squares(&g, Coord::D3, false)), sorted(squares("c4 d4 e4")));
}

#[test]
fn horde_pawns_on_first_rank() {
    let g = grid("4k3/8/8/8/8/8/8/PPPP4");
    assert_eq!(sorted(reachable_squares(&g, Coord::B1, false)), sorted(squares("a2 b2 c2 b3")));
}

#[test]
fn pawn_on_last_rank_has_no_moves() {
    let g = lone_piece(PieceKind::Pawn, Force::White, Coord::C8);
    assert!(reachable_squares(&g, Coord::C8, true).is_empty());
}

#[test]
fn king_castling_classic() {
    let g = grid("r3k2r/8/8/8/8/8/8/R3K2R");
    assert_eq!(
        sorted(reachable_squares(&g, Coord::E1, true)),
        sorted(squares("d1 d2 e2 f2 f1 c1 g1 a1 h1"))
    );
    assert_eq!(
        sorted(reachable_squares(&g, Coord::E8, true)),
        sorted(squares("d8 d7 e7 f7 f8 c8 g8 a8 h8"))
    );
    assert_eq!(
        sorted(reachable_squares(&g, Coord::E1, false)),
        sorted(squares("d1 d2 e2 f2 f1"))
    );
}

#[test]
fn king_castling_chess960() {
    // King on f1, rooks on b1 and g1.
    let g = grid("1r3kr1/8/8/8/8/8/8/1R3KR1");
    assert_eq!(
        sorted(reachable_squares(&g, Coord::F1, true)),
        sorted(squares("e1 e2 f2 g2 g1 b1"))
    );
}

#[test]
fn king_castling_uses_own_rooks_only() {
    let g = grid("r7/8/8/8/8/8/8/4K3");
    assert_eq!(
        sorted(reachable_squares(&g, Coord::E1, true)),
        sorted(squares("d1 d2 e2 f2 f1 c1 g1"))
    );
}

#[test]
fn king_castling_only_from_home_row() {
    let g = grid("8/8/8/8/8/8/4K3/R6R");
    assert_eq!(reachable_squares(&g, Coord::E2, true).len(), 8);
}

#[test]
fn rook_files() {
    let g = grid(CLASSIC_STARTING_POSITION);
    let cols = rook_cols(&g);
    assert_eq!(cols[Force::White], HashSet::from([Col::A, Col::H]));
    assert_eq!(cols[Force::Black], HashSet::from([Col::A, Col::H]));

    // Two rooks on one file collapse into a single entry.
    let g = grid_from_fen("8/8/8/8/8/8/R7/R7").unwrap();
    assert_eq!(rook_cols_of(&g, Force::White), HashSet::from([Col::A]));
    assert!(rook_cols_of(&g, Force::Black).is_empty());
}
