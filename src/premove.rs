// Premove hints: squares a piece could geometrically move to, used for highlighting while waiting
// for the opponent. Occupancy is ignored completely: no blocking, no own-piece exclusion, no
// check. Legality is decided elsewhere (see `BoardArbiter::can_move_to`).

use std::collections::HashSet;

use enum_map::{EnumMap, enum_map};
use strum::IntoEnumIterator;

use crate::coord::{Col, Coord, Row};
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::PieceKind;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Mobility {
    Pawn(Force),
    Knight,
    Bishop,
    Rook,
    Queen,
    King {
        force: Force,
        // Files of own rooks. Moving the king onto one of them signals castling, which is how
        // castling is entered in Chess960 and other free-castling setups.
        rook_cols: HashSet<Col>,
        castling_allowed: bool,
    },
}

impl Mobility {
    // Mobility of the piece at `from`, or `None` if the square is empty.
    pub fn of_piece_at(grid: &Grid, from: Coord, castling_allowed: bool) -> Option<Self> {
        let piece = grid[from]?;
        Some(match piece.kind {
            PieceKind::Pawn => Mobility::Pawn(piece.force),
            PieceKind::Knight => Mobility::Knight,
            PieceKind::Bishop => Mobility::Bishop,
            PieceKind::Rook => Mobility::Rook,
            PieceKind::Queen => Mobility::Queen,
            PieceKind::King => Mobility::King {
                force: piece.force,
                rook_cols: rook_cols_of(grid, piece.force),
                castling_allowed,
            },
        })
    }

    pub fn can_reach(&self, from: Coord, to: Coord) -> bool {
        if from == to {
            return false;
        }
        match self {
            Mobility::Pawn(force) => pawn_can_reach(*force, from, to),
            Mobility::Knight => knight_can_reach(from, to),
            Mobility::Bishop => bishop_can_reach(from, to),
            Mobility::Rook => rook_can_reach(from, to),
            Mobility::Queen => bishop_can_reach(from, to) || rook_can_reach(from, to),
            Mobility::King { force, rook_cols, castling_allowed } => {
                king_can_reach(*force, rook_cols, *castling_allowed, from, to)
            }
        }
    }
}

fn diffs(from: Coord, to: Coord) -> (u8, u8) {
    let d_col = from.col.to_zero_based().abs_diff(to.col.to_zero_based());
    let d_row = from.row.to_zero_based().abs_diff(to.row.to_zero_based());
    (d_col, d_row)
}

// Double step is allowed from the first two ranks rather than the second rank only: Horde has
// white pawns on the first rank.
fn pawn_can_reach(force: Force, from: Coord, to: Coord) -> bool {
    let (d_col, _) = diffs(from, to);
    if d_col >= 2 {
        return false;
    }
    let d_row = to.row.to_zero_based() as i8 - from.row.to_zero_based() as i8;
    let dir = force.pawn_direction();
    let can_double_step = match force {
        Force::White => from.row <= Row::_2,
        Force::Black => from.row >= Row::_7,
    };
    d_row == dir || (can_double_step && d_row == dir * 2 && d_col == 0)
}

fn knight_can_reach(from: Coord, to: Coord) -> bool {
    matches!(diffs(from, to), (1, 2) | (2, 1))
}

fn bishop_can_reach(from: Coord, to: Coord) -> bool {
    let (d_col, d_row) = diffs(from, to);
    d_col == d_row
}

fn rook_can_reach(from: Coord, to: Coord) -> bool { from.col == to.col || from.row == to.row }

fn king_can_reach(
    force: Force, rook_cols: &HashSet<Col>, castling_allowed: bool, from: Coord, to: Coord,
) -> bool {
    let (d_col, d_row) = diffs(from, to);
    if d_col < 2 && d_row < 2 {
        return true;
    }
    let home_row = force.home_row();
    castling_allowed
        && from.row == home_row
        && to.row == home_row
        && ((from.col == Col::E && (to.col == Col::C || to.col == Col::G))
            || rook_cols.contains(&to.col))
}

pub fn rook_cols_of(grid: &Grid, force: Force) -> HashSet<Col> {
    grid.pieces()
        .filter(|(_, piece)| piece.force == force && piece.kind == PieceKind::Rook)
        .map(|(pos, _)| pos.col)
        .collect()
}

pub fn rook_cols(grid: &Grid) -> EnumMap<Force, HashSet<Col>> {
    let mut cols = enum_map! { _ => HashSet::new() };
    for force in Force::iter() {
        cols[force] = rook_cols_of(grid, force);
    }
    cols
}

// All squares the piece at `from` could premove to. Empty if there is no piece.
pub fn reachable_squares(grid: &Grid, from: Coord, castling_allowed: bool) -> HashSet<Coord> {
    let Some(mobility) = Mobility::of_piece_at(grid, from, castling_allowed) else {
        return HashSet::new();
    };
    Coord::all().filter(|&to| mobility.can_reach(from, to)).collect()
}
