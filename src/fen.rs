// Only the piece placement part of FEN is supported: this is everything the board needs to render.
// Side to move, castling rights etc. belong to the game layer.

use std::fmt;

use itertools::Itertools;

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::grid::Grid;
use crate::piece::{PieceId, PieceOnBoard, piece_from_ascii, piece_to_ascii};


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FenError {
    RowCount(usize),
    RowLength { row: char, len: usize },
    UnknownPiece(char),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::RowCount(n) => write!(f, "expected {} rows, found {}", NUM_ROWS, n),
            FenError::RowLength { row, len } => {
                write!(f, "row {} has {} squares, expected {}", row, len, NUM_COLS)
            }
            FenError::UnknownPiece(ch) => write!(f, "unknown piece: {}", ch),
        }
    }
}

impl std::error::Error for FenError {}

pub const CLASSIC_STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

// Accepts either a bare placement field or a full FEN (remaining fields are ignored).
// Piece ids are assigned in FEN reading order.
pub fn grid_from_fen(fen: &str) -> Result<Grid, FenError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let rows = placement.split('/').collect_vec();
    if rows.len() != NUM_ROWS as usize {
        return Err(FenError::RowCount(rows.len()));
    }
    let mut grid = Grid::new();
    let mut next_id = PieceId::new();
    for (row_idx, row_notation) in rows.into_iter().enumerate() {
        let row = Row::from_zero_based(NUM_ROWS - row_idx as u8 - 1);
        let row_error = |len| FenError::RowLength { row: row.to_algebraic(), len };
        let mut col_idx: usize = 0;
        for ch in row_notation.chars() {
            if let Some(n) = ch.to_digit(10) {
                col_idx += n as usize;
            } else {
                let (kind, force) = piece_from_ascii(ch).ok_or(FenError::UnknownPiece(ch))?;
                if col_idx >= NUM_COLS as usize {
                    return Err(row_error(col_idx + 1));
                }
                let pos = Coord::new(row, Col::from_zero_based(col_idx as u8));
                grid[pos] = Some(PieceOnBoard::new(next_id.inc(), kind, force));
                col_idx += 1;
            }
        }
        if col_idx != NUM_COLS as usize {
            return Err(row_error(col_idx));
        }
    }
    Ok(grid)
}

pub fn grid_to_fen(grid: &Grid) -> String {
    Row::all()
        .rev()
        .map(|row| {
            let mut s = String::new();
            let mut empty = 0;
            for col in Col::all() {
                match grid[Coord::new(row, col)] {
                    Some(piece) => {
                        if empty > 0 {
                            s.push_str(&empty.to_string());
                            empty = 0;
                        }
                        s.push(piece_to_ascii(piece.kind, piece.force));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                s.push_str(&empty.to_string());
            }
            s
        })
        .join("/")
}
