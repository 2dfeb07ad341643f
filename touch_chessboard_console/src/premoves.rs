use anyhow::{Context, anyhow};
use itertools::Itertools;
use touch_chessboard::fen::grid_from_fen;
use touch_chessboard::highlight::{SquareHighlight, SquareHighlightItem};
use touch_chessboard::{BoardOrientation, Coord, Force, reachable_squares};

use crate::tui::render_grid;


pub struct PremovesConfig {
    pub fen: String,
    pub square: String,
    pub castling_allowed: bool,
}

pub fn run(config: PremovesConfig) -> anyhow::Result<()> {
    let grid =
        grid_from_fen(&config.fen).with_context(|| format!("Invalid FEN '{}'", config.fen))?;
    let from = Coord::from_algebraic(&config.square)
        .ok_or_else(|| anyhow!("Invalid square '{}'", config.square))?;
    let Some(piece) = grid[from] else {
        println!("No piece on {from}");
        return Ok(());
    };
    let premoves =
        reachable_squares(&grid, from, config.castling_allowed).into_iter().sorted().collect_vec();
    let highlights = premoves
        .iter()
        .map(|&coord| SquareHighlight { coord, item: SquareHighlightItem::Premove })
        .chain([SquareHighlight { coord: from, item: SquareHighlightItem::Selected }])
        .collect_vec();
    let orientation = match piece.force {
        Force::White => BoardOrientation::Normal,
        Force::Black => BoardOrientation::Rotated,
    };
    print!("{}", render_grid(&grid, orientation, &highlights));
    println!(
        "{:?} {:?} on {}: {} squares: {}",
        piece.force,
        piece.kind,
        from,
        premoves.len(),
        premoves.iter().join(" ")
    );
    Ok(())
}
