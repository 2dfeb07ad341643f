use std::collections::HashMap;

use console::Style;
use itertools::Itertools;
use touch_chessboard::coord::{NUM_COLS, NUM_ROWS};
use touch_chessboard::display::{DisplayCoord, from_display_coord};
use touch_chessboard::highlight::{SquareHighlight, SquareHighlightItem};
use touch_chessboard::piece::piece_to_pictogram;
use touch_chessboard::{BoardOrientation, Coord, Grid};


fn highlight_style(item: SquareHighlightItem) -> Style {
    use SquareHighlightItem::*;
    let base = Style::new().color256(233);
    match item {
        LastMoveFrom | LastMoveTo => base.on_color256(186),
        Destination => base.on_color256(151),
        Premove => base.on_color256(181),
        Selected => base.on_color256(114),
    }
}

// Highlights are drawn bottom to top, so only the last one for each square is visible.
pub fn render_grid(
    grid: &Grid, orientation: BoardOrientation, highlights: &[SquareHighlight],
) -> String {
    let colors = [
        Style::new().color256(233).on_color256(222),
        Style::new().color256(233).on_color256(230),
    ];
    let top_highlight: HashMap<Coord, SquareHighlightItem> =
        highlights.iter().map(|h| (h.coord, h.item)).collect();
    let display_rows = (0..NUM_ROWS)
        .map(|y| {
            (0..NUM_COLS)
                .filter_map(|x| from_display_coord(DisplayCoord { x, y }, orientation))
                .collect_vec()
        })
        .collect_vec();
    let col_header = match display_rows.first() {
        Some(row) => format!(
            "{}{}{}\n",
            format_square(' '),
            row.iter().map(|coord| format_square(coord.col.to_algebraic())).join(""),
            format_square(' ')
        ),
        None => String::new(),
    };

    let mut ret = col_header.clone();
    for row in &display_rows {
        let Some(first) = row.first() else {
            continue;
        };
        let row_header = format_square(first.row.to_algebraic());
        ret.push_str(&row_header);
        for &coord in row {
            let style = match top_highlight.get(&coord) {
                Some(&item) => highlight_style(item),
                None => {
                    let color_idx = (coord.row.to_zero_based() + coord.col.to_zero_based()) % 2;
                    colors[usize::from(color_idx)].clone()
                }
            };
            let ch = match grid[coord] {
                Some(piece) => piece_to_pictogram(piece.kind, piece.force),
                None => ' ',
            };
            ret.push_str(&style.apply_to(format_square(ch)).to_string());
        }
        ret.push_str(&row_header);
        ret.push('\n');
    }
    ret.push_str(&col_header);
    ret
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }
