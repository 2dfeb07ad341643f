use itertools::Itertools;

use crate::arbiter::{BoardArbiter, BoardState};
use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::premove::reachable_squares;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SquareHighlightItem {
    LastMoveFrom,
    LastMoveTo,
    Destination, // legal move of the selected piece
    Premove,     // premove destination of the selected piece while waiting for the opponent
    Selected,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SquareHighlight {
    pub coord: Coord,
    pub item: SquareHighlightItem,
}

fn z_index(item: SquareHighlightItem) -> u8 {
    use SquareHighlightItem::*;
    match item {
        LastMoveFrom | LastMoveTo => 0,
        Destination | Premove => 1,
        Selected => 2,
    }
}

// All square highlights, ordered from bottom to top. Several highlights may share a square.
pub fn square_highlights<A: BoardArbiter + ?Sized>(
    state: &BoardState, config: &BoardConfig, arbiter: &A,
) -> Vec<SquareHighlight> {
    let mut highlights = Vec::new();
    let mut add = |coord, item| highlights.push(SquareHighlight { coord, item });
    if let Some((from, to)) = state.last_move {
        add(from, SquareHighlightItem::LastMoveFrom);
        add(to, SquareHighlightItem::LastMoveTo);
    }
    if let Some(selected) = state.selected {
        add(selected, SquareHighlightItem::Selected);
        if let Some(piece) = state.grid[selected] {
            if piece.force == state.active_force {
                if config.show_destinations {
                    for to in Coord::all() {
                        if to != selected && arbiter.can_move_to(state, config, selected, to) {
                            add(to, SquareHighlightItem::Destination);
                        }
                    }
                }
            } else if config.show_premoves {
                let premoves = reachable_squares(&state.grid, selected, config.premove_castling);
                for to in premoves.into_iter().sorted() {
                    add(to, SquareHighlightItem::Premove);
                }
            }
        }
    }
    // Stable sort: keeps board order within a layer.
    highlights.sort_by_key(|h| z_index(h.item));
    highlights
}
