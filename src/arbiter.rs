// Seam between the board and the game layer. The board asks, the game decides: move legality,
// turn order and drag permissions never live in the board itself.

use std::collections::HashSet;

use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;


// Render input owned by the game layer. The board never mutates it: changes are requested via
// `BoardIntent`s and come back as a new `BoardState`.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub grid: Grid,
    pub selected: Option<Coord>,
    pub active_force: Force,
    pub last_move: Option<(Coord, Coord)>,
    // Squares whose pieces are currently being animated into place.
    pub animated: HashSet<Coord>,
}

impl BoardState {
    pub fn new(grid: Grid, active_force: Force) -> Self {
        BoardState {
            grid,
            selected: None,
            active_force,
            last_move: None,
            animated: HashSet::new(),
        }
    }
}

pub trait BoardArbiter {
    // Whether the piece on `square` may be selected now.
    fn is_movable(&self, state: &BoardState, config: &BoardConfig, square: Coord) -> bool;
    // Whether the piece on `square` may be picked up and dragged.
    fn is_draggable(&self, state: &BoardState, config: &BoardConfig, square: Coord) -> bool;
    // Full legality check for moving the piece on `from` to `to`.
    fn can_move_to(&self, state: &BoardState, config: &BoardConfig, from: Coord, to: Coord)
        -> bool;
}

// Refuses everything. Useful for read-only boards (e.g. game review).
pub struct NoopArbiter {}

impl BoardArbiter for NoopArbiter {
    fn is_movable(&self, _state: &BoardState, _config: &BoardConfig, _square: Coord) -> bool {
        false
    }
    fn is_draggable(&self, _state: &BoardState, _config: &BoardConfig, _square: Coord) -> bool {
        false
    }
    fn can_move_to(
        &self, _state: &BoardState, _config: &BoardConfig, _from: Coord, _to: Coord,
    ) -> bool {
        false
    }
}
