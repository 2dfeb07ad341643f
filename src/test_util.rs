// Test utilities that cannot be moved to the "tests" folder, because the console replay uses them.

use std::collections::HashSet;

use crate::arbiter::{BoardArbiter, BoardState};
use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::interaction::BoardIntent;


// Arbiter with a fixed list of legal moves. Lets the side to move select and drag its own
// pieces, unless spectating.
#[derive(Clone, Debug, Default)]
pub struct ScriptedArbiter {
    pub legal_moves: HashSet<(Coord, Coord)>,
}

impl ScriptedArbiter {
    // Parses moves like "e2e4".
    pub fn from_notation<'a>(moves: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let legal_moves = moves.into_iter().map(parse_move).collect::<Option<HashSet<_>>>()?;
        Some(ScriptedArbiter { legal_moves })
    }
}

impl BoardArbiter for ScriptedArbiter {
    fn is_movable(&self, state: &BoardState, config: &BoardConfig, square: Coord) -> bool {
        !config.spectating
            && state.grid[square].is_some_and(|piece| piece.force == state.active_force)
    }
    fn is_draggable(&self, state: &BoardState, config: &BoardConfig, square: Coord) -> bool {
        config.drag_enabled && self.is_movable(state, config, square)
    }
    fn can_move_to(&self, _state: &BoardState, _config: &BoardConfig, from: Coord, to: Coord)
        -> bool
    {
        self.legal_moves.contains(&(from, to))
    }
}

pub fn parse_move(notation: &str) -> Option<(Coord, Coord)> {
    if !notation.is_ascii() || notation.len() != 4 {
        return None;
    }
    Some((Coord::from_algebraic(&notation[..2])?, Coord::from_algebraic(&notation[2..])?))
}

// Applies intents the way a trivial game layer would: moves are accepted if the arbiter allows
// them and hand the turn over. Returns whether any move was applied.
pub fn apply_intents<A: BoardArbiter + ?Sized>(
    state: &mut BoardState, config: &BoardConfig, arbiter: &A, intents: &[BoardIntent],
) -> bool {
    let mut moved = false;
    for intent in intents {
        match *intent {
            BoardIntent::SelectSquare(square) => state.selected = square,
            BoardIntent::Move { from, to, animate } => {
                if arbiter.can_move_to(state, config, from, to) {
                    state.grid.relocate(from, to);
                    state.last_move = Some((from, to));
                    state.selected = None;
                    state.active_force = state.active_force.opponent();
                    state.animated.clear();
                    if animate {
                        state.animated.insert(to);
                    }
                    moved = true;
                }
            }
        }
    }
    moved
}
