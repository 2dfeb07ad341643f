// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::collections::HashSet;

use itertools::Itertools;
use touch_chessboard::display::{BoardGeometry, BoardOrientation, PixelPos, pixel_of};
use touch_chessboard::fen::grid_from_fen;
use touch_chessboard::interaction::{BoardInteraction, GestureEvent, Reaction};
use touch_chessboard::test_util::{ScriptedArbiter, apply_intents};
use touch_chessboard::{BoardConfig, BoardState, Coord, Force, Grid};


// Board is not at page origin on purpose: catches mixing up page and board coordinates.
pub const GEOMETRY: BoardGeometry = BoardGeometry { x: 10., y: 50., width: 320., height: 320. };
pub const CELL: f64 = 40.;

#[allow(dead_code)]
pub fn grid(fen: &str) -> Grid { grid_from_fen(fen).unwrap() }

#[allow(dead_code)]
pub fn squares(notation: &str) -> HashSet<Coord> {
    notation.split_whitespace().map(|s| Coord::from_algebraic(s).unwrap()).collect()
}

#[allow(dead_code)]
pub fn sorted(squares: impl IntoIterator<Item = Coord>) -> Vec<Coord> {
    squares.into_iter().sorted().collect()
}

// Page position of the square's center.
#[allow(dead_code)]
pub fn square_center(coord: Coord, orientation: BoardOrientation) -> PixelPos {
    GEOMETRY.origin() + pixel_of(coord, CELL, orientation) + (CELL / 2., CELL / 2.)
}

// Board with a trivial game layer: intents are applied to `state` immediately, as a synchronous
// game layer would do before the next gesture event arrives.
#[allow(dead_code)]
pub struct TouchBoard {
    pub board: BoardInteraction,
    pub state: BoardState,
    pub config: BoardConfig,
    pub arbiter: ScriptedArbiter,
    grant_pos: PixelPos,
    pointer: PixelPos,
}

#[allow(dead_code)]
impl TouchBoard {
    pub fn new(fen: &str, active_force: Force, legal_moves: &[&str]) -> Self {
        let mut board = BoardInteraction::new();
        board.set_geometry(GEOMETRY);
        TouchBoard {
            board,
            state: BoardState::new(grid(fen), active_force),
            config: BoardConfig::default(),
            arbiter: ScriptedArbiter::from_notation(legal_moves.iter().copied()).unwrap(),
            grant_pos: PixelPos::default(),
            pointer: PixelPos::default(),
        }
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn center(&self, coord: Coord) -> PixelPos { square_center(coord, self.config.orientation) }

    pub fn handle(&mut self, event: GestureEvent) -> Reaction {
        let reaction = self.board.handle(event, &self.state, &self.config, &self.arbiter);
        apply_intents(&mut self.state, &self.config, &self.arbiter, &reaction.intents);
        reaction
    }

    pub fn grant_at(&mut self, pos: PixelPos) -> Reaction {
        self.grant_pos = pos;
        self.pointer = pos;
        self.handle(GestureEvent::Grant { x: pos.x, y: pos.y })
    }
    pub fn grant(&mut self, coord: Coord) -> Reaction { self.grant_at(self.center(coord)) }

    pub fn drag_to_pos(&mut self, pos: PixelPos) -> Reaction {
        self.pointer = pos;
        self.handle(GestureEvent::Move {
            move_x: pos.x,
            move_y: pos.y,
            dx: pos.x - self.grant_pos.x,
            dy: pos.y - self.grant_pos.y,
        })
    }
    pub fn drag_to(&mut self, coord: Coord) -> Reaction { self.drag_to_pos(self.center(coord)) }

    pub fn release(&mut self) -> Reaction {
        self.handle(GestureEvent::Release {
            dx: self.pointer.x - self.grant_pos.x,
            dy: self.pointer.y - self.grant_pos.y,
        })
    }

    pub fn terminate(&mut self) -> Reaction { self.handle(GestureEvent::Terminate) }

    // Grant and release on the same spot.
    pub fn tap(&mut self, coord: Coord) -> Vec<Reaction> { vec![self.grant(coord), self.release()] }
}
