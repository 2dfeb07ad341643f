// Defines `BoardInteraction`: the state machine that turns touch gestures into board intents.
//
// The board does not own the game state. It reads `BoardState`, asks `BoardArbiter` what is
// allowed and answers with `BoardIntent`s; the game layer applies them (or not) and renders
// a new state. Visual feedback is returned as `VisualDirective`s; the board never touches views.
//
// A gesture is always one `Grant`, any number of `Move`s, and then one `Release` or `Terminate`.
// `previously_selected` survives between gestures: tapping the selected square again deselects
// it, even though the tap itself starts by re-selecting the square.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::arbiter::{BoardArbiter, BoardState};
use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::dirty::Dirty;
use crate::display::{BoardGeometry, BoardOrientation, PixelPos, pixel_of, square_at};
use crate::piece::{PieceId, PieceOnBoard};


// The dragged piece is enlarged so that it can be seen from under the finger.
pub const DRAGGED_PIECE_SCALE: f64 = 2.;

// Where renderers that cannot hide the shadow should put it.
pub const HIDDEN_SHADOW_POS: PixelPos = PixelPos { x: 999999., y: 999999. };

// Shadow side, in cells.
pub const SHADOW_SIZE: f64 = 2.;

// Pointer coordinates are page coordinates, in the same system as `BoardGeometry`.
// `dx`/`dy` are net displacement since `Grant`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    Grant { x: f64, y: f64 },
    Move { move_x: f64, move_y: f64, dx: f64, dy: f64 },
    Release { dx: f64, dy: f64 },
    // Gesture taken away by the system (e.g. by a scroll view or an incoming call).
    Terminate,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BoardIntent {
    SelectSquare(Option<Coord>),
    // Proposed move. Not validated as applied: the game layer may still reject it.
    Move { from: Coord, to: Coord, animate: bool },
}

// Offset is relative to the board origin.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PieceTransform {
    pub offset: PixelPos,
    pub scale: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShadowPosition {
    Hidden,
    // Top-left corner of the shadow, relative to the board origin.
    At(PixelPos),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum VisualDirective {
    // Re-render now with the dragged piece stacked above the others. Must be applied before the
    // next `Move`, otherwise the piece would be drawn below its neighbours while dragged.
    Restack,
    TransformPiece { piece: PieceId, transform: PieceTransform },
    MoveShadow(ShadowPosition),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Reaction {
    pub intents: Vec<BoardIntent>,
    pub directives: Vec<VisualDirective>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DraggedPiece {
    pub origin: Coord,
    pub piece: PieceOnBoard,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InteractionPhase {
    Idle,
    Selected,
    Dragging,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct InteractionSnapshot {
    pub dragging_piece: Option<DraggedPiece>,
    pub piece_transform: Option<PieceTransform>,
    pub drag_over: Option<Coord>,
    pub shadow: ShadowPosition,
}

#[derive(Clone, Debug)]
pub struct BoardInteraction {
    // Board rectangle from the latest layout. Gestures are ignored until it is known.
    geometry: Option<BoardGeometry>,
    // Selection at the start of the latest gesture that selected a piece.
    previously_selected: Option<Coord>,
    // Set strictly between a `Grant` that picked a piece up and the following `Release` or
    // `Terminate`.
    dragging_piece: Option<DraggedPiece>,
    // Square under the pointer while dragging; `None` if off-board.
    drag_over: Option<Coord>,
    piece_transform: Option<PieceTransform>,
    // Always equals `shadow_position(drag_over)`.
    shadow: Dirty<ShadowPosition>,
}

impl PieceTransform {
    pub fn at(offset: PixelPos) -> Self { PieceTransform { offset, scale: 1. } }
}

impl ShadowPosition {
    pub fn to_pixels(self) -> PixelPos {
        match self {
            ShadowPosition::Hidden => HIDDEN_SHADOW_POS,
            ShadowPosition::At(pos) => pos,
        }
    }
}

impl Reaction {
    pub fn is_empty(&self) -> bool { self.intents.is_empty() && self.directives.is_empty() }

    fn intent(&mut self, intent: BoardIntent) {
        debug!("Board intent: {:?}", intent);
        self.intents.push(intent);
    }
}

impl BoardInteraction {
    pub fn new() -> Self {
        BoardInteraction {
            geometry: None,
            previously_selected: None,
            dragging_piece: None,
            drag_over: None,
            piece_transform: None,
            shadow: Dirty::new(ShadowPosition::Hidden),
        }
    }

    pub fn set_geometry(&mut self, geometry: BoardGeometry) { self.geometry = Some(geometry); }

    pub fn dragging_piece(&self) -> Option<DraggedPiece> { self.dragging_piece }
    pub fn drag_over(&self) -> Option<Coord> { self.drag_over }
    pub fn shadow(&self) -> ShadowPosition { *self.shadow }

    pub fn phase(&self, state: &BoardState) -> InteractionPhase {
        if self.dragging_piece.is_some() {
            InteractionPhase::Dragging
        } else if state.selected.is_some() {
            InteractionPhase::Selected
        } else {
            InteractionPhase::Idle
        }
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        InteractionSnapshot {
            dragging_piece: self.dragging_piece,
            piece_transform: self.piece_transform,
            drag_over: self.drag_over,
            shadow: *self.shadow,
        }
    }

    // Squares with pieces in render order: static pieces first, then animated ones, then the
    // dragged piece. Emulates z-index for renderers that paint in order.
    pub fn stacking_order(&self, state: &BoardState) -> Vec<Coord> {
        let dragged = self.dragging_piece.map(|drag| drag.origin);
        let mut static_pieces = Vec::new();
        let mut animated_pieces = Vec::new();
        let mut interacted_piece = Vec::new();
        for (pos, _) in state.grid.pieces() {
            if state.animated.contains(&pos) {
                animated_pieces.push(pos);
            } else if dragged == Some(pos) {
                interacted_piece.push(pos);
            } else {
                static_pieces.push(pos);
            }
        }
        static_pieces.extend(animated_pieces);
        static_pieces.extend(interacted_piece);
        static_pieces
    }

    pub fn handle<A: BoardArbiter + ?Sized>(
        &mut self, event: GestureEvent, state: &BoardState, config: &BoardConfig, arbiter: &A,
    ) -> Reaction {
        let mut reaction = Reaction::default();
        let Some(geometry) = self.geometry else {
            debug!("Ignoring {:?}: board layout is not known yet", event);
            return reaction;
        };
        match event {
            GestureEvent::Grant { x, y } => {
                self.on_grant(x, y, &geometry, state, config, arbiter, &mut reaction)
            }
            GestureEvent::Move { move_x, move_y, .. } => {
                self.on_move(move_x, move_y, &geometry, config.orientation, &mut reaction)
            }
            GestureEvent::Release { dx, dy } => {
                self.on_release(dx, dy, &geometry, state, config, arbiter, &mut reaction)
            }
            GestureEvent::Terminate => {
                self.on_terminate(&geometry, config.orientation, &mut reaction)
            }
        }
        if self.shadow.take_dirt() {
            reaction.directives.push(VisualDirective::MoveShadow(*self.shadow));
        }
        reaction
    }

    fn on_grant<A: BoardArbiter + ?Sized>(
        &mut self, x: f64, y: f64, geometry: &BoardGeometry, state: &BoardState,
        config: &BoardConfig, arbiter: &A, reaction: &mut Reaction,
    ) {
        if self.dragging_piece.is_some() {
            // Previous gesture ended without `Release` or `Terminate`.
            debug!("Grant while dragging: dropping stale drag");
            self.on_terminate(geometry, config.orientation, reaction);
        }
        let Some(square) = square_at(x, y, geometry, config.orientation) else {
            return;
        };
        let selected = state.selected;
        match state.grid[square] {
            Some(piece) if arbiter.is_movable(state, config, square) => {
                self.previously_selected = selected;
                reaction.intent(BoardIntent::SelectSquare(Some(square)));
                if arbiter.is_draggable(state, config, square) {
                    debug!("Drag start: {:?} from {}", piece.kind, square);
                    self.dragging_piece = Some(DraggedPiece { origin: square, piece });
                    reaction.directives.push(VisualDirective::Restack);
                }
            }
            _ => {
                let move_from = selected.filter(|&sel| {
                    state.grid[sel].is_some() && arbiter.can_move_to(state, config, sel, square)
                });
                match move_from {
                    Some(from) => reaction.intent(BoardIntent::Move {
                        from,
                        to: square,
                        animate: true,
                    }),
                    None => reaction.intent(BoardIntent::SelectSquare(None)),
                }
            }
        }
    }

    fn on_move(
        &mut self, move_x: f64, move_y: f64, geometry: &BoardGeometry,
        orientation: BoardOrientation, reaction: &mut Reaction,
    ) {
        let Some(drag) = self.dragging_piece else {
            return;
        };
        let cell = geometry.cell_size();
        // Keep the piece centered horizontally and one cell above the finger.
        let transform = PieceTransform {
            offset: PixelPos::new(move_x - geometry.x - cell / 2., move_y - geometry.y - cell),
            scale: DRAGGED_PIECE_SCALE,
        };
        self.piece_transform = Some(transform);
        reaction
            .directives
            .push(VisualDirective::TransformPiece { piece: drag.piece.id, transform });

        let prev_drag_over = self.drag_over;
        self.drag_over = square_at(move_x, move_y, geometry, orientation);
        if self.drag_over != prev_drag_over {
            trace!("Drag over: {:?} -> {:?}", prev_drag_over, self.drag_over);
            self.shadow.set(shadow_position(self.drag_over, cell, orientation));
        }
    }

    fn on_release<A: BoardArbiter + ?Sized>(
        &mut self, dx: f64, dy: f64, geometry: &BoardGeometry, state: &BoardState,
        config: &BoardConfig, arbiter: &A, reaction: &mut Reaction,
    ) {
        let orientation = config.orientation;
        let orig = state.selected;
        let dest = self.drag_over.take();
        self.shadow.set(ShadowPosition::Hidden);
        let (Some(drag), Some(orig)) = (self.dragging_piece, orig) else {
            // Plain tap: selection has already been handled on grant.
            self.cancel_drag(geometry, orientation, reaction);
            return;
        };
        let has_moved = dx != 0. || dy != 0.;
        match dest {
            Some(dest) if arbiter.can_move_to(state, config, orig, dest) => {
                // The piece is already at the destination visually, so no animation.
                let offset = pixel_of(dest, geometry.cell_size(), orientation);
                reaction.directives.push(VisualDirective::TransformPiece {
                    piece: drag.piece.id,
                    transform: PieceTransform::at(offset),
                });
                reaction.intent(BoardIntent::Move { from: orig, to: dest, animate: false });
                self.dragging_piece = None;
                self.piece_transform = None;
            }
            _ => self.cancel_drag(geometry, orientation, reaction),
        }
        if self.previously_selected == Some(orig) && !has_moved {
            reaction.intent(BoardIntent::SelectSquare(None));
        }
    }

    fn on_terminate(
        &mut self, geometry: &BoardGeometry, orientation: BoardOrientation,
        reaction: &mut Reaction,
    ) {
        self.drag_over = None;
        self.shadow.set(ShadowPosition::Hidden);
        self.cancel_drag(geometry, orientation, reaction);
    }

    // Snaps the dragged piece back to its square. Noop if nothing is dragged.
    fn cancel_drag(
        &mut self, geometry: &BoardGeometry, orientation: BoardOrientation,
        reaction: &mut Reaction,
    ) {
        self.piece_transform = None;
        let Some(drag) = self.dragging_piece.take() else {
            return;
        };
        debug!("Drag cancelled: {:?} back to {}", drag.piece.kind, drag.origin);
        let offset = pixel_of(drag.origin, geometry.cell_size(), orientation);
        reaction.directives.push(VisualDirective::TransformPiece {
            piece: drag.piece.id,
            transform: PieceTransform::at(offset),
        });
    }
}

impl Default for BoardInteraction {
    fn default() -> Self { Self::new() }
}

// Shadow is two cells wide, so shifting by half a cell centers it on the square.
pub fn shadow_position(
    drag_over: Option<Coord>, cell_size: f64, orientation: BoardOrientation,
) -> ShadowPosition {
    match drag_over {
        Some(square) => {
            let half_cell = cell_size / 2.;
            ShadowPosition::At(pixel_of(square, cell_size, orientation) - (half_cell, half_cell))
        }
        None => ShadowPosition::Hidden,
    }
}
