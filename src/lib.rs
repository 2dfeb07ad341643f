#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod arbiter;
pub mod config;
pub mod coord;
pub mod dirty;
pub mod display;
pub mod fen;
pub mod force;
pub mod grid;
pub mod highlight;
pub mod interaction;
pub mod piece;
pub mod premove;
pub mod test_util;

pub use arbiter::{BoardArbiter, BoardState, NoopArbiter};
pub use config::BoardConfig;
pub use coord::{Col, Coord, Row};
pub use display::{BoardGeometry, BoardOrientation, PixelPos, pixel_of, square_at};
pub use force::Force;
pub use grid::Grid;
pub use interaction::{BoardIntent, BoardInteraction, GestureEvent, Reaction, VisualDirective};
pub use piece::{PieceId, PieceKind, PieceOnBoard};
pub use premove::reachable_squares;
