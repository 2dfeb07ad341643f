// Mapping between board squares and screen pixels.
//
// Improvement potential: Support non-square cells (currently cell size is always `width / 8`).

use std::ops;

use serde::{Deserialize, Serialize};

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardOrientation {
    #[default]
    Normal, // White at bottom
    Rotated, // Black at bottom
}

// These coords describe board squares, like `Coord`, but row 0 corresponds to the top-most row
// on screen, which could be rank '1' or rank '8' depending on orientation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayCoord {
    pub x: u8,
    pub y: u8,
}

// Pixel offset. Depending on context either relative to the board origin or to the page.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

// Bounding rectangle of the board view in page pixels, as reported by the layout.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoardGeometry {
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        BoardGeometry { x, y, width: size, height: size }
    }

    pub fn cell_size(&self) -> f64 { self.width / NUM_COLS as f64 }

    pub fn origin(&self) -> PixelPos { PixelPos { x: self.x, y: self.y } }

    fn contains(&self, x: f64, y: f64) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}

impl PixelPos {
    pub fn new(x: f64, y: f64) -> Self { PixelPos { x, y } }
}

impl ops::Add<(f64, f64)> for PixelPos {
    type Output = Self;
    fn add(self, (x, y): (f64, f64)) -> Self::Output { PixelPos { x: self.x + x, y: self.y + y } }
}

impl ops::Add for PixelPos {
    type Output = Self;
    fn add(self, rhs: PixelPos) -> Self::Output { self + (rhs.x, rhs.y) }
}

impl ops::Sub<(f64, f64)> for PixelPos {
    type Output = Self;
    fn sub(self, (x, y): (f64, f64)) -> Self::Output { PixelPos { x: self.x - x, y: self.y - y } }
}


pub fn to_display_coord(coord: Coord, orientation: BoardOrientation) -> DisplayCoord {
    let col = coord.col.to_zero_based();
    let row = coord.row.to_zero_based();
    match orientation {
        BoardOrientation::Normal => DisplayCoord { x: col, y: NUM_ROWS - row - 1 },
        BoardOrientation::Rotated => DisplayCoord { x: NUM_COLS - col - 1, y: row },
    }
}

pub fn from_display_coord(q: DisplayCoord, orientation: BoardOrientation) -> Option<Coord> {
    if q.x >= NUM_COLS || q.y >= NUM_ROWS {
        return None;
    }
    let (col, row) = match orientation {
        BoardOrientation::Normal => (q.x, NUM_ROWS - q.y - 1),
        BoardOrientation::Rotated => (NUM_COLS - q.x - 1, q.y),
    };
    Some(Coord::new(Row::from_zero_based(row), Col::from_zero_based(col)))
}

// Square under the pointer. `pointer_x` and `pointer_y` are page coordinates, i.e. in the same
// coordinate system as `geometry`. Returns `None` when the pointer is outside the board.
pub fn square_at(
    pointer_x: f64, pointer_y: f64, geometry: &BoardGeometry, orientation: BoardOrientation,
) -> Option<Coord> {
    if !geometry.contains(pointer_x, pointer_y) {
        return None;
    }
    let cell = geometry.cell_size();
    if cell.is_nan() || cell <= 0. {
        return None;
    }
    let x = ((pointer_x - geometry.x) / cell).floor();
    let y = ((pointer_y - geometry.y) / cell).floor();
    // Also rejects points below the eighth row when the rectangle is taller than it is wide.
    if x >= NUM_COLS as f64 || y >= NUM_ROWS as f64 {
        return None;
    }
    from_display_coord(DisplayCoord { x: x as u8, y: y as u8 }, orientation)
}

// Top-left corner of the square's cell, relative to the board origin.
pub fn pixel_of(coord: Coord, cell_size: f64, orientation: BoardOrientation) -> PixelPos {
    let q = to_display_coord(coord, orientation);
    PixelPos { x: f64::from(q.x) * cell_size, y: f64::from(q.y) * cell_size }
}


#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: BoardGeometry = BoardGeometry { x: 20., y: 100., width: 320., height: 320. };

    #[test]
    fn corners() {
        use BoardOrientation::*;
        assert_eq!(square_at(20., 100., &GEOMETRY, Normal), Some(Coord::A8));
        assert_eq!(square_at(339.9, 419.9, &GEOMETRY, Normal), Some(Coord::H1));
        assert_eq!(square_at(20., 100., &GEOMETRY, Rotated), Some(Coord::H1));
        assert_eq!(square_at(339.9, 419.9, &GEOMETRY, Rotated), Some(Coord::A8));
    }

    #[test]
    fn outside_of_board() {
        let o = BoardOrientation::Normal;
        assert_eq!(square_at(19.9, 200., &GEOMETRY, o), None);
        assert_eq!(square_at(340., 200., &GEOMETRY, o), None);
        assert_eq!(square_at(100., 99.9, &GEOMETRY, o), None);
        assert_eq!(square_at(100., 420., &GEOMETRY, o), None);
        assert_eq!(square_at(-1e9, -1e9, &GEOMETRY, o), None);
    }

    #[test]
    fn tall_rectangle() {
        let geometry = BoardGeometry { height: 400., ..GEOMETRY };
        assert_eq!(square_at(30., 410., &geometry, BoardOrientation::Normal), Some(Coord::A1));
        assert_eq!(square_at(30., 430., &geometry, BoardOrientation::Normal), None);
    }

    #[test]
    fn degenerate_geometry() {
        let geometry = BoardGeometry::square(0., 0., 0.);
        assert_eq!(square_at(0., 0., &geometry, BoardOrientation::Normal), None);
    }

    #[test]
    fn pixel_of_is_inverse_of_square_at() {
        let cell = GEOMETRY.cell_size();
        for orientation in [BoardOrientation::Normal, BoardOrientation::Rotated] {
            for coord in Coord::all() {
                let corner = GEOMETRY.origin() + pixel_of(coord, cell, orientation);
                for eps in [0., 0.5, cell / 2., cell - 0.001] {
                    let p = corner + (eps, eps);
                    assert_eq!(
                        square_at(p.x, p.y, &GEOMETRY, orientation),
                        Some(coord),
                        "{:?} {:?} eps={}",
                        orientation,
                        coord,
                        eps
                    );
                }
            }
        }
    }

    #[test]
    fn display_coord_round_trip() {
        for orientation in [BoardOrientation::Normal, BoardOrientation::Rotated] {
            for coord in Coord::all() {
                let q = to_display_coord(coord, orientation);
                assert_eq!(from_display_coord(q, orientation), Some(coord));
            }
        }
        assert_eq!(from_display_coord(DisplayCoord { x: 8, y: 0 }, BoardOrientation::Normal), None);
    }
}
