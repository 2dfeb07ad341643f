use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Rank. Stored 0-based, so "1" is `idx == 0`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8,
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i8) -> Option<Self> {
        (0..NUM_ROWS as i8).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as i32) - ('1' as i32);
        i8::try_from(idx).ok().and_then(Self::try_from_zero_based)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}

// File. Stored 0-based, so "a" is `idx == 0`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8,
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i8) -> Option<Self> {
        (0..NUM_COLS as i8).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as i32) - ('a' as i32);
        i8::try_from(idx).ok().and_then(Self::try_from_zero_based)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (col, row) = s.chars().collect_tuple()?;
        Some(Coord::new(Row::from_algebraic(row)?, Col::from_algebraic(col)?))
    }
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    // All 64 squares, rank by rank starting from "a1".
    pub fn all() -> impl Iterator<Item = Coord> + Clone {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}{})", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

// Squares are serialized in algebraic form so that configs and scenarios stay readable.
impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Coord::from_algebraic(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid square: {}", s)))
    }
}


impl Row {
    #![allow(dead_code)]
    pub const _1: Row = Row::from_zero_based(0);
    pub const _2: Row = Row::from_zero_based(1);
    pub const _3: Row = Row::from_zero_based(2);
    pub const _4: Row = Row::from_zero_based(3);
    pub const _5: Row = Row::from_zero_based(4);
    pub const _6: Row = Row::from_zero_based(5);
    pub const _7: Row = Row::from_zero_based(6);
    pub const _8: Row = Row::from_zero_based(7);
}

impl Col {
    #![allow(dead_code)]
    pub const A: Col = Col::from_zero_based(0);
    pub const B: Col = Col::from_zero_based(1);
    pub const C: Col = Col::from_zero_based(2);
    pub const D: Col = Col::from_zero_based(3);
    pub const E: Col = Col::from_zero_based(4);
    pub const F: Col = Col::from_zero_based(5);
    pub const G: Col = Col::from_zero_based(6);
    pub const H: Col = Col::from_zero_based(7);
}

macro_rules! coord_constants {
    ($($col:ident: $($name:ident = $row:ident),+;)+) => {
        impl Coord {
            #![allow(dead_code)]
            $($(pub const $name: Coord = Coord::new(Row::$row, Col::$col);)+)+
        }
    };
}

coord_constants! {
    A: A1 = _1, A2 = _2, A3 = _3, A4 = _4, A5 = _5, A6 = _6, A7 = _7, A8 = _8;
    B: B1 = _1, B2 = _2, B3 = _3, B4 = _4, B5 = _5, B6 = _6, B7 = _7, B8 = _8;
    C: C1 = _1, C2 = _2, C3 = _3, C4 = _4, C5 = _5, C6 = _6, C7 = _7, C8 = _8;
    D: D1 = _1, D2 = _2, D3 = _3, D4 = _4, D5 = _5, D6 = _6, D7 = _7, D8 = _8;
    E: E1 = _1, E2 = _2, E3 = _3, E4 = _4, E5 = _5, E6 = _6, E7 = _7, E8 = _8;
    F: F1 = _1, F2 = _2, F3 = _3, F4 = _4, F5 = _5, F6 = _6, F7 = _7, F8 = _8;
    G: G1 = _1, G2 = _2, G3 = _3, G4 = _4, G5 = _5, G6 = _6, G7 = _7, G8 = _8;
    H: H1 = _1, H2 = _2, H3 = _3, H4 = _4, H5 = _5, H6 = _6, H7 = _7, H8 = _8;
}
