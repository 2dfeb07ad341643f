use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::Row;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    // The row where the force's king and rooks start.
    pub fn home_row(self) -> Row {
        match self {
            Force::White => Row::_1,
            Force::Black => Row::_8,
        }
    }

    // Row delta of a single pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Force::White => 1,
            Force::Black => -1,
        }
    }
}
