use serde::{Deserialize, Serialize};

use crate::display::BoardOrientation;


// Board-level settings. Passed verbatim to `BoardArbiter`, so an arbiter can base its decisions
// on them as well (e.g. refuse any interaction while `spectating`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub orientation: BoardOrientation,
    // Drag-to-move. When disabled pieces can still be moved by tapping origin and destination.
    pub drag_enabled: bool,
    // Highlight legal destinations of the selected piece when it is its side's turn.
    pub show_destinations: bool,
    // Highlight premove destinations of the selected piece when it is not its side's turn.
    pub show_premoves: bool,
    // Whether premove hints include castling targets for the king.
    pub premove_castling: bool,
    pub spectating: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            orientation: BoardOrientation::Normal,
            drag_enabled: true,
            show_destinations: true,
            show_premoves: true,
            premove_castling: true,
            spectating: false,
        }
    }
}

impl BoardConfig {
    pub fn spectator() -> Self {
        BoardConfig { drag_enabled: false, spectating: true, ..Self::default() }
    }
}
