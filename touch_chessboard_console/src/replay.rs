// Replays a scripted gesture sequence through `BoardInteraction`, applying intents with a trivial
// game layer in between. Useful for reproducing touch bugs reported from devices.
//
// Scenario example:
//
//   geometry: { x: 0, y: 0, width: 320, height: 320 }
//   active_force: white
//   legal_moves: [e2e4]
//   gestures:
//     - { event: grant, x: 170, y: 250 }
//     - { event: move, move_x: 170, move_y: 170, dx: 0, dy: -80 }
//     - { event: release, dx: 0, dy: -80 }

use anyhow::{Context, anyhow};
use itertools::Itertools;
use log::info;
use serde::Deserialize;
use touch_chessboard::fen::{CLASSIC_STARTING_POSITION, grid_from_fen, grid_to_fen};
use touch_chessboard::highlight::square_highlights;
use touch_chessboard::interaction::{SHADOW_SIZE, VisualDirective};
use touch_chessboard::test_util::{ScriptedArbiter, apply_intents};
use touch_chessboard::{
    BoardConfig, BoardGeometry, BoardInteraction, BoardState, Coord, Force, GestureEvent,
};

use crate::tui::render_grid;


pub struct ReplayConfig {
    pub scenario_file: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: BoardConfig,
    pub geometry: BoardGeometry,
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default = "default_active_force")]
    pub active_force: Force,
    #[serde(default)]
    pub legal_moves: Vec<String>,
    #[serde(default)]
    pub selected: Option<Coord>,
    pub gestures: Vec<GestureEvent>,
}

fn default_position() -> String { CLASSIC_STARTING_POSITION.to_owned() }
fn default_active_force() -> Force { Force::White }

pub fn run(config: ReplayConfig) -> anyhow::Result<()> {
    let scenario = read_scenario(&config.scenario_file)?;
    let grid = grid_from_fen(&scenario.position)
        .with_context(|| format!("Invalid position '{}'", scenario.position))?;
    let arbiter = ScriptedArbiter::from_notation(scenario.legal_moves.iter().map(String::as_str))
        .ok_or_else(|| anyhow!("Invalid legal moves: {:?}", scenario.legal_moves))?;
    let board_config = scenario.config;
    let mut state = BoardState::new(grid, scenario.active_force);
    state.selected = scenario.selected;
    let cell_size = scenario.geometry.cell_size();
    let mut board = BoardInteraction::new();
    board.set_geometry(scenario.geometry);
    info!(
        "Replaying {} gestures, {} legal moves, cell size {}",
        scenario.gestures.len(),
        arbiter.legal_moves.len(),
        cell_size
    );

    for (idx, event) in scenario.gestures.into_iter().enumerate() {
        let reaction = board.handle(event, &state, &board_config, &arbiter);
        println!("[{idx}] {event:?}  ({:?})", board.phase(&state));
        for intent in &reaction.intents {
            println!("    intent: {intent:?}");
        }
        for directive in &reaction.directives {
            match directive {
                VisualDirective::Restack => {
                    let order = board.stacking_order(&state).iter().join(" ");
                    println!("    visual: Restack [{order}]");
                }
                VisualDirective::MoveShadow(shadow) => {
                    let pos = shadow.to_pixels();
                    let side = SHADOW_SIZE * cell_size;
                    println!(
                        "    visual: MoveShadow {shadow:?}, {side}x{side} at ({}, {})",
                        pos.x, pos.y
                    );
                }
                VisualDirective::TransformPiece { .. } => println!("    visual: {directive:?}"),
            }
        }
        if apply_intents(&mut state, &board_config, &arbiter, &reaction.intents) {
            if let Some((from, to)) = state.last_move {
                info!("Move applied: {from}{to}");
            }
        }
    }

    let highlights = square_highlights(&state, &board_config, &arbiter);
    print!("{}", render_grid(&state.grid, board_config.orientation, &highlights));
    println!("{}", grid_to_fen(&state.grid));
    Ok(())
}

fn read_scenario(filename: &str) -> anyhow::Result<Scenario> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read scenario file '{filename}'."))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse scenario file '{filename}'."))
}
