// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod premoves;
mod replay;
mod tui;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Touch chessboard")
        .version(clap::crate_version!())
        .about("Developer console for the touch chessboard core")
        .subcommand_required(true)
        .subcommand(
            Command::new("premoves")
                .about("Prints squares a piece could premove to, ignoring occupancy")
                .arg(arg!(<fen> "Piece placement, in FEN"))
                .arg(arg!(<square> "Square of the piece, e.g. \"e1\""))
                .arg(arg!(--"no-castling" "Do not include castling targets for the king")),
        )
        .subcommand(
            Command::new("replay")
                .about("Replays a gesture scenario and prints board reactions")
                .arg(arg!(<scenario_file> "Path to the scenario: yaml-serialized Scenario.")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("premoves", sub_matches)) => premoves::run(premoves::PremovesConfig {
            fen: sub_matches.get_one::<String>("fen").unwrap().clone(),
            square: sub_matches.get_one::<String>("square").unwrap().clone(),
            castling_allowed: !sub_matches.get_flag("no-castling"),
        }),
        Some(("replay", sub_matches)) => replay::run(replay::ReplayConfig {
            scenario_file: sub_matches.get_one::<String>("scenario_file").unwrap().clone(),
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
