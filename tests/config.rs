use pretty_assertions::assert_eq;
use touch_chessboard::interaction::{BoardIntent, GestureEvent};
use touch_chessboard::{BoardConfig, BoardOrientation, Coord};


#[test]
fn partial_config() {
    let config: BoardConfig = serde_yaml::from_str("orientation: rotated\ndrag_enabled: false\n").unwrap();
    assert_eq!(config, BoardConfig {
        orientation: BoardOrientation::Rotated,
        drag_enabled: false,
        ..BoardConfig::default()
    });
}

#[test]
fn empty_config() {
    let config: BoardConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, BoardConfig::default());
}

#[test]
fn unknown_orientation() {
    assert!(serde_yaml::from_str::<BoardConfig>("orientation: sideways").is_err());
}

#[test]
fn gesture_script() {
    let script = "
- event: grant
  x: 170
  y: 250
- event: move
  move_x: 170
  move_y: 170
  dx: 0
  dy: -80
- event: release
  dx: 0
  dy: -80
- event: terminate
";
    let events: Vec<GestureEvent> = serde_yaml::from_str(script).unwrap();
    assert_eq!(events, vec![
        GestureEvent::Grant { x: 170., y: 250. },
        GestureEvent::Move { move_x: 170., move_y: 170., dx: 0., dy: -80. },
        GestureEvent::Release { dx: 0., dy: -80. },
        GestureEvent::Terminate,
    ]);
}

#[test]
fn intent_serialization() {
    let intent = BoardIntent::Move { from: Coord::E2, to: Coord::E4, animate: false };
    let yaml = serde_yaml::to_string(&intent).unwrap();
    assert_eq!(serde_yaml::from_str::<BoardIntent>(&yaml).unwrap(), intent);
    assert!(yaml.contains("e2"));
}
