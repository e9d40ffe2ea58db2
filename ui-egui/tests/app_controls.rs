// SPDX-License-Identifier: MIT OR Apache-2.0

use chessboard_core::{Color, Gesture, Session, Square};
use chessboard_ui_egui::components::ControlAction;
use chessboard_ui_egui::{ChessApp, UiConfig};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn app() -> ChessApp {
    ChessApp::new(Session::new(), UiConfig::default())
}

#[test]
fn gestures_reach_the_session_in_order() {
    let mut app = app();
    assert!(app.apply_gestures(vec![
        Gesture::DragStart(sq("e2")),
        Gesture::DragOver(sq("e3")),
        Gesture::Drop(sq("e4")),
    ]));
    assert_eq!(app.session().active_color(), Color::Black);
    assert_eq!(app.session().history().len(), 1);
    assert!(!app.apply_gestures(Vec::new()));
}

#[test]
fn bad_fen_keeps_the_game() {
    let mut app = app();
    app.apply_gestures(vec![Gesture::Click(sq("e2")), Gesture::Click(sq("e4"))]);
    let before = app.session().snapshot().fen().to_string();

    app.apply_control(ControlAction::LoadFen("not a fen".to_string()));
    assert_eq!(app.session().snapshot().fen(), before);

    app.apply_control(ControlAction::NewGame);
    assert!(app.session().history().is_empty());
    assert_eq!(app.session().active_color(), Color::White);
}
